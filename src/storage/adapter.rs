//! Form collection persistence on top of a key-value store.
//!
//! The whole collection lives under one key as a JSON array. Every operation
//! is a full read-modify-write; failures are logged and swallowed so callers
//! only ever see an empty collection or an unchanged one.

use super::{KeyValueStore, StoreError};
use crate::model::Form;
use std::collections::HashSet;

/// Key holding the JSON-encoded form collection
pub const FORMS_KEY: &str = "forms";

/// Reads and writes the stored form collection
#[derive(Debug, Clone)]
pub struct FormStorage<S> {
    store: S,
}

impl<S: KeyValueStore> FormStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All stored forms, or an empty list when nothing is stored or the
    /// stored data cannot be decoded
    pub fn get_forms(&self) -> Vec<Form> {
        match self.try_get_forms() {
            Ok(forms) => forms,
            Err(e) => {
                tracing::error!("Error getting forms: {e}");
                Vec::new()
            }
        }
    }

    /// Insert or replace `form` by id, collapsing any duplicate ids
    pub fn save_form(&mut self, form: &Form) {
        if let Err(e) = self.try_save_form(form) {
            tracing::error!("Error saving form {}: {e}", form.id);
        }
    }

    /// Remove the form with `form_id`; unknown ids leave the collection as is
    pub fn delete_form(&mut self, form_id: &str) {
        if let Err(e) = self.try_delete_form(form_id) {
            tracing::error!("Error deleting form {form_id}: {e}");
        }
    }

    fn try_get_forms(&self) -> Result<Vec<Form>, StoreError> {
        match self.store.get_item(FORMS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn try_save_form(&mut self, form: &Form) -> Result<(), StoreError> {
        let mut forms = self.get_forms();

        match forms.iter().position(|f| f.id == form.id) {
            Some(index) => forms[index] = form.clone(),
            None => forms.push(form.clone()),
        }

        let forms = remove_duplicates(forms);
        self.persist(&forms)?;
        tracing::debug!("Saved form {} ({} stored)", form.id, forms.len());
        Ok(())
    }

    fn try_delete_form(&mut self, form_id: &str) -> Result<(), StoreError> {
        let forms: Vec<Form> = self
            .get_forms()
            .into_iter()
            .filter(|f| f.id != form_id)
            .collect();
        self.persist(&forms)
    }

    fn persist(&mut self, forms: &[Form]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(forms)?;
        self.store.set_item(FORMS_KEY, &raw)
    }
}

/// Keep the first form seen for each id
fn remove_duplicates(forms: Vec<Form>) -> Vec<Form> {
    let mut seen = HashSet::new();
    forms
        .into_iter()
        .filter(|form| seen.insert(form.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldType, FormField};
    use crate::storage::{temp_store_path, FileStore, MemoryStore, MockKeyValueStore};
    use pretty_assertions::assert_eq;

    fn storage() -> FormStorage<MemoryStore> {
        FormStorage::new(MemoryStore::new())
    }

    fn form_with_field(title: &str) -> Form {
        let mut form = Form::new(title, "desc");
        form.fields
            .push(FormField::new(FieldType::Text, "Name", None, 0));
        form
    }

    mod get_forms {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_when_nothing_stored() {
            assert!(storage().get_forms().is_empty());
        }

        #[test]
        fn test_empty_when_stored_value_is_garbage() {
            let mut store = MemoryStore::new();
            store.set_item(FORMS_KEY, "{not json").unwrap();
            let storage = FormStorage::new(store);
            assert!(storage.get_forms().is_empty());
        }

        #[test]
        fn test_empty_when_backend_fails() {
            let mut store = MockKeyValueStore::new();
            store.expect_get_item().returning(|_| {
                Err(StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "denied",
                )))
            });
            let storage = FormStorage::new(store);
            assert!(storage.get_forms().is_empty());
        }
    }

    mod save_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_round_trip() {
            let mut storage = storage();
            let form = form_with_field("Survey");
            storage.save_form(&form);

            let forms = storage.get_forms();
            let matching: Vec<_> = forms.iter().filter(|f| f.id == form.id).collect();
            assert_eq!(matching.len(), 1);
            assert_eq!(matching[0], &form);
        }

        #[test]
        fn test_upsert_replaces_by_id() {
            let mut storage = storage();
            let mut form = form_with_field("First");
            storage.save_form(&form);
            form.title = "Second".to_string();
            storage.save_form(&form);

            let forms = storage.get_forms();
            assert_eq!(forms.len(), 1);
            assert_eq!(forms[0].title, "Second");
        }

        #[test]
        fn test_appends_new_forms_in_order() {
            let mut storage = storage();
            let a = form_with_field("A");
            let b = form_with_field("B");
            storage.save_form(&a);
            storage.save_form(&b);

            let titles: Vec<_> = storage.get_forms().into_iter().map(|f| f.title).collect();
            assert_eq!(titles, vec!["A", "B"]);
        }

        #[test]
        fn test_collapses_duplicate_ids_first_wins() {
            let original = form_with_field("Original");
            let mut copy = original.clone();
            copy.title = "Copy".to_string();
            let other = form_with_field("Other");

            let mut store = MemoryStore::new();
            let corrupted = serde_json::to_string(&vec![&original, &copy]).unwrap();
            store.set_item(FORMS_KEY, &corrupted).unwrap();
            let mut storage = FormStorage::new(store);

            storage.save_form(&other);

            let forms = storage.get_forms();
            assert_eq!(forms.len(), 2);
            assert_eq!(forms[0].id, original.id);
            assert_eq!(forms[0].title, "Original");
            assert_eq!(forms[1].id, other.id);
        }

        #[test]
        fn test_write_failure_is_swallowed() {
            let mut store = MockKeyValueStore::new();
            store.expect_get_item().returning(|_| Ok(None));
            store
                .expect_set_item()
                .times(1)
                .returning(|_, _| Err(StoreError::Io(std::io::Error::other("disk full"))));
            let mut storage = FormStorage::new(store);
            storage.save_form(&form_with_field("Survey"));
        }

        #[test]
        fn test_persists_under_forms_key_as_array() {
            let mut storage = storage();
            storage.save_form(&form_with_field("Survey"));

            let raw = storage.store().get_item(FORMS_KEY).unwrap().unwrap();
            let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
            assert!(value.is_array());
            assert_eq!(value[0]["title"], "Survey");
        }

        #[test]
        fn test_file_backed_round_trip() {
            let path = temp_store_path("store.json");
            let form = form_with_field("On disk");
            FormStorage::new(FileStore::new(&path)).save_form(&form);

            let reopened = FormStorage::new(FileStore::new(&path));
            assert_eq!(reopened.get_forms(), vec![form]);
        }
    }

    mod delete_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_removes_form() {
            let mut storage = storage();
            let a = form_with_field("A");
            let b = form_with_field("B");
            storage.save_form(&a);
            storage.save_form(&b);

            storage.delete_form(&a.id);

            let forms = storage.get_forms();
            assert!(forms.iter().all(|f| f.id != a.id));
            assert_eq!(forms, vec![b]);
        }

        #[test]
        fn test_missing_id_is_noop() {
            let mut storage = storage();
            let a = form_with_field("A");
            storage.save_form(&a);

            storage.delete_form("does-not-exist");

            assert_eq!(storage.get_forms(), vec![a]);
        }
    }
}
