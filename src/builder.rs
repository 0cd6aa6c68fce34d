//! In-memory editing of the current form

use crate::model::{FieldType, Form, FormField};
use crate::storage::{FormStorage, KeyValueStore};
use thiserror::Error;

/// Builder operation attempted in the wrong state
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    #[error("No form is currently being edited")]
    NoCurrentForm,
}

/// Holds the form being edited and commits it to storage
pub struct FormBuilder<S> {
    storage: FormStorage<S>,
    current_form: Option<Form>,
}

impl<S: KeyValueStore> FormBuilder<S> {
    pub fn new(storage: FormStorage<S>) -> Self {
        Self {
            storage,
            current_form: None,
        }
    }

    pub fn storage(&self) -> &FormStorage<S> {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut FormStorage<S> {
        &mut self.storage
    }

    /// Start a new, unsaved form and make it current
    pub fn create_form(&mut self, title: &str, description: &str) -> Form {
        let form = Form::new(title, description);
        self.current_form = Some(form.clone());
        form
    }

    pub fn current_form(&self) -> Option<&Form> {
        self.current_form.as_ref()
    }

    pub fn current_form_mut(&mut self) -> Option<&mut Form> {
        self.current_form.as_mut()
    }

    /// Load a stored form as the current one.
    ///
    /// An unknown id leaves the current form untouched.
    pub fn set_current_form(&mut self, form_id: &str) {
        match self
            .storage
            .get_forms()
            .into_iter()
            .find(|f| f.id == form_id)
        {
            Some(form) => self.current_form = Some(form),
            None => tracing::debug!("No stored form with id {form_id}; current form unchanged"),
        }
    }

    /// Append a field to the current form
    pub fn add_field(
        &mut self,
        kind: FieldType,
        label: &str,
        options: Option<Vec<String>>,
    ) -> Result<FormField, BuilderError> {
        let form = self
            .current_form
            .as_mut()
            .ok_or(BuilderError::NoCurrentForm)?;

        let field = FormField::new(kind, label, options, form.fields.len());
        form.fields.push(field.clone());
        Ok(field)
    }

    /// Persist the current form as it is
    pub fn save_form(&mut self) -> Result<(), BuilderError> {
        let form = self
            .current_form
            .as_ref()
            .ok_or(BuilderError::NoCurrentForm)?;
        self.storage.save_form(form);
        Ok(())
    }
}
