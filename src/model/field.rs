//! Form field records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of input a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Radio,
    Checkbox,
}

impl FieldType {
    /// All kinds, in button order
    pub const ALL: [FieldType; 3] = [FieldType::Text, FieldType::Radio, FieldType::Checkbox];

    /// Radio and checkbox fields carry an option list
    pub fn is_choice(self) -> bool {
        !matches!(self, Self::Text)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }

    /// Human-readable name used on buttons and prompts
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Radio => "Radio",
            Self::Checkbox => "Checkbox",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One question within a form.
///
/// `options` is `Some` exactly when `kind` is a choice type. `order` is the
/// insertion index within the parent form and is never renumbered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub required: bool,
    pub order: usize,
}

impl FormField {
    /// Build a new optional field with a fresh id.
    ///
    /// Options are dropped for text fields and default to an empty list for
    /// choice fields.
    pub fn new(kind: FieldType, label: &str, options: Option<Vec<String>>, order: usize) -> Self {
        let options = if kind.is_choice() {
            Some(options.unwrap_or_default())
        } else {
            None
        };

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            label: label.to_string(),
            options,
            required: false,
            order,
        }
    }

    /// Options as a slice (empty for text fields)
    pub fn option_list(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }
}

/// Split a comma-separated options answer into trimmed, non-empty entries
pub fn parse_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|opt| !opt.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod field_type {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_is_not_choice() {
            assert!(!FieldType::Text.is_choice());
            assert!(FieldType::Radio.is_choice());
            assert!(FieldType::Checkbox.is_choice());
        }

        #[test]
        fn test_serializes_lowercase() {
            let json = serde_json::to_string(&FieldType::Checkbox).unwrap();
            assert_eq!(json, "\"checkbox\"");
        }

        #[test]
        fn test_rejects_unknown_kind() {
            let parsed: Result<FieldType, _> = serde_json::from_str("\"select\"");
            assert!(parsed.is_err());
        }

        #[test]
        fn test_display_matches_wire_name() {
            assert_eq!(FieldType::Radio.to_string(), "radio");
        }
    }

    mod form_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_field_drops_options() {
            let field = FormField::new(FieldType::Text, "Name", Some(vec!["x".into()]), 0);
            assert!(field.options.is_none());
            assert!(!field.required);
        }

        #[test]
        fn test_choice_field_defaults_to_empty_options() {
            let field = FormField::new(FieldType::Radio, "Color", None, 2);
            assert_eq!(field.options, Some(vec![]));
            assert_eq!(field.order, 2);
        }

        #[test]
        fn test_ids_are_unique() {
            let a = FormField::new(FieldType::Text, "A", None, 0);
            let b = FormField::new(FieldType::Text, "B", None, 1);
            assert_ne!(a.id, b.id);
        }

        #[test]
        fn test_json_uses_type_key_and_omits_missing_options() {
            let field = FormField::new(FieldType::Text, "Name", None, 0);
            let value = serde_json::to_value(&field).unwrap();
            assert_eq!(value["type"], "text");
            assert_eq!(value["label"], "Name");
            assert_eq!(value["required"], false);
            assert_eq!(value["order"], 0);
            assert!(value.get("options").is_none());
        }

        #[test]
        fn test_deserializes_stored_shape() {
            let json = r#"{"id":"f1","type":"checkbox","label":"Toppings",
                "options":["cheese","olives"],"required":false,"order":3}"#;
            let field: FormField = serde_json::from_str(json).unwrap();
            assert_eq!(field.kind, FieldType::Checkbox);
            assert_eq!(field.option_list(), ["cheese", "olives"]);
            assert_eq!(field.order, 3);
        }
    }

    mod options {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parse_trims_and_drops_empty() {
            assert_eq!(
                parse_options(" red, green ,, blue ,"),
                vec!["red", "green", "blue"]
            );
        }

        #[test]
        fn test_parse_empty_input() {
            assert!(parse_options("").is_empty());
            assert!(parse_options(" , ,").is_empty());
        }
    }
}
