//! Submitted answers to a form.
//!
//! Declared for the storage format only; nothing collects responses yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Answer to one field: a single value (text, radio) or several (checkbox)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Single(String),
    Multiple(Vec<String>),
}

/// A set of answers keyed by field id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub id: String,
    pub form_id: String,
    pub responses: HashMap<String, ResponseValue>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_mixed_answers() {
        let json = r#"{
            "id": "r1",
            "formId": "f1",
            "responses": {"name": "Ada", "toppings": ["cheese", "olives"]},
            "submittedAt": 1700000000000
        }"#;
        let response: FormResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.form_id, "f1");
        assert_eq!(
            response.responses["name"],
            ResponseValue::Single("Ada".to_string())
        );
        assert_eq!(
            response.responses["toppings"],
            ResponseValue::Multiple(vec!["cheese".to_string(), "olives".to_string()])
        );
    }
}
