//! Form records

use super::field::FormField;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A named collection of ordered fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Form {
    /// Create an empty form with a fresh id.
    ///
    /// The timestamp is truncated to milliseconds, the precision it is stored at.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            fields: Vec::new(),
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// Forms shown in the list view: only those with at least one field
pub fn listed_forms(forms: &[Form]) -> Vec<&Form> {
    forms.iter().filter(|f| f.has_fields()).collect()
}
