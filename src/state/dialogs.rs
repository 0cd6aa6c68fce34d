//! Modal dialog state: alerts, input prompts and delete confirmation

use crate::model::FieldType;

/// Severity of a queued alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

/// A blocking message the user has to dismiss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Which answer a field prompt is collecting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStage {
    Label,
    /// Choice fields ask for options once the label is known
    Options { label: String },
}

/// Text prompt for a new field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPrompt {
    pub field_type: FieldType,
    pub stage: PromptStage,
    pub input: String,
}

impl PendingPrompt {
    pub fn label(field_type: FieldType) -> Self {
        Self {
            field_type,
            stage: PromptStage::Label,
            input: String::new(),
        }
    }

    pub fn options(field_type: FieldType, label: String) -> Self {
        Self {
            field_type,
            stage: PromptStage::Options { label },
            input: String::new(),
        }
    }

    pub fn title(&self) -> String {
        format!("Add {} Field", self.field_type.label())
    }

    pub fn message(&self) -> &'static str {
        match self.stage {
            PromptStage::Label => "Enter field label:",
            PromptStage::Options { .. } => "Enter options (comma-separated):",
        }
    }
}

/// Delete awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub form_id: String,
    pub form_title: String,
    /// `true` when "Delete" is highlighted, `false` for "Cancel"
    pub selected_option: bool,
}

impl PendingDelete {
    pub fn new(form_id: String, form_title: String) -> Self {
        Self {
            form_id,
            form_title,
            selected_option: false,
        }
    }

    pub fn toggle(&mut self) {
        self.selected_option = !self.selected_option;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_messages_follow_stage() {
        let prompt = PendingPrompt::label(FieldType::Radio);
        assert_eq!(prompt.title(), "Add Radio Field");
        assert_eq!(prompt.message(), "Enter field label:");

        let prompt = PendingPrompt::options(FieldType::Radio, "Size".to_string());
        assert_eq!(prompt.message(), "Enter options (comma-separated):");
    }

    #[test]
    fn test_delete_defaults_to_cancel() {
        let mut pending = PendingDelete::new("id".into(), "Survey".into());
        assert!(!pending.selected_option);
        pending.toggle();
        assert!(pending.selected_option);
    }
}
