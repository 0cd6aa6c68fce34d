//! Application state definitions

use super::dialogs::{Alert, PendingDelete, PendingPrompt};
use crate::model::{FieldType, Form, FormField};
use crate::render::BuilderView;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    FormsList,
    FormBuilder,
}

/// What the user is doing, derived from the view and builder flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    List,
    Create,
    Edit,
}

/// Focus within the builder view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderFocus {
    #[default]
    Title,
    Description,
    Buttons,
}

impl BuilderFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Buttons,
            Self::Buttons => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Buttons,
            Self::Description => Self::Title,
            Self::Buttons => Self::Description,
        }
    }
}

/// Buttons in the builder's button row, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderButton {
    AddText,
    AddRadio,
    AddCheckbox,
    #[default]
    Save,
}

impl BuilderButton {
    pub const ALL: [BuilderButton; 4] = [
        Self::AddText,
        Self::AddRadio,
        Self::AddCheckbox,
        Self::Save,
    ];

    pub fn next(self) -> Self {
        match self {
            Self::AddText => Self::AddRadio,
            Self::AddRadio => Self::AddCheckbox,
            Self::AddCheckbox => Self::Save,
            Self::Save => Self::AddText,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::AddText => Self::Save,
            Self::AddRadio => Self::AddText,
            Self::AddCheckbox => Self::AddRadio,
            Self::Save => Self::AddCheckbox,
        }
    }

    /// Field kind added by this button, `None` for the save button
    pub fn field_type(self) -> Option<FieldType> {
        match self {
            Self::AddText => Some(FieldType::Text),
            Self::AddRadio => Some(FieldType::Radio),
            Self::AddCheckbox => Some(FieldType::Checkbox),
            Self::Save => None,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Forms list (only forms that have fields)
    pub forms: Vec<Form>,
    pub selected_index: usize,

    // Builder flags
    pub is_editing: bool,
    pub is_form_created: bool,
    pub current_form_id: Option<String>,
    /// New form held locally until its first field is added
    pub draft_form: Option<Form>,

    // Builder inputs
    pub form_title: String,
    pub form_description: String,
    pub builder_fields: Vec<FormField>,
    pub builder_focus: BuilderFocus,
    pub selected_button: BuilderButton,
    pub scroll_offset: usize,

    // Modals
    pub alerts: VecDeque<Alert>,
    pub pending_prompt: Option<PendingPrompt>,
    pub pending_delete: Option<PendingDelete>,
}

impl AppState {
    pub fn mode(&self) -> UiMode {
        match self.current_view {
            View::FormsList => UiMode::List,
            View::FormBuilder if self.is_editing => UiMode::Edit,
            View::FormBuilder => UiMode::Create,
        }
    }

    /// Add-field buttons accept input once a draft exists or a form is loaded
    pub fn fields_enabled(&self) -> bool {
        self.is_form_created || self.is_editing
    }

    /// Drop all transient builder state
    pub fn reset_builder(&mut self) {
        self.is_editing = false;
        self.is_form_created = false;
        self.current_form_id = None;
        self.draft_form = None;
        self.form_title.clear();
        self.form_description.clear();
        self.builder_fields.clear();
        self.builder_focus = BuilderFocus::default();
        self.selected_button = BuilderButton::default();
        self.scroll_offset = 0;
        self.pending_prompt = None;
    }

    pub fn builder_view(&self) -> BuilderView<'_> {
        BuilderView {
            is_editing: self.is_editing,
            title: &self.form_title,
            description: &self.form_description,
            fields: &self.builder_fields,
            fields_enabled: self.fields_enabled(),
            is_form_created: self.is_form_created,
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if !self.forms.is_empty() && self.selected_index < self.forms.len() - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Keep the selection inside the list after it changed size
    pub fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.forms.len().saturating_sub(1));
    }

    pub fn selected_form(&self) -> Option<&Form> {
        self.forms.get(self.selected_index)
    }

    /// Rows taken by the field previews: a header, the inputs and a blank line
    /// per field
    pub fn preview_line_count(&self) -> usize {
        self.builder_fields
            .iter()
            .map(|field| {
                let inputs = match field.kind {
                    FieldType::Text => 1,
                    FieldType::Radio | FieldType::Checkbox => field.option_list().len().max(1),
                };
                inputs + 2
            })
            .sum()
    }

    /// Scroll the builder's field previews, stopping at the last line
    pub fn scroll_down(&mut self) {
        let max = self.preview_line_count().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn push_alert(&mut self, alert: Alert) {
        self.alerts.push_back(alert);
    }

    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    /// Handle character input in the focused builder input
    pub fn form_input_char(&mut self, c: char) {
        match self.builder_focus {
            BuilderFocus::Title => self.form_title.push(c),
            BuilderFocus::Description => self.form_description.push(c),
            BuilderFocus::Buttons => {}
        }
    }

    /// Handle backspace in the focused builder input
    pub fn form_backspace(&mut self) {
        match self.builder_focus {
            BuilderFocus::Title => {
                self.form_title.pop();
            }
            BuilderFocus::Description => {
                self.form_description.pop();
            }
            BuilderFocus::Buttons => {}
        }
    }
}
