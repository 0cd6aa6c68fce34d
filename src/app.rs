//! Application state and core logic

use crate::builder::{BuilderError, FormBuilder};
use crate::model::{parse_options, FieldType, FormField};
use crate::render::{render_builder, render_forms_list, render_page};
use crate::state::{
    Alert, AppState, BuilderButton, BuilderFocus, PendingDelete, PendingPrompt, PromptStage, View,
};
use crate::storage::{FormStorage, KeyValueStore};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App<S> {
    /// Current application state
    pub state: AppState,
    /// Form builder owning the storage adapter
    pub builder: FormBuilder<S>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    /// Where forms are stored, for the status bar
    pub store_label: String,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new App showing the forms list
    pub fn new(store: S, store_label: impl Into<String>) -> Self {
        let mut app = Self {
            state: AppState::default(),
            builder: FormBuilder::new(FormStorage::new(store)),
            quit: false,
            status_message: None,
            store_label: store_label.into(),
        };
        app.show_forms_list();
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Queue an error alert
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_alert(Alert::error(message));
    }

    /// Queue an informational alert
    pub fn push_info(&mut self, message: impl Into<String>) {
        self.state.push_alert(Alert::info(message));
    }

    /// Re-read stored forms into the list
    pub fn refresh_forms(&mut self) {
        self.state.forms = self
            .builder
            .storage()
            .get_forms()
            .into_iter()
            .filter(|f| f.has_fields())
            .collect();
        self.state.clamp_selection();
    }

    /// Show the forms list, discarding any unsaved builder state
    pub fn show_forms_list(&mut self) {
        self.state.reset_builder();
        self.state.current_view = View::FormsList;
        self.refresh_forms();
    }

    /// Open an empty builder for a new form
    pub fn show_form_builder(&mut self) {
        self.state.reset_builder();
        self.state.current_view = View::FormBuilder;
    }

    /// The "Create Form" / "Update Form" button
    pub fn save_form(&mut self) {
        let title = self.state.form_title.trim().to_string();
        if title.is_empty() {
            self.push_error("Please enter a form title");
            return;
        }
        let description = self.state.form_description.trim().to_string();

        if self.state.is_editing {
            match self.update_current_form(&title, &description) {
                Ok(form_id) => {
                    tracing::info!("Form {form_id} updated");
                    self.push_info("Form updated successfully!");
                    self.show_forms_list();
                }
                Err(e) => {
                    tracing::error!("Error updating form: {e}");
                    self.push_error("Error updating form. Please try again.");
                }
            }
        } else if let Some(draft) = self.state.draft_form.as_mut() {
            draft.title = title.clone();
            draft.description = description.clone();
            if draft.has_fields() {
                if let Some(form) = self.builder.current_form_mut() {
                    form.title = title;
                    form.description = description;
                }
                if let Err(e) = self.builder.save_form() {
                    tracing::error!("Error saving form details: {e}");
                }
            }
            self.push_info("Form details updated.");
        } else {
            let draft = crate::model::Form::new(&title, &description);
            tracing::info!("Draft form {} created", draft.id);
            self.state.current_form_id = Some(draft.id.clone());
            self.state.draft_form = Some(draft);
            self.state.is_form_created = true;
            self.state.selected_button = BuilderButton::AddText;
            self.push_info("Form created! You can now add fields.");
        }
    }

    /// Copy the inputs onto the loaded form and persist it, returning its id
    fn update_current_form(
        &mut self,
        title: &str,
        description: &str,
    ) -> Result<String, BuilderError> {
        let form = self
            .builder
            .current_form_mut()
            .ok_or(BuilderError::NoCurrentForm)?;
        form.title = title.to_string();
        form.description = description.to_string();
        let form_id = form.id.clone();

        self.builder.save_form()?;
        Ok(form_id)
    }

    /// Start adding a field of `kind`: opens the label prompt when allowed
    pub fn request_add_field(&mut self, kind: FieldType) {
        if !self.state.fields_enabled() {
            self.push_error("Please create a form first by entering title and description");
            return;
        }
        self.state.pending_prompt = Some(PendingPrompt::label(kind));
    }

    /// Append a field to the form being built and persist it
    pub fn add_field(&mut self, kind: FieldType, label: &str, options: Option<Vec<String>>) {
        if !self.state.fields_enabled() {
            self.push_error("Please create a form first by entering title and description");
            return;
        }

        let result = if self.state.is_editing {
            self.builder
                .add_field(kind, label, options)
                .and_then(|field| self.builder.save_form().map(|()| field))
        } else {
            self.add_draft_field(kind, label, options)
        };

        match result {
            Ok(field) => {
                tracing::info!("Added {} field {:?}", field.kind, field.label);
                self.state.builder_fields.push(field);
            }
            Err(e) => {
                tracing::error!("Error adding field: {e}");
                self.push_error("Error adding field. Please try again.");
            }
        }
    }

    /// Add to the local draft; the first field commits the draft to the builder
    fn add_draft_field(
        &mut self,
        kind: FieldType,
        label: &str,
        options: Option<Vec<String>>,
    ) -> Result<FormField, BuilderError> {
        let Some(draft) = self.state.draft_form.as_mut() else {
            return Err(BuilderError::NoCurrentForm);
        };

        let field = FormField::new(kind, label, options, draft.fields.len());
        draft.fields.push(field.clone());

        if draft.fields.len() == 1 {
            let committed = self.builder.create_form(&draft.title, &draft.description);
            tracing::info!("Form {} committed with its first field", committed.id);
            draft.id = committed.id;
            draft.created_at = committed.created_at;
            self.state.current_form_id = Some(draft.id.clone());
        }

        let form = self
            .builder
            .current_form_mut()
            .ok_or(BuilderError::NoCurrentForm)?;
        form.fields = draft.fields.clone();
        self.builder.save_form()?;
        Ok(field)
    }

    /// Load a stored form into the builder for editing
    pub fn edit_form(&mut self, form_id: &str) {
        let Some(form) = self
            .builder
            .storage()
            .get_forms()
            .into_iter()
            .find(|f| f.id == form_id)
        else {
            tracing::debug!("Edit requested for unknown form {form_id}");
            return;
        };

        self.state.reset_builder();
        self.state.is_editing = true;
        self.state.is_form_created = true;
        self.state.current_form_id = Some(form.id.clone());
        self.builder.set_current_form(&form.id);

        self.state.form_title = form.title;
        self.state.form_description = form.description;
        self.state.builder_fields = form.fields;
        self.state.current_view = View::FormBuilder;
    }

    /// Ask for confirmation before deleting a form
    pub fn request_delete(&mut self, form_id: &str) {
        let title = self
            .state
            .forms
            .iter()
            .find(|f| f.id == form_id)
            .map(|f| f.title.clone())
            .unwrap_or_default();
        self.state.pending_delete = Some(PendingDelete::new(form_id.to_string(), title));
    }

    /// Remove a form from storage and re-render the list
    pub fn delete_form(&mut self, form_id: &str) {
        self.builder.storage_mut().delete_form(form_id);
        tracing::info!("Form {form_id} deleted");
        self.show_forms_list();
    }

    /// HTML for whatever the current view shows
    pub fn current_view_html(&self) -> String {
        match self.state.current_view {
            View::FormsList => render_forms_list(&self.builder.storage().get_forms()),
            View::FormBuilder => render_builder(&self.state.builder_view()),
        }
    }

    fn copy_view_html(&mut self) {
        let html = render_page("Forms", &self.current_view_html());
        match copy_to_clipboard(&html) {
            Ok(()) => self.status_message = Some(format!("Copied {} bytes of HTML", html.len())),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e}");
                self.status_message = Some("Copy failed".to_string());
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Alerts are modal and dismissed first
        if self.state.has_alerts() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return Ok(());
        }

        if self.state.pending_prompt.is_some() {
            self.handle_prompt_key(key);
            return Ok(());
        }

        if self.state.pending_delete.is_some() {
            self.handle_confirm_key(key);
            return Ok(());
        }

        self.status_message = None;

        match self.state.current_view {
            View::FormsList => self.handle_list_key(key),
            View::FormBuilder => self.handle_builder_key(key),
        }
        Ok(())
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('c') | KeyCode::Char('n') => self.show_form_builder(),
            KeyCode::Char('v') | KeyCode::Char('r') => self.show_forms_list(),
            KeyCode::Char('y') => self.copy_view_html(),
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(id) = self.state.selected_form().map(|f| f.id.clone()) {
                    self.edit_form(&id);
                }
            }
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(id) = self.state.selected_form().map(|f| f.id.clone()) {
                    self.request_delete(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_builder_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::COPY_MODIFIER);

        if ctrl {
            match key.code {
                KeyCode::Char('s') | KeyCode::Char('w') => self.save_form(),
                KeyCode::Char('t') => self.request_add_field(FieldType::Text),
                KeyCode::Char('r') => self.request_add_field(FieldType::Radio),
                KeyCode::Char('b') => self.request_add_field(FieldType::Checkbox),
                KeyCode::Char('y') => self.copy_view_html(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.show_forms_list(),
            KeyCode::Tab => self.state.builder_focus = self.state.builder_focus.next(),
            KeyCode::BackTab => self.state.builder_focus = self.state.builder_focus.prev(),
            KeyCode::PageDown => self.state.scroll_down(),
            KeyCode::PageUp => self.state.scroll_up(),
            _ => match self.state.builder_focus {
                BuilderFocus::Buttons => self.handle_button_row_key(key),
                BuilderFocus::Title | BuilderFocus::Description => self.handle_input_key(key),
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if is_plain_char(key.modifiers) => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Enter => match self.state.builder_focus {
                BuilderFocus::Description => self.state.form_description.push('\n'),
                _ => self.state.builder_focus = self.state.builder_focus.next(),
            },
            _ => {}
        }
    }

    fn handle_button_row_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.state.selected_button = self.state.selected_button.prev()
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.state.selected_button = self.state.selected_button.next()
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.selected_button.field_type() {
                Some(kind) => self.request_add_field(kind),
                None => self.save_form(),
            },
            KeyCode::Char('y') => self.copy_view_html(),
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.state.pending_prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.state.pending_prompt = None,
            KeyCode::Enter => self.submit_prompt(),
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c) if is_plain_char(key.modifiers) => prompt.input.push(c),
            _ => {}
        }
    }

    /// Accept the prompt's answer and move to the next stage or add the field
    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.state.pending_prompt.take() else {
            return;
        };

        match prompt.stage {
            PromptStage::Label => {
                let label = prompt.input.trim().to_string();
                if label.is_empty() {
                    self.push_error("Please enter a field label");
                } else if prompt.field_type.is_choice() {
                    self.state.pending_prompt =
                        Some(PendingPrompt::options(prompt.field_type, label));
                } else {
                    self.add_field(prompt.field_type, &label, None);
                }
            }
            PromptStage::Options { label } => {
                let options = parse_options(&prompt.input);
                self.add_field(prompt.field_type, &label, Some(options));
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        let Some(pending) = self.state.pending_delete.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char('j')
            | KeyCode::Char('k') => pending.toggle(),
            KeyCode::Char('y') => self.confirm_delete(),
            KeyCode::Enter => {
                if pending.selected_option {
                    self.confirm_delete();
                } else {
                    self.state.pending_delete = None;
                }
            }
            KeyCode::Esc | KeyCode::Char('n') => self.state.pending_delete = None,
            _ => {}
        }
    }

    /// Carry out the pending delete
    pub fn confirm_delete(&mut self) {
        if let Some(pending) = self.state.pending_delete.take() {
            self.delete_form(&pending.form_id);
        }
    }
}

/// Characters typed with a command modifier held are shortcuts, not text
fn is_plain_char(modifiers: KeyModifiers) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
