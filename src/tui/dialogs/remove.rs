//! Remove inventory dialog
//!
//! Asks for the material type and color, then hands off to a Y/N
//! confirmation before anything is deleted.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::cli::spool::REMOVE_NOT_FOUND;
use crate::models::SpoolRecord;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{edit_input, render_error, render_form_hints, render_frame, required};

/// Which field is currently focused in the remove form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemoveField {
    #[default]
    MaterialType,
    Color,
}

impl RemoveField {
    pub fn toggle(self) -> Self {
        match self {
            Self::MaterialType => Self::Color,
            Self::Color => Self::MaterialType,
        }
    }
}

/// State for the remove dialog
#[derive(Debug, Clone)]
pub struct RemoveFormState {
    pub focused_field: RemoveField,
    pub type_input: TextInput,
    pub color_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for RemoveFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoveFormState {
    pub fn new() -> Self {
        Self {
            focused_field: RemoveField::MaterialType,
            type_input: TextInput::new().label("Type").placeholder("PLA"),
            color_input: TextInput::new().label("Color").placeholder("WHITE"),
            error_message: None,
        }
    }

    /// Create a form keyed on an existing record
    pub fn from_record(record: &SpoolRecord) -> Self {
        let mut form = Self::new();
        form.type_input.set_value(&record.material_type);
        form.color_input.set_value(&record.color);
        form
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.toggle();
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            RemoveField::MaterialType => &mut self.type_input,
            RemoveField::Color => &mut self.color_input,
        }
    }

    /// Validate the form, returning type and color
    pub fn validate(&self) -> Result<(String, String), String> {
        let material_type = required("Type", self.type_input.value())?;
        let color = required("Color", self.color_input.value())?;
        Ok((material_type, color))
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the remove dialog
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let form = &app.remove_form;
    let area = centered_rect_fixed(50, 9, frame.area());
    let inner = render_frame(frame, theme, area, "Remove From Inventory");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Type
            Constraint::Length(1), // Color
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        form.type_input
            .view(theme, form.focused_field == RemoveField::MaterialType),
        chunks[0],
    );
    frame.render_widget(
        form.color_input
            .view(theme, form.focused_field == RemoveField::Color),
        chunks[1],
    );

    render_error(frame, theme, chunks[3], form.error_message.as_deref());
    render_form_hints(frame, theme, chunks[4]);
}

/// Handle key input for the remove dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.remove_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.next_field(),
        KeyCode::Enter => {
            if let Err(e) = request_confirmation(app) {
                app.remove_form.set_error(e);
            }
        }
        code if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.error_message = None;
            return edit_input(form.focused_input(), code);
        }
        _ => return false,
    }

    true
}

/// Look up the spool and, if it exists, ask for confirmation
fn request_confirmation(app: &mut App) -> Result<(), String> {
    let (material_type, color) = app.remove_form.validate()?;

    let found = app
        .service()
        .find(&material_type, &color)
        .map_err(|e| e.to_string())?;

    match found {
        Some(record) => app.open_dialog(ActiveDialog::ConfirmRemove(record)),
        None => {
            app.close_dialog();
            app.set_status(REMOVE_NOT_FOUND);
        }
    }
    Ok(())
}
