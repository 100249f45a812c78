//! Add spool dialog
//!
//! Modal form for adding a new spool: material type, color, and grams.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{edit_input, parse_grams, render_error, render_form_hints, render_frame, required};

/// Which field is currently focused in the spool form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpoolField {
    #[default]
    MaterialType,
    Color,
    Grams,
}

impl SpoolField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::MaterialType => Self::Color,
            Self::Color => Self::Grams,
            Self::Grams => Self::MaterialType,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::MaterialType => Self::Grams,
            Self::Color => Self::MaterialType,
            Self::Grams => Self::Color,
        }
    }
}

/// State for the add spool dialog
#[derive(Debug, Clone)]
pub struct SpoolFormState {
    pub focused_field: SpoolField,
    pub type_input: TextInput,
    pub color_input: TextInput,
    pub grams_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for SpoolFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl SpoolFormState {
    /// Create an empty form
    pub fn new() -> Self {
        Self {
            focused_field: SpoolField::MaterialType,
            type_input: TextInput::new().label("Type").placeholder("PLA"),
            color_input: TextInput::new().label("Color").placeholder("WHITE"),
            grams_input: TextInput::new().label("Grams").placeholder("1000"),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Get the currently focused text input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            SpoolField::MaterialType => &mut self.type_input,
            SpoolField::Color => &mut self.color_input,
            SpoolField::Grams => &mut self.grams_input,
        }
    }

    /// Validate the form, returning type, color, and grams
    pub fn validate(&self) -> Result<(String, String, i64), String> {
        let material_type = required("Type", self.type_input.value())?;
        let color = required("Color", self.color_input.value())?;
        let grams = parse_grams("Grams", self.grams_input.value())?;
        Ok((material_type, color, grams))
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add spool dialog
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let form = &app.spool_form;
    let area = centered_rect_fixed(50, 10, frame.area());
    let inner = render_frame(frame, theme, area, "Add New Inventory");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Type
            Constraint::Length(1), // Color
            Constraint::Length(1), // Grams
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        form.type_input
            .view(theme, form.focused_field == SpoolField::MaterialType),
        chunks[0],
    );
    frame.render_widget(
        form.color_input
            .view(theme, form.focused_field == SpoolField::Color),
        chunks[1],
    );
    frame.render_widget(
        form.grams_input
            .view(theme, form.focused_field == SpoolField::Grams),
        chunks[2],
    );

    render_error(frame, theme, chunks[4], form.error_message.as_deref());
    render_form_hints(frame, theme, chunks[5]);
}

/// Handle key input for the add spool dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.spool_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => {
            if let Err(e) = save_spool(app) {
                app.spool_form.set_error(e);
            }
        }
        code => {
            form.error_message = None;
            return edit_input(form.focused_input(), code);
        }
    }

    true
}

/// Append the spool described by the form
fn save_spool(app: &mut App) -> Result<(), String> {
    let (material_type, color, grams) = app.spool_form.validate()?;

    let record = app
        .service()
        .add(&material_type, &color, grams)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.refresh();
    app.set_status(format!("Data successfully added: {}", record));
    Ok(())
}
