//! Modify inventory dialog
//!
//! Adds grams to or subtracts grams from the first spool matching a
//! material type and color.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::cli::spool::MODIFY_NOT_FOUND;
use crate::models::{Adjustment, SpoolRecord};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{edit_input, parse_grams, render_error, render_form_hints, render_frame, required};

/// Which field is currently focused in the modify form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjustField {
    #[default]
    MaterialType,
    Color,
    Direction,
    Grams,
}

impl AdjustField {
    pub fn next(self) -> Self {
        match self {
            Self::MaterialType => Self::Color,
            Self::Color => Self::Direction,
            Self::Direction => Self::Grams,
            Self::Grams => Self::MaterialType,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::MaterialType => Self::Grams,
            Self::Color => Self::MaterialType,
            Self::Direction => Self::Color,
            Self::Grams => Self::Direction,
        }
    }
}

/// State for the modify dialog
#[derive(Debug, Clone)]
pub struct AdjustFormState {
    pub focused_field: AdjustField,
    pub type_input: TextInput,
    pub color_input: TextInput,
    /// `true` to add grams, `false` to subtract
    pub is_addition: bool,
    pub grams_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for AdjustFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjustFormState {
    /// Create an empty form that subtracts by default
    pub fn new() -> Self {
        Self {
            focused_field: AdjustField::MaterialType,
            type_input: TextInput::new().label("Type").placeholder("PLA"),
            color_input: TextInput::new().label("Color").placeholder("WHITE"),
            is_addition: false,
            grams_input: TextInput::new().label("Grams").placeholder("100"),
            error_message: None,
        }
    }

    /// Create a form keyed on an existing record, focused on the amount
    pub fn from_record(record: &SpoolRecord) -> Self {
        let mut form = Self::new();
        form.type_input.set_value(&record.material_type);
        form.color_input.set_value(&record.color);
        form.focused_field = AdjustField::Grams;
        form
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn toggle_direction(&mut self) {
        self.is_addition = !self.is_addition;
    }

    /// Get the currently focused text input (if applicable)
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            AdjustField::MaterialType => Some(&mut self.type_input),
            AdjustField::Color => Some(&mut self.color_input),
            AdjustField::Grams => Some(&mut self.grams_input),
            AdjustField::Direction => None,
        }
    }

    /// Validate the form, returning type, color, and the adjustment
    pub fn validate(&self) -> Result<(String, String, Adjustment), String> {
        let material_type = required("Type", self.type_input.value())?;
        let color = required("Color", self.color_input.value())?;
        let grams = parse_grams("Grams", self.grams_input.value())?;
        Ok((material_type, color, Adjustment::new(grams, self.is_addition)))
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the modify dialog
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let form = &app.adjust_form;
    let area = centered_rect_fixed(50, 11, frame.area());
    let inner = render_frame(frame, theme, area, "Modify Current Inventory");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Type
            Constraint::Length(1), // Color
            Constraint::Length(1), // Add/Subtract
            Constraint::Length(1), // Grams
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        form.type_input
            .view(theme, form.focused_field == AdjustField::MaterialType),
        chunks[0],
    );
    frame.render_widget(
        form.color_input
            .view(theme, form.focused_field == AdjustField::Color),
        chunks[1],
    );

    let direction_focused = form.focused_field == AdjustField::Direction;
    let label_style = if direction_focused {
        theme.title()
    } else {
        Style::default().fg(theme.warning)
    };
    let (add_mark, subtract_mark) = if form.is_addition {
        ("(•)", "( )")
    } else {
        ("( )", "(•)")
    };
    let mut direction = vec![
        Span::styled("Action: ", label_style),
        Span::styled(
            format!("{} Add  {} Subtract", add_mark, subtract_mark),
            Style::default().fg(theme.foreground),
        ),
    ];
    if direction_focused {
        direction.push(Span::styled(
            "  (Space to toggle)",
            Style::default().fg(theme.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(direction)), chunks[2]);

    frame.render_widget(
        form.grams_input
            .view(theme, form.focused_field == AdjustField::Grams),
        chunks[3],
    );

    render_error(frame, theme, chunks[5], form.error_message.as_deref());
    render_form_hints(frame, theme, chunks[6]);
}

/// Handle key input for the modify dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.adjust_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => {
            if let Err(e) = save_adjustment(app) {
                app.adjust_form.set_error(e);
            }
        }
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            if form.focused_field == AdjustField::Direction =>
        {
            form.toggle_direction();
        }
        KeyCode::Char('+') if form.focused_field == AdjustField::Direction => {
            form.is_addition = true;
        }
        KeyCode::Char('-') if form.focused_field == AdjustField::Direction => {
            form.is_addition = false;
        }
        code => {
            form.error_message = None;
            return match form.focused_input() {
                Some(input) => edit_input(input, code),
                None => false,
            };
        }
    }

    true
}

/// Apply the adjustment described by the form
fn save_adjustment(app: &mut App) -> Result<(), String> {
    let (material_type, color, adjustment) = app.adjust_form.validate()?;

    let updated = app
        .service()
        .adjust(&material_type, &color, adjustment)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.refresh();
    match updated {
        Some(updated) => app.set_status(format!(
            "Data successfully modified. {} {} now has {} g",
            updated.after.color, updated.after.material_type, updated.after.quantity_grams
        )),
        None => app.set_status(MODIFY_NOT_FOUND),
    }
    Ok(())
}
