//! Warning level dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{edit_input, parse_grams, render_error, render_frame};

/// State for the warning level dialog
#[derive(Debug, Clone)]
pub struct WarningFormState {
    pub input: TextInput,
    pub error_message: Option<String>,
}

impl Default for WarningFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl WarningFormState {
    pub fn new() -> Self {
        Self {
            input: TextInput::new().label("Grams").placeholder("250"),
            error_message: None,
        }
    }

    /// Form prefilled with the current level
    pub fn with_level(level: i64) -> Self {
        let mut form = Self::new();
        form.input.set_value(level.to_string());
        form
    }

    pub fn validate(&self) -> Result<i64, String> {
        parse_grams("Warning level", self.input.value())
    }
}

/// Render the warning level dialog
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let form = &app.warning_form;
    let area = centered_rect_fixed(50, 9, frame.area());
    let inner = render_frame(frame, theme, area, "Set Warning Level");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Spools at or below this weight are flagged.")
            .style(Style::default().fg(theme.muted)),
        chunks[0],
    );
    frame.render_widget(form.input.view(theme, true), chunks[1]);
    render_error(frame, theme, chunks[3], form.error_message.as_deref());

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(theme.success)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(theme.error)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

/// Handle key input for the warning level dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            if let Err(e) = save_warning_level(app) {
                app.warning_form.error_message = Some(e);
            }
        }
        code => {
            app.warning_form.error_message = None;
            return edit_input(&mut app.warning_form.input, code);
        }
    }

    true
}

fn save_warning_level(app: &mut App) -> Result<(), String> {
    let level = app.warning_form.validate()?;

    app.service()
        .set_warning_level(level)
        .map_err(|e| e.to_string())?;

    app.close_dialog();
    app.refresh();
    app.set_status(format!(
        "The warning level has been changed to {} grams.",
        level
    ));
    Ok(())
}
