//! Dialog modules for the TUI
//!
//! Contains modal dialogs for each inventory operation, plus the shared
//! pieces their forms are built from.

pub mod adjust;
pub mod confirm;
pub mod help;
pub mod remove;
pub mod spool;
pub mod warning_level;

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::Theme;
use super::widgets::TextInput;

/// Apply an editing key to a text input
///
/// Returns `true` if the key was consumed.
pub fn edit_input(input: &mut TextInput, key: KeyCode) -> bool {
    match key {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => input.insert(c),
        _ => return false,
    }
    true
}

/// Clear `area` and draw a titled dialog border, returning the inner area
pub fn render_frame(frame: &mut Frame, theme: &Theme, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(theme.base());

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    frame.render_widget(block, area);
    inner
}

/// Render a form error line, if any
pub fn render_error(frame: &mut Frame, theme: &Theme, area: Rect, error: Option<&str>) {
    if let Some(error) = error {
        let line = Line::from(Span::styled(error, Style::default().fg(theme.error)));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Render the standard `[Tab] Next  [Enter] Save  [Esc] Cancel` hint line
pub fn render_form_hints(frame: &mut Frame, theme: &Theme, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("[Tab]", theme.key()),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(theme.success)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(theme.error)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints).style(theme.base()), area);
}

/// Parse a gram amount typed into a form
pub fn parse_grams(label: &str, value: &str) -> Result<i64, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{} is required", label));
    }

    let grams: i64 = value
        .parse()
        .map_err(|_| format!("{} must be a whole number of grams", label))?;

    if grams < 0 {
        return Err(format!("{} cannot be negative", label));
    }

    Ok(grams)
}

/// Check that a key field was filled in
pub fn required(label: &str, value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(value.to_string())
    }
}
