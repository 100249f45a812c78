//! Confirmation dialog
//!
//! Y/N confirmation shown before a spool is removed.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::cli::spool::REMOVE_NOT_FOUND;
use crate::models::SpoolRecord;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Theme;

use super::render_frame;

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, theme: &Theme, message: &str) {
    let area = centered_rect_fixed(54, 8, frame.area());
    let inner = render_frame(frame, theme, area, "Confirm");

    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(theme.foreground))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(theme.success)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(theme.error)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(theme.warning)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .style(theme.base())
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner);
}

/// Handle Y/N for a pending removal
pub fn handle_remove_key(app: &mut App, record: SpoolRecord, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.close_dialog();
            let removed = app.service().remove(&record.material_type, &record.color);
            app.refresh();
            match removed {
                Ok(Some(_)) => app.set_status("Data successfully removed."),
                Ok(None) => app.set_status(REMOVE_NOT_FOUND),
                Err(e) => app.set_status(format!("Error: {}", e)),
            }
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
            app.set_status("Data not removed.");
            true
        }
        _ => false,
    }
}
