//! Help dialog
//!
//! Shows the keyboard shortcuts for the current view

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;
use crate::tui::theme::Theme;

use super::render_frame;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    let inner = render_frame(frame, &app.theme, area, "Help");

    let paragraph = Paragraph::new(help_lines(&app.theme, app.active_view))
        .style(app.theme.base())
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner);
}

fn help_lines(theme: &Theme, view: ActiveView) -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let mut lines = vec![
        heading("Main Menu"),
        Line::from(""),
        key_line(theme, "a", "Check current inventory"),
        key_line(theme, "b", "Add new inventory"),
        key_line(theme, "c", "Modify current inventory"),
        key_line(theme, "d", "Remove from inventory"),
        key_line(theme, "e", "Set warning level"),
        key_line(theme, "f/q", "Exit"),
        key_line(theme, "?", "Show this help"),
        Line::from(""),
    ];

    if view == ActiveView::Inventory {
        lines.push(heading("Inventory"));
        lines.push(Line::from(""));
        lines.push(key_line(theme, "j/k", "Move selection down/up"));
        lines.push(key_line(theme, "c/d", "Modify/remove the selected spool"));
        lines.push(key_line(theme, "Esc/h", "Back to the main menu"));
        lines.push(Line::from(""));
    }

    lines.push(heading("Dialogs"));
    lines.push(Line::from(""));
    lines.push(key_line(theme, "Tab", "Next field"));
    lines.push(key_line(theme, "Space", "Toggle add/subtract"));
    lines.push(key_line(theme, "Enter", "Save"));
    lines.push(key_line(theme, "Esc", "Cancel"));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.muted),
    )));

    lines
}

/// Create a formatted key line
fn key_line(theme: &Theme, key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>8}", key), theme.key()),
        Span::raw("  "),
        Span::styled(
            description.to_string(),
            Style::default().fg(theme.foreground),
        ),
    ])
}
