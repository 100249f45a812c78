//! Status bar view
//!
//! Shows inventory totals, the warning level, the last status message, and
//! key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let summary = app.summary();

    let mut spans = vec![
        Span::styled(" Spools: ", Style::default().fg(theme.foreground)),
        Span::styled(
            summary.spool_count.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Total: ", Style::default().fg(theme.foreground)),
        Span::styled(
            format!("{} g", summary.total_grams),
            Style::default().fg(theme.accent),
        ),
        Span::raw(" │ "),
        Span::styled("Warn: ", Style::default().fg(theme.foreground)),
        Span::styled(
            format!("{} g", summary.warning_level),
            Style::default().fg(theme.warning),
        ),
    ];

    if summary.low_stock_count > 0 {
        spans.push(Span::styled(
            format!(" ({} low)", summary.low_stock_count),
            Style::default().fg(theme.warning),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(theme.success),
        ));
    }

    let hints = " q:Quit  ?:Help ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.base()), area);
}
