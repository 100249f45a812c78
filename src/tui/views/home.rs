//! Home screen
//!
//! The main menu next to the low inventory notifications.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Table},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::HomeLayout;

use super::{spool_header, spool_row};

/// Menu entries as `(key, description)`
pub const MENU_ITEMS: &[(&str, &str)] = &[
    ("a", "Check current inventory"),
    ("b", "Add new inventory"),
    ("c", "Modify current inventory"),
    ("d", "Remove from inventory"),
    ("e", "Set warning level"),
    ("f", "Exit"),
];

/// Render the home screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = HomeLayout::new(area);
    render_menu(frame, app, layout.menu);
    render_low_stock(frame, app, layout.low_stock);
}

fn render_menu(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut lines = vec![Line::from("")];
    lines.extend(MENU_ITEMS.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(format!("  {}", key), theme.key()),
            Span::raw(": "),
            Span::styled(*description, Style::default().fg(theme.foreground)),
        ])
    }));

    let menu = Paragraph::new(lines).block(
        Block::default()
            .title(" Menu ")
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.foreground)),
    );

    frame.render_widget(menu, area);
}

fn render_low_stock(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(format!(
            " Low inventory notifications (≤ {} g) ",
            app.warning_level
        ))
        .title_style(Style::default().fg(theme.warning))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.foreground));

    let low_stock = app.low_stock();
    if low_stock.is_empty() {
        let text = Paragraph::new("Nothing is running low.")
            .style(Style::default().fg(theme.muted))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let rows: Vec<_> = low_stock
        .into_iter()
        .map(|record| spool_row(record).style(Style::default().fg(theme.warning)))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
        ],
    )
    .header(spool_header(theme))
    .block(block);

    frame.render_widget(table, area);
}
