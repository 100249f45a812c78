//! Inventory view
//!
//! Lists every spool in file order with a movable selection.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Table, TableState},
    Frame,
};

use crate::tui::app::App;

use super::{spool_header, spool_row};

/// Render the inventory list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(format!(" Current Inventory ({} spools) ", app.records.len()))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.foreground));

    if app.records.is_empty() {
        let text = Paragraph::new("No filament in inventory. Press b to add a spool.")
            .style(Style::default().fg(theme.muted))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let rows: Vec<_> = app
        .records
        .iter()
        .map(|record| {
            let row = spool_row(record);
            if record.is_low_stock(app.warning_level) {
                row.style(Style::default().fg(theme.warning))
            } else {
                row
            }
        })
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
    .block(block)
    .highlight_style(theme.selected())
    .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
