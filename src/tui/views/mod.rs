//! TUI Views module
//!
//! Contains the home screen, the inventory list, and the status bar.

pub mod home;
pub mod inventory;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row},
    Frame,
};

use crate::display::format_removal_question;
use crate::models::SpoolRecord;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;
use super::theme::Theme;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    frame.render_widget(Block::default().style(app.theme.base()), frame.area());

    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.active_view {
        ActiveView::Home => home::render(frame, app, layout.main),
        ActiveView::Inventory => inventory::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.active_view {
        ActiveView::Home => "Filament Inventory",
        ActiveView::Inventory => "Filament Inventory: Current Inventory",
    };

    let header = Paragraph::new(Line::from(Span::styled(title, app.theme.title())))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(app.theme.foreground)),
        );

    frame.render_widget(header, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::AddSpool => dialogs::spool::render(frame, app),
        ActiveDialog::AdjustSpool => dialogs::adjust::render(frame, app),
        ActiveDialog::RemoveSpool => dialogs::remove::render(frame, app),
        ActiveDialog::ConfirmRemove(record) => {
            dialogs::confirm::render(frame, &app.theme, &format_removal_question(record));
        }
        ActiveDialog::WarningLevel => dialogs::warning_level::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Header row shared by the inventory and low-stock tables
pub(crate) fn spool_header(theme: &Theme) -> Row<'static> {
    Row::new(vec![
        Cell::from("Type"),
        Cell::from("Color"),
        Cell::from("Remaining (g)"),
    ])
    .style(theme.title())
}

/// One table row for a record
pub(crate) fn spool_row(record: &SpoolRecord) -> Row<'static> {
    Row::new(vec![
        Cell::from(record.material_type.clone()),
        Cell::from(record.color.clone()),
        Cell::from(Line::from(record.quantity_grams.to_string()).alignment(Alignment::Right)),
    ])
}
