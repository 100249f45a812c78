//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    handle_menu_key(app, key);
    Ok(())
}

/// Handle keys when no dialog is open
fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.refresh();
            app.switch_view(ActiveView::Inventory);
        }
        KeyCode::Char('b') | KeyCode::Char('B') => app.open_dialog(ActiveDialog::AddSpool),
        KeyCode::Char('c') | KeyCode::Char('C') => app.open_dialog(ActiveDialog::AdjustSpool),
        KeyCode::Char('d') | KeyCode::Char('D') => app.open_dialog(ActiveDialog::RemoveSpool),
        KeyCode::Char('e') | KeyCode::Char('E') => app.open_dialog(ActiveDialog::WarningLevel),
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit()
        }
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Backspace => {
            app.clear_status();
            app.switch_view(ActiveView::Home);
        }
        KeyCode::Char('j') | KeyCode::Down if app.active_view == ActiveView::Inventory => {
            app.move_down();
        }
        KeyCode::Char('k') | KeyCode::Up if app.active_view == ActiveView::Inventory => {
            app.move_up();
        }
        KeyCode::Enter if app.active_view == ActiveView::Inventory => {
            app.open_dialog(ActiveDialog::AdjustSpool);
        }
        _ => {}
    }
}

/// Delegate a key to the open dialog
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog.clone() {
        ActiveDialog::AddSpool => {
            dialogs::spool::handle_key(app, key);
        }
        ActiveDialog::AdjustSpool => {
            dialogs::adjust::handle_key(app, key);
        }
        ActiveDialog::RemoveSpool => {
            dialogs::remove::handle_key(app, key);
        }
        ActiveDialog::ConfirmRemove(record) => {
            dialogs::confirm::handle_remove_key(app, record, key);
        }
        ActiveDialog::WarningLevel => {
            dialogs::warning_level::handle_key(app, key);
        }
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
}
