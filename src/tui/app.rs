//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::settings::Settings;
use crate::models::SpoolRecord;
use crate::services::{InventoryService, InventorySummary};
use crate::storage::{Storage, DEFAULT_WARNING_LEVEL};

use super::dialogs::adjust::AdjustFormState;
use super::dialogs::remove::RemoveFormState;
use super::dialogs::spool::SpoolFormState;
use super::dialogs::warning_level::WarningFormState;
use super::theme::Theme;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Main menu with low-stock notifications
    #[default]
    Home,
    /// Full inventory list
    Inventory,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddSpool,
    AdjustSpool,
    RemoveSpool,
    /// Y/N confirmation for removing the given spool
    ConfirmRemove(SpoolRecord),
    WarningLevel,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Colors resolved from the theme setting
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Records as of the last refresh, in file order
    pub records: Vec<SpoolRecord>,

    /// Warning level as of the last refresh
    pub warning_level: i64,

    /// Selected row in the inventory view
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add spool form state
    pub spool_form: SpoolFormState,

    /// Modify form state
    pub adjust_form: AdjustFormState,

    /// Remove form state
    pub remove_form: RemoveFormState,

    /// Warning level form state
    pub warning_form: WarningFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            theme: Theme::from_kind(settings.theme),
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            records: Vec::new(),
            warning_level: DEFAULT_WARNING_LEVEL,
            selected_index: 0,
            status_message: None,
            spool_form: SpoolFormState::new(),
            adjust_form: AdjustFormState::new(),
            remove_form: RemoveFormState::new(),
            warning_form: WarningFormState::new(),
        }
    }

    /// Service bound to this app's storage and settings
    pub fn service(&self) -> InventoryService<'a> {
        InventoryService::new(self.storage, self.settings)
    }

    /// Reload records and the warning level from disk
    ///
    /// Failures are reported in the status bar and leave the cached data as is.
    pub fn refresh(&mut self) {
        let service = self.service();

        match service.list() {
            Ok(records) => self.records = records,
            Err(e) => {
                self.set_status(format!("Error: {}", e));
                return;
            }
        }

        match service.warning_level() {
            Ok(level) => self.warning_level = level,
            Err(e) => self.set_status(format!("Error: {}", e)),
        }

        self.clamp_selection();
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.clamp_selection();
    }

    /// Open a dialog, resetting its form
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        let selected = self.selected_record().cloned();

        match &dialog {
            ActiveDialog::AddSpool => {
                self.spool_form = SpoolFormState::new();
            }
            ActiveDialog::AdjustSpool => {
                self.adjust_form = match selected {
                    Some(ref record) => AdjustFormState::from_record(record),
                    None => AdjustFormState::new(),
                };
            }
            ActiveDialog::RemoveSpool => {
                self.remove_form = match selected {
                    Some(ref record) => RemoveFormState::from_record(record),
                    None => RemoveFormState::new(),
                };
            }
            ActiveDialog::WarningLevel => {
                self.warning_form = WarningFormState::with_level(self.warning_level);
            }
            _ => {}
        }

        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Record under the cursor, only while the inventory view is shown
    pub fn selected_record(&self) -> Option<&SpoolRecord> {
        match self.active_view {
            ActiveView::Inventory => self.records.get(self.selected_index),
            ActiveView::Home => None,
        }
    }

    /// Move selection up in the inventory view
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down in the inventory view
    pub fn move_down(&mut self) {
        if self.selected_index < self.records.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.records.len().saturating_sub(1));
    }

    /// Records at or below the warning level
    pub fn low_stock(&self) -> Vec<&SpoolRecord> {
        self.records
            .iter()
            .filter(|r| r.is_low_stock(self.warning_level))
            .collect()
    }

    /// Totals for the status bar
    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_records(&self.records, self.warning_level)
    }
}
