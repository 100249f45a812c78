//! Terminal User Interface module
//!
//! The interactive menu for FilamentCLI, built on ratatui. A home screen with
//! the main menu and low-stock notifications, an inventory list, and modal
//! dialogs for each inventory operation.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
