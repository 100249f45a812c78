//! Config CLI command
//!
//! Shows paths and settings, and updates settings when options are given.

use clap::Args;

use crate::config::settings::{Settings, ThemeKind};
use crate::display::format_summary;
use crate::error::{FilamentError, FilamentResult};
use crate::services::InventoryService;
use crate::storage::Storage;

/// Options for the `config` command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Interface theme (classic or default)
    #[arg(long)]
    pub theme: Option<String>,

    /// Record changes in the audit log
    #[arg(long)]
    pub audit: Option<bool>,

    /// Upper-case material type and color before use
    #[arg(long)]
    pub uppercase_input: Option<bool>,
}

impl ConfigArgs {
    fn has_changes(&self) -> bool {
        self.theme.is_some() || self.audit.is_some() || self.uppercase_input.is_some()
    }
}

/// Apply any requested setting changes, then print the configuration
pub fn handle_config_command(
    storage: &Storage,
    settings: &mut Settings,
    args: ConfigArgs,
) -> FilamentResult<()> {
    if args.has_changes() {
        apply_changes(settings, &args)?;
        settings.save(storage.paths())?;
        println!("Settings saved.");
        println!();
    }

    let paths = storage.paths();
    let summary = InventoryService::new(storage, settings).summary()?;

    println!("FilamentCLI Configuration");
    println!("=========================");
    println!("Base directory:     {}", paths.base_dir().display());
    println!("Inventory file:     {}", paths.inventory_file().display());
    println!("Warning level file: {}", paths.warning_level_file().display());
    println!("Audit log:          {}", paths.audit_log().display());
    println!("Export directory:   {}", paths.export_dir().display());
    println!();
    println!("Settings:");
    println!("  Theme:           {:?}", settings.theme);
    println!("  Audit enabled:   {}", settings.audit_enabled);
    println!("  Uppercase input: {}", settings.uppercase_input);
    println!();
    print!("{}", format_summary(&summary));

    Ok(())
}

fn apply_changes(settings: &mut Settings, args: &ConfigArgs) -> FilamentResult<()> {
    if let Some(ref theme) = args.theme {
        settings.theme = ThemeKind::parse(theme).ok_or_else(|| {
            FilamentError::Config(format!(
                "Unknown theme '{}'. Expected 'classic' or 'default'",
                theme
            ))
        })?;
    }
    if let Some(audit) = args.audit {
        settings.audit_enabled = audit;
    }
    if let Some(uppercase_input) = args.uppercase_input {
        settings.uppercase_input = uppercase_input;
    }
    Ok(())
}
