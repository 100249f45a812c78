use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use filament::cli::{
    handle_config_command, handle_export_command, handle_history_command, handle_spool_command,
    handle_warning_command, ConfigArgs, SpoolCommands, WarningCommands,
};
use filament::config::{paths::FilamentPaths, settings::Settings};
use filament::export::ExportFormat;
use filament::storage::Storage;

#[derive(Parser)]
#[command(
    name = "filament",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based 3D printer filament inventory",
    long_about = "FilamentCLI keeps track of the filament spools on your shelf: \
                  what material and color you have, how many grams are left, \
                  and which spools are running low."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    #[command(alias = "ui")]
    Tui,

    /// Spool inventory commands
    #[command(subcommand)]
    Spool(SpoolCommands),

    /// Low-stock warning level commands
    #[command(subcommand)]
    Warning(WarningCommands),

    /// Export the inventory to a file
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file path (default: exports/filament-inventory-<date>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths, or change settings
    Config(ConfigArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log lines would corrupt the alternate screen
    if !matches!(cli.command, None | Some(Commands::Tui)) {
        setup_logging(cli.verbose);
    }

    let paths = FilamentPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths)?;
    storage.initialize()?;

    match cli.command {
        None | Some(Commands::Tui) => {
            filament::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Spool(cmd)) => {
            handle_spool_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Warning(cmd)) => {
            handle_warning_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format, output)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Config(args)) => {
            handle_config_command(&storage, &mut settings, args)?;
        }
    }

    Ok(())
}
