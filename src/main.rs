//! PocketDesk - a terminal desk of small interactive widgets
//!
//! Parses the command line, loads configuration, installs file logging and
//! runs the TUI until the user quits.

use anyhow::{Context, Result};
use clap::Parser;
use pocketdesk::branding::{APP_BINARY_NAME, APP_DESCRIPTION};
use pocketdesk::config::{Config, ThemeMode, WidgetKind};
use pocketdesk::{logging, tui};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use tracing::info;

/// PocketDesk - a terminal desk of small interactive widgets
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Widget to open first
    #[arg(value_enum, value_name = "WIDGET")]
    widget: Option<WidgetKind>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Seed for the random number generator (reproducible games)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_file_path()?,
    };

    if cli.init_config {
        if config_path.exists() {
            println!("Config file already exists: {}", config_path.display());
        } else {
            Config::new().save_to(&config_path)?;
            println!("Wrote default config to {}", config_path.display());
        }
        return Ok(());
    }

    let mut config = Config::load_from(&config_path)?;
    if let Some(widget) = cli.widget {
        config.ui.start_widget = widget;
    }
    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme;
    }
    if let Some(log_file) = cli.log_file {
        config.logging.file = Some(log_file);
    }

    let log_path = config.log_file_path()?;
    logging::init(&log_path, &config.logging.level, cli.verbose)
        .context("Failed to set up logging")?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        seed,
        config = %config_path.display(),
        "starting"
    );

    let theme = tui::Theme::from_mode(config.ui.theme_mode);
    let mut app_state = tui::AppState::new(config, theme, StdRng::seed_from_u64(seed));

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal before reporting any loop error
    tui::restore_terminal(terminal)?;

    result
}
