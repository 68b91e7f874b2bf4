//! Configuration management for the application.
//!
//! Settings are stored as TOML in the platform config directory. Only
//! preferences and game tuning live here; widget state is never written to
//! disk.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::branding::{APP_DATA_DIR, LOG_FILE_NAME};

/// Longest accepted pangram celebration, in seconds.
pub const MAX_CELEBRATION_SECS: u64 = 60;
/// Longest accepted reaction signal delay, in milliseconds.
pub const MAX_REACTION_DELAY_MS: u64 = 60_000;

/// Theme display mode preference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// The widgets hosted by the application, in tab order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Increment/decrement counter
    #[default]
    Counter,
    /// Todo list
    Todo,
    /// Reaction-time tester
    Reaction,
    /// HSB color-guessing game
    Color,
    /// Korean keyboard pangram tracker
    Pangram,
}

impl WidgetKind {
    /// All widgets in tab order.
    pub const ALL: [Self; 5] = [
        Self::Counter,
        Self::Todo,
        Self::Reaction,
        Self::Color,
        Self::Pangram,
    ];

    /// Position in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Counter => 0,
            Self::Todo => 1,
            Self::Reaction => 2,
            Self::Color => 3,
            Self::Pangram => 4,
        }
    }

    /// Tab title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Counter => "Counter",
            Self::Todo => "Todo",
            Self::Reaction => "Reaction",
            Self::Color => "HSB Guess",
            Self::Pangram => "Hangul Pangram",
        }
    }

    /// Next widget in tab order, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous widget in tab order, wrapping.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    pub theme_mode: ThemeMode,
    /// Widget shown at startup
    pub start_widget: WidgetKind,
    /// Display help on startup
    pub show_help_on_startup: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            start_widget: WidgetKind::default(),
            show_help_on_startup: false,
        }
    }
}

/// Game tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamesConfig {
    /// Rounds per color-guessing session
    pub total_rounds: u32,
    /// How long the pangram completion banner stays up, in seconds
    pub celebration_secs: u64,
    /// Shortest random delay before the reaction signal, in milliseconds
    pub reaction_min_delay_ms: u64,
    /// Longest random delay before the reaction signal, in milliseconds
    pub reaction_max_delay_ms: u64,
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            total_rounds: crate::models::color_game::DEFAULT_TOTAL_ROUNDS,
            celebration_secs: crate::models::hangul::DEFAULT_CELEBRATION.as_secs(),
            reaction_min_delay_ms: crate::models::reaction::DEFAULT_MIN_DELAY_MS,
            reaction_max_delay_ms: crate::models::reaction::DEFAULT_MAX_DELAY_MS,
        }
    }
}

impl GamesConfig {
    /// Celebration banner duration.
    #[must_use]
    pub const fn celebration(&self) -> Duration {
        Duration::from_secs(self.celebration_secs)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is not set (e.g. "info")
    pub level: String,
    /// Log file path; defaults to the data directory
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/PocketDesk/config.toml`
/// - macOS: `~/Library/Application Support/PocketDesk/config.toml`
/// - Windows: `%APPDATA%\PocketDesk\config.toml`
///
/// Every section is optional; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// UI preferences
    pub ui: UiConfig,
    /// Game tuning
    pub games: GamesConfig,
    /// Logging
    pub logging: LogConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Log file location: the configured path or `<config dir>/pocketdesk.log`.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.logging.file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(LOG_FILE_NAME)),
        }
    }

    /// Loads configuration from `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - at least one round per color session
    /// - reaction delay bounds are ordered
    /// - logging level is a valid filter directive
    pub fn validate(&self) -> Result<()> {
        if self.games.total_rounds == 0 {
            anyhow::bail!("games.total_rounds must be at least 1");
        }

        if self.games.celebration_secs > MAX_CELEBRATION_SECS {
            anyhow::bail!(
                "games.celebration_secs ({}) must be at most {MAX_CELEBRATION_SECS}",
                self.games.celebration_secs
            );
        }

        if self.games.reaction_max_delay_ms > MAX_REACTION_DELAY_MS {
            anyhow::bail!(
                "games.reaction_max_delay_ms ({}) must be at most {MAX_REACTION_DELAY_MS}",
                self.games.reaction_max_delay_ms
            );
        }

        if self.games.reaction_min_delay_ms > self.games.reaction_max_delay_ms {
            anyhow::bail!(
                "games.reaction_min_delay_ms ({}) is greater than games.reaction_max_delay_ms ({})",
                self.games.reaction_min_delay_ms,
                self.games.reaction_max_delay_ms
            );
        }

        tracing_subscriber::EnvFilter::try_new(&self.logging.level).context(format!(
            "Invalid logging.level: '{}'",
            self.logging.level
        ))?;

        Ok(())
    }
}
