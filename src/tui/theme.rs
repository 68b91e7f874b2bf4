//! Theme system for consistent UI colors across dark and light modes.
//!
//! The chrome colors follow the terminal background. The reaction tester's
//! signal colors are fixed in both variants: red has to mean "wait" and green
//! has to mean "go" regardless of the user's terminal.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color
    pub success: Color,
    /// Error state color
    pub error: Color,
    /// Warning state color
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels
    pub text_secondary: Color,
    /// Muted text color for hints, disabled items and completed todos
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for unused keys and panels
    pub surface: Color,

    // Keyboard map
    /// Fill for a used consonant key
    pub consonant: Color,
    /// Fill for a used vowel key
    pub vowel: Color,
}

/// Signal colors for the reaction tester, one per state.
pub mod signal {
    use ratatui::style::Color;

    /// Idle, waiting for the user to start
    pub const WAITING: Color = Color::Rgb(59, 130, 246);
    /// Armed; clicking now is too early
    pub const ARMED: Color = Color::Rgb(239, 68, 68);
    /// Go; measure the click
    pub const GO: Color = Color::Rgb(34, 197, 94);
    /// Showing the last result
    pub const RESULT: Color = Color::Rgb(234, 179, 8);
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// Uses the `dark-light` crate; anything other than an explicit light
    /// answer gives the dark theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a configured [`ThemeMode`], detecting the OS theme for `Auto`.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),

            consonant: Color::Rgb(22, 163, 74),
            vowel: Color::Rgb(37, 99, 235),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// Key fills are darker than in the dark theme so white jamo stay legible.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),

            consonant: Color::Rgb(21, 128, 61),
            vowel: Color::Rgb(29, 78, 216),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
