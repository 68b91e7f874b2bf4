//! Widget state machines and the color math they share.
//!
//! Everything in here is independent of the terminal: time arrives as an
//! `Instant` argument and randomness as a `rand::Rng`, so every transition can
//! be driven deterministically from tests.

pub mod color_game;
pub mod counter;
pub mod hangul;
pub mod hsb;
pub mod reaction;
pub mod rgb;
pub mod timer;
pub mod todo;

// Re-export all model types
pub use color_game::{generate_color, ColorGame, ColorMode, GamePhase, RoundOutcome};
pub use counter::Counter;
pub use hangul::{JamoKind, KeyCap, PangramTracker, Syllable};
pub use hsb::{distance, parse_component, score, HsbChannel, HsbColor};
pub use reaction::{ClickOutcome, ReactionGame, ReactionRating, ReactionState};
pub use rgb::RgbColor;
pub use timer::OneShotTimer;
pub use todo::{Todo, TodoList};
