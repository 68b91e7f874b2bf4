//! HSB color-guessing game: random targets, scored guesses, round bookkeeping.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use rand::Rng;
use tracing::{debug, info};

use super::hsb::{parse_component, score, HsbChannel, HsbColor};

/// Rounds per session unless configured otherwise.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 10;

/// Hue restriction used when generating targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Any hue
    #[default]
    Normal,
    /// Blue through purple to red (240°-360°)
    RedBlue,
    /// Green through cyan to blue (120°-240°)
    GreenBlue,
}

impl ColorMode {
    /// All modes in selector order.
    pub const ALL: [Self; 3] = [Self::Normal, Self::RedBlue, Self::GreenBlue];

    /// Position in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::RedBlue => 1,
            Self::GreenBlue => 2,
        }
    }

    /// Short display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::RedBlue => "Red-Blue",
            Self::GreenBlue => "Green-Blue",
        }
    }

    /// Hue range caption under the mode button.
    #[must_use]
    pub const fn range_label(self) -> &'static str {
        match self {
            Self::Normal => "All Hues",
            Self::RedBlue => "Hue: 240°-360°",
            Self::GreenBlue => "Hue: 120°-240°",
        }
    }

    /// Next mode in selector order, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Normal => Self::RedBlue,
            Self::RedBlue => Self::GreenBlue,
            Self::GreenBlue => Self::Normal,
        }
    }
}

/// Whether the player is entering a guess or looking at the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Target visible, guess editable
    #[default]
    Guessing,
    /// Guess scored, waiting for the continue key
    Results,
}

/// What advancing from the results screen did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Next round started
    Continue {
        /// The round now being played (1-based)
        round: u32,
    },
    /// Last round finished; the session has been reset
    GameOver {
        /// Mean accuracy over the session, rounded
        average: u8,
    },
}

/// Generates a target color for `mode`.
///
/// Hue is uniform over the mode's range (Red-Blue draws 240..=360 and maps 360
/// to 0), saturation is uniform over 0..=100, and brightness is
/// `floor(sqrt(u) * 100)` so bright colors come up more often.
pub fn generate_color<R: Rng + ?Sized>(mode: ColorMode, rng: &mut R) -> HsbColor {
    let hue = match mode {
        ColorMode::Normal => rng.gen_range(0..360),
        ColorMode::RedBlue => {
            let hue = rng.gen_range(240..=360);
            if hue > 359 {
                0
            } else {
                hue
            }
        }
        ColorMode::GreenBlue => rng.gen_range(120..240),
    };
    let saturation = rng.gen_range(0..=100);
    let brightness = (rng.gen::<f64>().sqrt() * 100.0).floor() as u16;

    HsbColor::new(hue, saturation, brightness)
}

/// Full game session state.
#[derive(Debug, Clone)]
pub struct ColorGame {
    mode: ColorMode,
    pending: [HsbColor; 3],
    target: HsbColor,
    guess: HsbColor,
    phase: GamePhase,
    round: u32,
    total_rounds: u32,
    score: u32,
    last_accuracy: Option<u8>,
}

impl ColorGame {
    /// Starts a session of `total_rounds` rounds (at least one).
    pub fn new<R: Rng + ?Sized>(total_rounds: u32, rng: &mut R) -> Self {
        let pending = Self::generate_all(rng);
        Self {
            mode: ColorMode::Normal,
            pending,
            target: pending[ColorMode::Normal.index()],
            guess: HsbColor::default(),
            phase: GamePhase::Guessing,
            round: 1,
            total_rounds: total_rounds.max(1),
            score: 0,
            last_accuracy: None,
        }
    }

    fn generate_all<R: Rng + ?Sized>(rng: &mut R) -> [HsbColor; 3] {
        ColorMode::ALL.map(|mode| generate_color(mode, rng))
    }

    /// Active hue mode.
    #[must_use]
    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Color the player is trying to match.
    #[must_use]
    pub const fn target(&self) -> HsbColor {
        self.target
    }

    /// Pending target kept for `mode`.
    #[must_use]
    pub const fn pending_target(&self, mode: ColorMode) -> HsbColor {
        self.pending[mode.index()]
    }

    /// The player's current guess.
    #[must_use]
    pub const fn guess(&self) -> HsbColor {
        self.guess
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current round (1-based).
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Rounds per session.
    #[must_use]
    pub const fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    /// Sum of accuracies this session.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Accuracy of the most recently submitted guess.
    #[must_use]
    pub const fn last_accuracy(&self) -> Option<u8> {
        self.last_accuracy
    }

    /// Switches hue mode. Only allowed while guessing.
    ///
    /// The target becomes the mode's pending color; it is not regenerated, so
    /// switching back and forth shows the same colors.
    pub fn set_mode(&mut self, mode: ColorMode) -> bool {
        if self.phase != GamePhase::Guessing || mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.target = self.pending[mode.index()];
        debug!(mode = mode.label(), "color mode changed");
        true
    }

    /// Stores text typed into a guess field, sanitized and clamped.
    pub fn set_guess_field(&mut self, channel: HsbChannel, text: &str) {
        self.guess.set(channel, parse_component(text, channel.max()));
    }

    /// Nudges a guess field by `delta`, clamped to the channel range.
    pub fn adjust_guess_field(&mut self, channel: HsbChannel, delta: i32) {
        let current = i32::from(self.guess.get(channel));
        let next = (current + delta).clamp(0, i32::from(channel.max()));
        self.guess.set(channel, next as u16);
    }

    /// Replaces the whole guess (clamped).
    pub fn set_guess(&mut self, guess: HsbColor) {
        self.guess = HsbColor::new(guess.hue, guess.saturation, guess.brightness);
    }

    /// Scores the guess. Returns the accuracy, or `None` outside `Guessing`.
    pub fn submit(&mut self) -> Option<u8> {
        if self.phase != GamePhase::Guessing {
            return None;
        }
        let accuracy = score(&self.guess, &self.target);
        self.last_accuracy = Some(accuracy);
        self.score += u32::from(accuracy);
        self.phase = GamePhase::Results;
        info!(round = self.round, accuracy, "guess scored");
        Some(accuracy)
    }

    /// Leaves the results screen.
    ///
    /// Every mode gets a fresh pending target and the active mode's becomes
    /// current. After the last round the session resets. Returns `None`
    /// outside `Results`.
    pub fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<RoundOutcome> {
        if self.phase != GamePhase::Results {
            return None;
        }

        self.pending = Self::generate_all(rng);
        self.target = self.pending[self.mode.index()];
        self.guess = HsbColor::default();
        self.phase = GamePhase::Guessing;

        if self.round < self.total_rounds {
            self.round += 1;
            debug!(round = self.round, "next color round");
            return Some(RoundOutcome::Continue { round: self.round });
        }

        let average = (f64::from(self.score) / f64::from(self.total_rounds)).round() as u8;
        info!(average, "color game finished");
        self.score = 0;
        self.round = 1;
        self.last_accuracy = None;
        Some(RoundOutcome::GameOver { average })
    }
}
