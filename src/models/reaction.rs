//! Reaction-time tester: a four-state cycle driven by one randomized timer.
//!
//! ```text
//! Waiting --start--> Armed --timer--> Go --click--> Result --reset--> Waiting
//!                      |
//!                      +--early click (timer cancelled)--> Waiting
//! ```

// Millisecond counts comfortably fit in u64
#![allow(clippy::cast_possible_truncation)]

use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::timer::OneShotTimer;

/// Shortest random delay before the "go" signal.
pub const DEFAULT_MIN_DELAY_MS: u64 = 1000;
/// Longest random delay before the "go" signal.
pub const DEFAULT_MAX_DELAY_MS: u64 = 5000;

/// Where the trial currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReactionState {
    /// Idle, waiting for the player to start
    #[default]
    Waiting,
    /// Timer running; clicking now is too early
    Armed,
    /// Signal shown; the next click is measured
    Go,
    /// Showing the measured time
    Result,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Clicked before the signal; trial abandoned
    TooEarly,
    /// Reaction measured, in milliseconds
    Recorded(u64),
    /// Click had no meaning in the current state
    Ignored,
}

/// Qualitative feedback for a reaction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionRating {
    /// Under 200 ms
    Lightning,
    /// 200-249 ms
    VeryFast,
    /// 250-299 ms
    Fast,
    /// 300-399 ms
    Average,
    /// 400 ms and above
    Slow,
}

impl ReactionRating {
    /// Rates a reaction time.
    #[must_use]
    pub const fn from_ms(ms: u64) -> Self {
        match ms {
            0..=199 => Self::Lightning,
            200..=249 => Self::VeryFast,
            250..=299 => Self::Fast,
            300..=399 => Self::Average,
            _ => Self::Slow,
        }
    }

    /// Feedback line shown under the result.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Lightning => "Lightning reflexes!",
            Self::VeryFast => "Very fast!",
            Self::Fast => "Fast!",
            Self::Average => "Average.",
            Self::Slow => "A bit slow, try again!",
        }
    }
}

/// Reaction-time trial state plus session statistics.
#[derive(Debug, Clone)]
pub struct ReactionGame {
    state: ReactionState,
    armed_at: Option<Instant>,
    reaction_ms: Option<u64>,
    best_ms: Option<u64>,
    attempts: u32,
    go_timer: OneShotTimer,
    min_delay_ms: u64,
    max_delay_ms: u64,
}

impl Default for ReactionGame {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY_MS, DEFAULT_MAX_DELAY_MS)
    }
}

impl ReactionGame {
    /// Creates a game whose random delay is drawn from `[min_delay_ms, max_delay_ms]`.
    ///
    /// The bounds are swapped if given in the wrong order.
    #[must_use]
    pub fn new(min_delay_ms: u64, max_delay_ms: u64) -> Self {
        let (min_delay_ms, max_delay_ms) = if min_delay_ms <= max_delay_ms {
            (min_delay_ms, max_delay_ms)
        } else {
            (max_delay_ms, min_delay_ms)
        };
        Self {
            state: ReactionState::Waiting,
            armed_at: None,
            reaction_ms: None,
            best_ms: None,
            attempts: 0,
            go_timer: OneShotTimer::new(),
            min_delay_ms,
            max_delay_ms,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ReactionState {
        self.state
    }

    /// Last measured reaction, cleared by [`Self::reset`].
    #[must_use]
    pub const fn reaction_ms(&self) -> Option<u64> {
        self.reaction_ms
    }

    /// Best reaction this session.
    #[must_use]
    pub const fn best_ms(&self) -> Option<u64> {
        self.best_ms
    }

    /// Number of measured reactions this session.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// When the pending "go" timer fires, if one is pending.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.go_timer.deadline()
    }

    /// Waiting -> Armed, scheduling the signal after a random delay.
    ///
    /// Returns `false` (and does nothing) outside `Waiting`.
    pub fn start<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        if self.state != ReactionState::Waiting {
            return false;
        }
        let delay_ms = rng.gen_range(self.min_delay_ms..=self.max_delay_ms);
        self.go_timer.schedule(now, Duration::from_millis(delay_ms));
        self.armed_at = None;
        self.state = ReactionState::Armed;
        debug!(delay_ms, "reaction trial armed");
        true
    }

    /// Fires the pending timer when due: Armed -> Go, recording the signal time.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != ReactionState::Armed || !self.go_timer.fire_if_due(now) {
            return false;
        }
        self.armed_at = Some(now);
        self.state = ReactionState::Go;
        debug!("reaction signal shown");
        true
    }

    /// Handles the player's click.
    pub fn click(&mut self, now: Instant) -> ClickOutcome {
        match self.state {
            ReactionState::Armed => {
                self.go_timer.cancel();
                self.state = ReactionState::Waiting;
                debug!("reaction click too early");
                ClickOutcome::TooEarly
            }
            ReactionState::Go => {
                let Some(armed_at) = self.armed_at else {
                    return ClickOutcome::Ignored;
                };
                let elapsed = now.saturating_duration_since(armed_at).as_millis() as u64;
                self.reaction_ms = Some(elapsed);
                self.attempts += 1;
                if self.best_ms.map_or(true, |best| elapsed < best) {
                    self.best_ms = Some(elapsed);
                }
                self.state = ReactionState::Result;
                info!(elapsed_ms = elapsed, attempts = self.attempts, "reaction recorded");
                ClickOutcome::Recorded(elapsed)
            }
            ReactionState::Waiting | ReactionState::Result => ClickOutcome::Ignored,
        }
    }

    /// Back to Waiting for another trial. Best time and attempts persist.
    pub fn reset(&mut self) {
        self.go_timer.cancel();
        self.armed_at = None;
        self.reaction_ms = None;
        self.state = ReactionState::Waiting;
    }

    /// Clears the session statistics as well.
    pub fn reset_stats(&mut self) {
        self.best_ms = None;
        self.attempts = 0;
        self.reset();
        debug!("reaction stats cleared");
    }

    /// Teardown hook: cancels the pending timer and abandons a trial in flight.
    ///
    /// A finished result stays on screen.
    pub fn cancel_pending(&mut self) {
        self.go_timer.cancel();
        if matches!(self.state, ReactionState::Armed | ReactionState::Go) {
            self.armed_at = None;
            self.state = ReactionState::Waiting;
        }
    }
}
