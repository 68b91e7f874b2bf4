//! Component trait pattern for TUI widgets.
//!
//! Every widget is a self-contained component: it owns its model, maps key
//! events to model transitions and renders itself. Components never talk to
//! each other; anything the shell should show (a status line, a blocking
//! alert) is returned as a [`ComponentEvent`].

use crossterm::event::{KeyEvent, KeyModifiers};
use rand::RngCore;
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

use crate::tui::Theme;

/// What a component gets alongside each input event.
pub struct InputContext<'a> {
    /// Time the event was received
    pub now: Instant,
    /// Shared random source for randomized transitions
    pub rng: &'a mut dyn RngCore,
}

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    fn handle_input(&mut self, key: KeyEvent, ctx: &mut InputContext<'_>) -> Option<Self::Event>;

    /// Handle pasted text. Ignored by default.
    fn handle_paste(&mut self, _text: &str, _ctx: &mut InputContext<'_>) -> Option<Self::Event> {
        None
    }

    /// Advance timers to `now`.
    fn tick(&mut self, _now: Instant) -> Option<Self::Event> {
        None
    }

    /// Earliest pending timer deadline, so the event loop can wake up for it.
    fn next_deadline(&self) -> Option<Instant> {
        None
    }

    /// Called when the component leaves the screen. Pending timers must be
    /// cancelled here.
    fn on_hide(&mut self) {}

    /// Called once when the application exits. Defaults to [`Self::on_hide`].
    fn teardown(&mut self) {
        self.on_hide();
    }

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Short `(key, action)` hints for the status bar, given the current state.
    fn key_hints(&self) -> Vec<(&'static str, &'static str)>;
}

/// Events emitted by widgets and processed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// Informational message for the status bar
    Status(String),
    /// Blocking notification, dismissed by any key
    Alert {
        /// Popup title
        title: String,
        /// Popup body
        message: String,
    },
}

impl ComponentEvent {
    /// Shorthand for [`ComponentEvent::Status`].
    pub fn status(message: impl Into<String>) -> Self {
        Self::Status(message.into())
    }

    /// Shorthand for [`ComponentEvent::Alert`].
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Alert {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Whether a key event carries a printable character meant as text input.
///
/// Shift is allowed (capitals, shifted jamo); Ctrl and Alt are reserved for
/// shortcuts.
#[must_use]
pub fn is_text_input(key: &KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_is_text_input() {
        assert!(is_text_input(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert!(is_text_input(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)));
        assert!(!is_text_input(&KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(!is_text_input(&KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT)));
    }

    #[test]
    fn test_event_constructors() {
        assert_eq!(
            ComponentEvent::status("hi"),
            ComponentEvent::Status("hi".to_string())
        );
        assert_eq!(
            ComponentEvent::alert("t", "m"),
            ComponentEvent::Alert {
                title: "t".to_string(),
                message: "m".to_string()
            }
        );
    }
}
