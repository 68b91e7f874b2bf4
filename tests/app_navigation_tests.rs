//! Integration tests for shell navigation and popups.
//!
//! Drives `AppState` with synthetic key events:
//! - Ctrl+N / Ctrl+P cycle widgets, Alt+digit jumps
//! - F1 opens and closes help; alerts swallow the next key
//! - Leaving the reaction tester abandons a running trial

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pocketdesk::config::{Config, WidgetKind};
use pocketdesk::models::ReactionState;
use pocketdesk::tui::{handle_key_event, AppState, Theme};
use rand::{rngs::StdRng, SeedableRng};
use std::time::{Duration, Instant};

fn create_state() -> AppState {
    AppState::new(Config::new(), Theme::dark(), StdRng::seed_from_u64(99))
}

fn press(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers, now: Instant) -> bool {
    handle_key_event(state, KeyEvent::new(code, modifiers), now).unwrap()
}

fn plain(state: &mut AppState, code: KeyCode, now: Instant) -> bool {
    press(state, code, KeyModifiers::NONE, now)
}

#[test]
fn test_ctrl_n_and_ctrl_p_cycle_widgets() {
    let mut state = create_state();
    let now = Instant::now();
    assert_eq!(state.active, WidgetKind::Counter);

    for expected in [
        WidgetKind::Todo,
        WidgetKind::Reaction,
        WidgetKind::Color,
        WidgetKind::Pangram,
        WidgetKind::Counter,
    ] {
        press(&mut state, KeyCode::Char('n'), KeyModifiers::CONTROL, now);
        assert_eq!(state.active, expected);
    }

    press(&mut state, KeyCode::Char('p'), KeyModifiers::CONTROL, now);
    assert_eq!(state.active, WidgetKind::Pangram);
}

#[test]
fn test_alt_digit_jumps() {
    let mut state = create_state();
    let now = Instant::now();

    press(&mut state, KeyCode::Char('4'), KeyModifiers::ALT, now);
    assert_eq!(state.active, WidgetKind::Color);
    press(&mut state, KeyCode::Char('1'), KeyModifiers::ALT, now);
    assert_eq!(state.active, WidgetKind::Counter);
}

#[test]
fn test_start_widget_from_config() {
    let mut config = Config::new();
    config.ui.start_widget = WidgetKind::Todo;
    config.ui.show_help_on_startup = true;
    let state = AppState::new(config, Theme::light(), StdRng::seed_from_u64(1));
    assert_eq!(state.active, WidgetKind::Todo);
    assert!(state.help.is_some());
}

#[test]
fn test_keys_reach_active_widget_only() {
    let mut state = create_state();
    let now = Instant::now();

    plain(&mut state, KeyCode::Char('+'), now);
    plain(&mut state, KeyCode::Char('+'), now);
    assert_eq!(state.counter.counter().value(), 2);

    press(&mut state, KeyCode::Char('n'), KeyModifiers::CONTROL, now);
    plain(&mut state, KeyCode::Char('+'), now);
    assert_eq!(state.todo.input(), "+");
    assert_eq!(state.counter.counter().value(), 2);
}

#[test]
fn test_help_overlay_blocks_widget_input() {
    let mut state = create_state();
    let now = Instant::now();

    plain(&mut state, KeyCode::F(1), now);
    assert!(state.help.is_some());

    plain(&mut state, KeyCode::Char('+'), now);
    assert_eq!(state.counter.counter().value(), 0);

    plain(&mut state, KeyCode::F(1), now);
    assert!(state.help.is_none());
}

#[test]
fn test_too_early_alert_is_dismissed_by_any_key() {
    let mut state = create_state();
    let t0 = Instant::now();
    state.switch_to(WidgetKind::Reaction);

    plain(&mut state, KeyCode::Char(' '), t0);
    plain(&mut state, KeyCode::Char(' '), t0 + Duration::from_millis(5));
    let alert = state.alert.clone().expect("too-early alert");
    assert_eq!(alert.title, "Too early!");
    assert_eq!(state.reaction.game().state(), ReactionState::Waiting);

    // The dismissing key is swallowed, so no new trial starts
    plain(&mut state, KeyCode::Char(' '), t0 + Duration::from_millis(10));
    assert!(state.alert.is_none());
    assert_eq!(state.reaction.game().state(), ReactionState::Waiting);
}

#[test]
fn test_switching_away_cancels_reaction_timer() {
    let mut state = create_state();
    let t0 = Instant::now();
    state.switch_to(WidgetKind::Reaction);
    plain(&mut state, KeyCode::Enter, t0);
    assert_eq!(state.reaction.game().state(), ReactionState::Armed);

    press(&mut state, KeyCode::Char('n'), KeyModifiers::CONTROL, t0);
    assert_eq!(state.reaction.game().state(), ReactionState::Waiting);
    assert!(state.next_deadline().is_none());

    // Ticking far into the future must not flip the hidden widget to Go
    state.tick(t0 + Duration::from_secs(10));
    assert_eq!(state.reaction.game().state(), ReactionState::Waiting);
}

#[test]
fn test_opening_help_abandons_reaction_trial() {
    let mut state = create_state();
    let t0 = Instant::now();
    state.switch_to(WidgetKind::Reaction);
    plain(&mut state, KeyCode::Char(' '), t0);
    assert_eq!(state.reaction.game().state(), ReactionState::Armed);

    plain(&mut state, KeyCode::F(1), t0);
    assert!(state.help.is_some());
    assert_eq!(state.reaction.game().state(), ReactionState::Waiting);
    assert!(state.next_deadline().is_none());

    // The signal must not fire behind the overlay
    state.tick(t0 + Duration::from_secs(6));
    assert_eq!(state.reaction.game().state(), ReactionState::Waiting);

    plain(&mut state, KeyCode::Esc, t0 + Duration::from_secs(6));
    assert!(state.help.is_none());
    plain(&mut state, KeyCode::Char(' '), t0 + Duration::from_millis(6200));
    assert_eq!(state.reaction.game().state(), ReactionState::Armed);
    assert_eq!(state.reaction.game().attempts(), 0);
}

#[test]
fn test_tick_fires_reaction_signal() {
    let mut state = create_state();
    let t0 = Instant::now();
    state.switch_to(WidgetKind::Reaction);
    plain(&mut state, KeyCode::Char(' '), t0);

    let deadline = state.next_deadline().expect("timer pending");
    assert!(deadline >= t0 + Duration::from_millis(1000));
    assert!(deadline <= t0 + Duration::from_millis(5000));

    state.tick(deadline);
    assert_eq!(state.reaction.game().state(), ReactionState::Go);
}

#[test]
fn test_game_over_raises_alert() {
    let mut config = Config::new();
    config.games.total_rounds = 2;
    let mut state = AppState::new(config, Theme::dark(), StdRng::seed_from_u64(3));
    let now = Instant::now();
    state.switch_to(WidgetKind::Color);

    for _ in 0..2 {
        plain(&mut state, KeyCode::Enter, now);
        plain(&mut state, KeyCode::Char(' '), now);
    }
    let alert = state.alert.clone().expect("game over alert");
    assert_eq!(alert.title, "Game over!");
    assert!(alert.message.starts_with("Your final score is "));
    assert_eq!(state.color.game().round(), 1);
}

#[test]
fn test_paste_goes_to_pangram() {
    let mut state = create_state();
    state.switch_to(WidgetKind::Pangram);
    state.handle_paste("한글", Instant::now());
    assert_eq!(state.pangram.tracker().text(), "한글");
    assert!(state.pangram.tracker().is_used('ㄱ'));
}

#[test]
fn test_ctrl_c_quits() {
    let mut state = create_state();
    assert!(press(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL, Instant::now()));
    assert!(state.should_quit);
}
