//! Integration tests for the reaction-time state machine.

use pocketdesk::models::{ClickOutcome, ReactionGame, ReactionState};
use rand::{rngs::StdRng, SeedableRng};
use std::time::{Duration, Instant};

fn run_trial(game: &mut ReactionGame, rng: &mut StdRng, start: Instant, reaction_ms: u64) -> Instant {
    assert!(game.start(start, rng));
    let go_at = game.next_deadline().expect("timer scheduled");
    assert!(game.tick(go_at));
    assert_eq!(
        game.click(go_at + Duration::from_millis(reaction_ms)),
        ClickOutcome::Recorded(reaction_ms)
    );
    go_at + Duration::from_millis(reaction_ms)
}

#[test]
fn test_best_time_only_improves() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut game = ReactionGame::default();
    let mut now = Instant::now();

    for (ms, best) in [(320, 320), (250, 250), (400, 250), (180, 180)] {
        now = run_trial(&mut game, &mut rng, now, ms);
        assert_eq!(game.reaction_ms(), Some(ms));
        assert_eq!(game.best_ms(), Some(best));
        game.reset();
        assert_eq!(game.state(), ReactionState::Waiting);
        assert_eq!(game.reaction_ms(), None);
    }
    assert_eq!(game.attempts(), 4);

    game.reset_stats();
    assert_eq!(game.best_ms(), None);
    assert_eq!(game.attempts(), 0);
}

#[test]
fn test_early_click_records_nothing() {
    let mut rng = StdRng::seed_from_u64(22);
    let mut game = ReactionGame::default();
    let t0 = Instant::now();

    game.start(t0, &mut rng);
    assert_eq!(game.click(t0 + Duration::from_millis(500)), ClickOutcome::TooEarly);
    assert_eq!(game.state(), ReactionState::Waiting);
    assert_eq!(game.attempts(), 0);
    assert_eq!(game.best_ms(), None);

    // The cancelled timer never fires
    assert!(!game.tick(t0 + Duration::from_secs(10)));
    assert_eq!(game.state(), ReactionState::Waiting);
}

#[test]
fn test_timer_does_not_fire_early() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut game = ReactionGame::new(2000, 2000);
    let t0 = Instant::now();

    game.start(t0, &mut rng);
    assert_eq!(game.next_deadline(), Some(t0 + Duration::from_millis(2000)));
    assert!(!game.tick(t0 + Duration::from_millis(1999)));
    assert_eq!(game.state(), ReactionState::Armed);
    assert!(game.tick(t0 + Duration::from_millis(2000)));
    assert_eq!(game.state(), ReactionState::Go);
}

#[test]
fn test_teardown_keeps_result_but_drops_trial() {
    let mut rng = StdRng::seed_from_u64(24);
    let mut game = ReactionGame::default();
    let now = run_trial(&mut game, &mut rng, Instant::now(), 210);

    game.cancel_pending();
    assert_eq!(game.state(), ReactionState::Result);

    game.reset();
    game.start(now, &mut rng);
    game.cancel_pending();
    assert_eq!(game.state(), ReactionState::Waiting);
    assert!(game.next_deadline().is_none());
}
