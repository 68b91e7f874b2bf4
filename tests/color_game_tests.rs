//! Integration tests for the color-guessing game session.
//!
//! Covers:
//! - per-mode pending targets surviving mode switches
//! - round advance regenerating every mode at once
//! - the end-of-session average and reset
//! - guess field sanitization

use pocketdesk::models::{
    generate_color, score, ColorGame, ColorMode, GamePhase, HsbChannel, HsbColor, RoundOutcome,
};
use rand::{rngs::StdRng, SeedableRng};

fn new_game(rounds: u32, seed: u64) -> (ColorGame, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let game = ColorGame::new(rounds, &mut rng);
    (game, rng)
}

#[test]
fn test_mode_switch_keeps_pending_targets() {
    let (mut game, _rng) = new_game(10, 1);
    let normal = game.target();
    let red_blue = game.pending_target(ColorMode::RedBlue);

    assert!(game.set_mode(ColorMode::RedBlue));
    assert_eq!(game.target(), red_blue);
    assert!(game.set_mode(ColorMode::GreenBlue));
    assert!(game.set_mode(ColorMode::Normal));
    assert_eq!(game.target(), normal);

    assert!(game.set_mode(ColorMode::RedBlue));
    assert_eq!(game.target(), red_blue);
}

#[test]
fn test_mode_locked_during_results() {
    let (mut game, _rng) = new_game(10, 2);
    game.submit();
    assert_eq!(game.phase(), GamePhase::Results);
    assert!(!game.set_mode(ColorMode::GreenBlue));
    assert_eq!(game.mode(), ColorMode::Normal);
}

#[test]
fn test_round_advance_regenerates_all_modes() {
    let (mut game, mut rng) = new_game(10, 3);
    game.set_mode(ColorMode::GreenBlue);
    let before = ColorMode::ALL.map(|mode| game.pending_target(mode));

    game.set_guess(HsbColor::new(10, 20, 30));
    game.submit();
    assert_eq!(
        game.next_round(&mut rng),
        Some(RoundOutcome::Continue { round: 2 })
    );

    let after = ColorMode::ALL.map(|mode| game.pending_target(mode));
    assert_ne!(before, after);
    assert_eq!(game.target(), game.pending_target(ColorMode::GreenBlue));
    assert_eq!(game.mode(), ColorMode::GreenBlue);
    assert_eq!(game.guess(), HsbColor::default());
    assert_eq!(game.phase(), GamePhase::Guessing);
}

#[test]
fn test_perfect_session_averages_to_100_and_resets() {
    let (mut game, mut rng) = new_game(3, 4);

    for round in 1..=3 {
        assert_eq!(game.round(), round);
        game.set_guess(game.target());
        assert_eq!(game.submit(), Some(100));
        let outcome = game.next_round(&mut rng);
        if round < 3 {
            assert_eq!(outcome, Some(RoundOutcome::Continue { round: round + 1 }));
        } else {
            assert_eq!(outcome, Some(RoundOutcome::GameOver { average: 100 }));
        }
    }

    assert_eq!(game.round(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.last_accuracy(), None);
    assert_eq!(game.phase(), GamePhase::Guessing);
}

#[test]
fn test_average_is_rounded() {
    let (mut game, mut rng) = new_game(2, 5);

    game.set_guess(game.target());
    game.submit();
    game.next_round(&mut rng);

    let target = game.target();
    let opposite = HsbColor::new((target.hue + 180) % 360, target.saturation, target.brightness);
    game.set_guess(opposite);
    let second = game.submit().unwrap();

    let expected = ((100.0 + f64::from(second)) / 2.0).round() as u8;
    assert_eq!(
        game.next_round(&mut rng),
        Some(RoundOutcome::GameOver { average: expected })
    );
}

#[test]
fn test_submit_and_advance_are_phase_guarded() {
    let (mut game, mut rng) = new_game(5, 6);
    assert_eq!(game.next_round(&mut rng), None);
    assert!(game.submit().is_some());
    assert_eq!(game.submit(), None);
}

#[test]
fn test_guess_fields_are_sanitized() {
    let (mut game, _rng) = new_game(5, 7);

    game.set_guess_field(HsbChannel::Hue, "400");
    assert_eq!(game.guess().hue, 360);
    game.set_guess_field(HsbChannel::Hue, "-5");
    assert_eq!(game.guess().hue, 0);
    game.set_guess_field(HsbChannel::Saturation, "abc");
    assert_eq!(game.guess().saturation, 0);
    game.set_guess_field(HsbChannel::Brightness, "42%");
    assert_eq!(game.guess().brightness, 42);

    game.adjust_guess_field(HsbChannel::Brightness, 100);
    assert_eq!(game.guess().brightness, 100);
}

#[test]
fn test_generated_colors_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..500 {
        for mode in ColorMode::ALL {
            let color = generate_color(mode, &mut rng);
            assert!(color.saturation <= 100);
            assert!(color.brightness <= 100);
            match mode {
                ColorMode::Normal => assert!(color.hue < 360),
                ColorMode::RedBlue => assert!(color.hue == 0 || color.hue >= 240),
                ColorMode::GreenBlue => assert!((120..240).contains(&color.hue)),
            }
        }
    }
}

#[test]
fn test_score_is_symmetric_over_random_pairs() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..200 {
        let a = generate_color(ColorMode::Normal, &mut rng);
        let b = generate_color(ColorMode::Normal, &mut rng);
        assert_eq!(score(&a, &b), score(&b, &a));
        assert_eq!(score(&a, &a), 100);
    }
}
