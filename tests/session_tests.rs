//! Integration tests for the phase state machine and the full game loop

use shadowpile::core::{GameSession, Transition, Tuning};
use shadowpile::types::{Key, Phase, FALL_INTERVAL_MS, FLOOR_BONUS, TICK_MS};

fn no_growth_tuning() -> Tuning {
    Tuning {
        growth_interval_ms: u32::MAX,
        ..Tuning::default()
    }
}

#[test]
fn test_full_transition_table() {
    let mut session = GameSession::new(9);
    assert_eq!(session.phase(), Phase::Menu);

    // menu -> game
    assert_eq!(session.update(Some(Key::Return), 0), Transition::EnterGame);
    assert_eq!(session.phase(), Phase::Game);

    // game -> menu via quit key
    assert_eq!(
        session.update(Some(Key::Escape), TICK_MS),
        Transition::ReturnToMenu { game_over: false }
    );
    assert_eq!(session.phase(), Phase::Menu);

    // menu -> credits
    session.update(Some(Key::Down), 0);
    assert_eq!(
        session.update(Some(Key::Space), 0),
        Transition::EnterCredits
    );
    assert_eq!(session.phase(), Phase::Credits);

    // credits -> menu
    assert_eq!(
        session.update(Some(Key::Q), 0),
        Transition::ReturnToMenu { game_over: false }
    );
    assert_eq!(session.phase(), Phase::Menu);

    // menu -> exit
    session.update(Some(Key::Down), 0);
    session.update(Some(Key::Down), 0);
    assert_eq!(
        session.update(Some(Key::Return), 0),
        Transition::ExitRequested
    );
}

#[test]
fn test_unrecognized_phase_keys_are_ignored() {
    let mut session = GameSession::new(9);
    // Quit keys do nothing on the menu.
    assert_eq!(session.update(Some(Key::Q), 0), Transition::None);
    assert_eq!(session.update(Some(Key::Escape), 0), Transition::None);
    assert_eq!(session.phase(), Phase::Menu);

    // Navigation keys do nothing in credits.
    session.update(Some(Key::Down), 0);
    session.update(Some(Key::Return), 0);
    assert_eq!(session.phase(), Phase::Credits);
    assert_eq!(session.update(Some(Key::Left), 0), Transition::None);
    assert_eq!(session.phase(), Phase::Credits);
}

#[test]
fn test_score_is_monotonic_within_a_game() {
    let mut session = GameSession::with_tuning(31, no_growth_tuning());
    session.update(Some(Key::Return), 0);

    let mut last = session.score();
    for _ in 0..300 {
        session.update(None, FALL_INTERVAL_MS);
        assert!(session.score() >= last);
        last = session.score();
        if session.phase() != Phase::Game {
            break;
        }
    }
    // With growth disabled, melds happen and the score has moved.
    assert!(last >= FLOOR_BONUS);
}

#[test]
fn test_restart_resets_score_and_pile() {
    let mut session = GameSession::with_tuning(31, no_growth_tuning());
    session.update(Some(Key::Return), 0);
    for _ in 0..40 {
        session.update(None, FALL_INTERVAL_MS);
    }
    assert!(session.score() > 0);

    session.update(Some(Key::Q), TICK_MS);
    let menu_score = session.score();
    assert!(menu_score > 0, "score is kept for display on the menu");

    session.update(Some(Key::Return), 0);
    assert_eq!(session.score(), 0);
    assert!(session.pile().is_empty());
    assert!(session.piece().is_some());
}

#[test]
fn test_session_runs_to_game_over() {
    // Default tuning, fixed seed, no input: the pile rises faster than one
    // piece can clear it, so the session must eventually top out and return
    // to the menu.
    let mut session = GameSession::new(1234);
    session.update(Some(Key::Return), 0);

    let mut game_over = false;
    // Simulate up to 20 minutes of frames.
    for _ in 0..(20 * 60 * 1000 / TICK_MS) {
        match session.update(None, TICK_MS) {
            Transition::ReturnToMenu { game_over: true } => {
                game_over = true;
                break;
            }
            Transition::None => {}
            other => panic!("unexpected transition {:?}", other),
        }
    }
    assert!(game_over);
    assert_eq!(session.phase(), Phase::Menu);
    assert!(session.piece().is_none());
    assert!(session.pile().is_empty());
}

#[test]
fn test_exactly_one_piece_during_game_none_otherwise() {
    let mut session = GameSession::new(5);
    assert!(session.piece().is_none());

    session.update(Some(Key::Return), 0);
    for _ in 0..200 {
        session.update(None, TICK_MS * 4);
        if session.phase() != Phase::Game {
            break;
        }
        assert!(session.piece().is_some());
    }

    session.update(Some(Key::Escape), TICK_MS);
    assert!(session.piece().is_none());
}
