//! End-to-end rounds through the engine.

use strictly_hangman::{
    ErrorKind, GameEngine, GameError, GameRules, Mark, Operation, OutcomeReason, Role,
    RoundConfig, RoundPhase, Seat,
};

/// Engine in `Guessing` with Ada picking `word`.
fn guessing(word: &str, budget: u8) -> GameEngine {
    let rules = GameRules::new(1, 15).expect("valid rules");
    let mut engine = GameEngine::with_rules(rules);
    engine
        .configure_players("Ada", "Grace", budget)
        .expect("Valid configuration");
    engine.select_picker(Some(Seat::First)).expect("Valid seat");
    engine.submit_word(word).expect("Valid word");
    engine
}

#[test]
fn test_guesser_completes_word() {
    let mut engine = guessing("CAT", 5);

    for guess in ["C", "A"] {
        let feedback = engine.submit_guess(guess).expect("Valid guess");
        assert_eq!(feedback.mark, Mark::Hit);
        assert!(feedback.outcome.is_none());
        assert_eq!(engine.phase(), RoundPhase::Guessing);
    }

    let feedback = engine.submit_guess("T").expect("Valid guess");
    assert_eq!(engine.phase(), RoundPhase::RoundOver);

    let outcome = feedback.outcome.expect("Final guess ends round");
    assert_eq!(outcome.reason(), OutcomeReason::WordCompleted);
    assert_eq!(outcome.winner_name(), "Grace");
    assert_eq!(outcome.loser_name(), "Ada");
    assert_eq!(outcome.revealed_word(), "CAT");
}

#[test]
fn test_picker_wins_when_budget_exhausted() {
    let mut engine = guessing("DOG", 1);

    let feedback = engine.submit_guess("Z").expect("Valid guess");
    assert_eq!(feedback.mark, Mark::Miss);
    assert_eq!(feedback.guesses_left, 0);
    assert_eq!(engine.phase(), RoundPhase::RoundOver);

    let outcome = engine.outcome().expect("Round is over");
    assert_eq!(outcome.reason(), OutcomeReason::ExhaustedGuesses);
    assert_eq!(outcome.winner_name(), "Ada");
    assert_eq!(outcome.detail(), "Grace is out of guesses. Ada WINS!");
}

#[test]
fn test_single_letter_word_too_short() {
    let mut engine = guessing("CAT", 5);
    engine.reset();
    engine.configure_players("Ada", "Grace", 5).unwrap();
    engine.select_picker(Some(Seat::Second)).unwrap();

    assert_eq!(
        engine.submit_word("A"),
        Err(GameError::WordTooShort { length: 1 })
    );
    assert_eq!(engine.phase(), RoundPhase::AwaitingWord);
}

#[test]
fn test_word_with_digit_rejected() {
    let mut engine = GameEngine::new();
    engine.configure_players("Ada", "Grace", 5).unwrap();
    engine.select_picker(Some(Seat::First)).unwrap();

    let err = engine.submit_word("CA7").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WordHasInvalidChars);
    assert_eq!(engine.phase(), RoundPhase::AwaitingWord);
}

#[test]
fn test_invalid_guesses_rejected() {
    let mut engine = guessing("CAT", 5);

    let err = engine.submit_guess("ab").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidGuess);

    engine.submit_guess("c").expect("Valid guess");
    let err = engine.submit_guess("c").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidGuess);

    // Case-insensitive repeat.
    let err = engine.submit_guess("C").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidGuess);
}

#[test]
fn test_budget_exhausts_on_nth_miss() {
    let mut engine = guessing("QUIZ", 5);

    for (spent, guess) in ["A", "B", "C", "D"].into_iter().enumerate() {
        engine.submit_guess(guess).unwrap();
        assert_eq!(engine.guesses_left(), Some(5 - spent as u8 - 1));
        assert_eq!(engine.phase(), RoundPhase::Guessing);
    }

    engine.submit_guess("E").unwrap();
    assert_eq!(engine.guesses_left(), Some(0));
    assert_eq!(engine.phase(), RoundPhase::RoundOver);
}

#[test]
fn test_hits_never_spend_budget() {
    let mut engine = guessing("MISSISSIPPI", 5);
    for guess in ["M", "I", "S"] {
        engine.submit_guess(guess).unwrap();
    }
    assert_eq!(engine.guesses_left(), Some(5));
    assert_eq!(engine.snapshot().blank(), "M I S S I S S I _ _ I");
}

#[test]
fn test_repeated_letter_reveals_all_positions() {
    let mut engine = guessing("BANANA", 5);
    let feedback = engine.submit_guess("n").unwrap();
    assert_eq!(feedback.revealed, 2);
    assert_eq!(engine.snapshot().blank(), "_ _ N _ N _");
}

#[test]
fn test_reveals_are_monotonic() {
    let mut engine = guessing("RUSTACEAN", 15);
    let mut hidden = engine.snapshot().blank().matches('_').count();

    for guess in ["Z", "A", "Q", "R", "N", "X", "U", "S", "T", "C", "E"] {
        engine.submit_guess(guess).unwrap();
        let now = engine.snapshot().blank().matches('_').count();
        assert!(now <= hidden, "Blank gained hidden cells after {guess}");
        hidden = now;
    }

    assert_eq!(hidden, 0);
    assert_eq!(engine.phase(), RoundPhase::RoundOver);
}

#[test]
fn test_wrong_phase_rejections() {
    let mut engine = GameEngine::new();

    assert_eq!(
        engine.submit_guess("a"),
        Err(GameError::WrongPhase {
            operation: Operation::SubmitGuess,
            phase: RoundPhase::AwaitingPlayers,
        })
    );
    assert_eq!(
        engine.select_picker(Some(Seat::First)).unwrap_err().kind(),
        ErrorKind::WrongPhase
    );

    engine.configure_players("Ada", "Grace", 5).unwrap();
    assert_eq!(
        engine.configure_players("Ada", "Grace", 5).unwrap_err().kind(),
        ErrorKind::WrongPhase
    );
    assert_eq!(
        engine.submit_word("cat").unwrap_err().kind(),
        ErrorKind::WrongPhase
    );
}

#[test]
fn test_wrong_phase_checked_before_input() {
    let mut engine = GameEngine::new();
    // Invalid input, but the phase is wrong first.
    assert_eq!(
        engine.submit_word("A").unwrap_err().kind(),
        ErrorKind::WrongPhase
    );
}

#[test]
fn test_no_operations_after_round_over() {
    let mut engine = guessing("OX", 5);
    engine.submit_guess("O").unwrap();
    engine.submit_guess("X").unwrap();

    let before = engine.round().clone();
    assert!(engine.submit_guess("A").is_err());
    assert!(engine.submit_word("CAT").is_err());
    assert!(engine.select_picker(Some(Seat::First)).is_err());
    assert!(engine.configure_players("Ada", "Grace", 5).is_err());
    assert_eq!(engine.round(), &before);
}

#[test]
fn test_budget_out_of_range() {
    let mut engine = GameEngine::new();
    for budget in [0, 4, 16, 255] {
        assert_eq!(
            engine.configure_players("Ada", "Grace", budget),
            Err(GameError::InvalidConfig {
                budget,
                min: 5,
                max: 15
            })
        );
        assert_eq!(engine.phase(), RoundPhase::AwaitingPlayers);
    }
    assert!(engine.configure_players("Ada", "Grace", 15).is_ok());
}

#[test]
fn test_no_picker_selected() {
    let mut engine = GameEngine::new();
    engine.configure_players("Ada", "Grace", 5).unwrap();
    assert_eq!(engine.select_picker(None), Err(GameError::NoSelection));
    assert_eq!(engine.select_picker(Seat::from_index(2)), Err(GameError::NoSelection));
    assert_eq!(engine.phase(), RoundPhase::AwaitingPickerSelection);
}

#[test]
fn test_roles_are_exclusive() {
    for picker in Seat::ALL {
        let mut engine = GameEngine::new();
        engine.configure_players("Ada", "Grace", 5).unwrap();
        engine.select_picker(Some(picker)).unwrap();

        assert_eq!(engine.role_of(picker), Some(Role::Picker));
        assert_eq!(engine.role_of(picker.other()), Some(Role::Guesser));
        assert_ne!(engine.picker(), engine.guesser());
    }
}

#[test]
fn test_reset_round_trip() {
    let mut engine = guessing("CAT", 5);
    engine.submit_guess("Z").unwrap();

    engine.reset();
    assert_eq!(engine.phase(), RoundPhase::AwaitingPlayers);
    assert!(engine.picker().is_none());
    assert!(engine.outcome().is_none());

    engine
        .configure(&RoundConfig::new("Linus", "Ken", 7))
        .unwrap();
    engine.select_picker(Some(Seat::Second)).unwrap();
    engine.submit_word("unix").unwrap();
    assert_eq!(engine.guesses_left(), Some(7));
    assert_eq!(engine.picker().map(|p| p.name().as_str()), Some("Ken"));
    assert_eq!(engine.snapshot().guessed(), "");
}

#[test]
fn test_reset_from_every_phase() {
    let mut engine = GameEngine::new();
    engine.reset();
    assert_eq!(engine.phase(), RoundPhase::AwaitingPlayers);

    engine.configure_players("", "", 5).unwrap();
    engine.reset();
    assert_eq!(engine.phase(), RoundPhase::AwaitingPlayers);

    engine.configure_players("", "", 5).unwrap();
    engine.select_picker(Some(Seat::First)).unwrap();
    engine.reset();
    assert_eq!(engine.phase(), RoundPhase::AwaitingPlayers);
}

#[test]
fn test_rejected_operations_leave_state_unchanged() {
    let mut engine = guessing("CAT", 5);
    engine.submit_guess("Q").unwrap();
    let before = engine.round().clone();

    for raw in ["", "QQ", "1", " ", "q"] {
        assert!(engine.submit_guess(raw).is_err());
        assert_eq!(engine.round(), &before);
    }
}
