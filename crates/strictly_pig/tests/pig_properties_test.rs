//! Property tests for the Pig state machine.

use proptest::prelude::*;
use strictly_pig::{Action, GameState, ScriptedDice, Seat, TurnEvent, WINNING_THRESHOLD};

fn faces() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..=6, 1..60)
}

proptest! {
    #[test]
    fn turn_score_is_sum_since_last_switch(values in faces()) {
        let mut game = GameState::default();
        let mut dice = ScriptedDice::from_values(&values).unwrap();
        let mut expected = 0;
        let mut active = Seat::First;

        for &value in &values {
            let event = game.roll(&mut dice).unwrap();
            if value == 1 {
                expected = 0;
                active = active.opponent();
                prop_assert_eq!(event, TurnEvent::Busted { seat: active.opponent(), next: active });
            } else {
                expected += value;
            }
            prop_assert_eq!(game.current_turn_score(), expected);
            prop_assert_eq!(game.active_seat(), Some(active));
        }
    }

    #[test]
    fn hold_banks_exactly_the_turn_score(values in faces(), banked in 0u32..WINNING_THRESHOLD) {
        let mut game = GameState::default();
        if banked > 0 {
            // Bank a starting score for the first seat, then come back around.
            let mut setup = Vec::new();
            let mut left = banked;
            while left > 0 {
                let step = left.min(6).max(2);
                setup.push(step);
                left = left.saturating_sub(step);
            }
            let mut dice = ScriptedDice::from_values(&setup).unwrap();
            for _ in 0..setup.len() {
                game.roll(&mut dice).unwrap();
            }
            game.hold().unwrap();
            if !game.is_game_over() {
                game.hold().unwrap();
            }
        }
        prop_assume!(!game.is_game_over());
        let seat = game.active_seat().unwrap();

        let scoring: Vec<u32> = values.into_iter().filter(|&v| v != 1).collect();
        prop_assume!(!scoring.is_empty());
        let mut dice = ScriptedDice::from_values(&scoring).unwrap();
        for _ in 0..scoring.len() {
            game.roll(&mut dice).unwrap();
        }

        let before_banked = game.player(seat).banked_score();
        let turn = game.current_turn_score();
        let event = game.hold().unwrap();
        let after_banked = game.player(seat).banked_score();

        prop_assert_eq!(after_banked, before_banked + turn);
        prop_assert_eq!(game.current_turn_score(), 0);
        if after_banked >= WINNING_THRESHOLD {
            prop_assert_eq!(event, TurnEvent::Won { seat, banked: after_banked });
            prop_assert!(game.is_game_over());
            prop_assert!(game.player(seat).has_won());
            prop_assert!(!game.player(seat.opponent()).has_won());
        } else {
            prop_assert_eq!(game.active_seat(), Some(seat.opponent()));
        }
    }

    #[test]
    fn banked_scores_never_decrease(
        values in faces(),
        holds in prop::collection::vec(any::<bool>(), 1..60)
    ) {
        let mut game = GameState::default();
        let mut dice = ScriptedDice::from_values(&values).unwrap();
        let mut last = [0u32; 2];

        for hold in holds {
            let action = if hold { Action::Hold } else { Action::Roll };
            if game.apply(action, &mut dice).is_err() {
                prop_assert!(game.is_game_over());
                break;
            }
            for seat in [Seat::First, Seat::Second] {
                let score = game.player(seat).banked_score();
                prop_assert!(score >= last[seat.index()]);
                last[seat.index()] = score;
            }
        }
    }

    #[test]
    fn reset_restores_initial_state(
        values in faces(),
        holds in prop::collection::vec(any::<bool>(), 0..80)
    ) {
        let mut game = GameState::default();
        let mut dice = ScriptedDice::from_values(&values).unwrap();
        for hold in holds {
            let action = if hold { Action::Hold } else { Action::Roll };
            let _ = game.apply(action, &mut dice);
        }

        game.reset();
        prop_assert_eq!(&game, &GameState::default());
        game.reset();
        prop_assert_eq!(&game, &GameState::default());
    }
}
