//! Tests for the turn engine.

use std::sync::{Arc, Mutex};
use tictactoe::{
    Game, GameEvent, GameMode, GameStatus, MoveError, MoveOutcome, Player, Position, Square,
    WinLine,
};

fn play(moves: &[usize]) -> Game {
    let mut game = Game::new(GameMode::HumanVsHuman);
    for index in moves {
        game.apply_move(*index).expect("Valid move");
    }
    game
}

fn recorded(game: &mut Game) -> Arc<Mutex<Vec<GameEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    game.subscribe(move |event: &GameEvent| {
        sink.lock().expect("lock").push(event.clone());
    });
    events
}

#[test]
fn test_top_row_win() {
    let game = play(&[0, 3, 1, 4, 2]);
    assert_eq!(
        game.status(),
        &GameStatus::Won {
            winner: Player::X,
            line: WinLine::ALL[0],
        }
    );
    assert_eq!(game.status().win_line().map(|l| l.indices()), Some([0, 1, 2]));
}

#[test]
fn test_full_board_without_line_is_tie() {
    let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.status(), &GameStatus::Tied);
    assert!(game.board().empty_positions().is_empty());
}

#[test]
fn test_win_on_last_cell_beats_tie() {
    // X: 0 1 4 5 8, O: 2 3 6 7. X's last move at 8 fills the board
    // and completes the main diagonal.
    let mut game = play(&[0, 2, 1, 3, 4, 6, 5, 7]);
    assert!(game.status().is_active());

    let outcome = game.apply_move(8).expect("Valid move");
    let line = WinLine::ALL[6];
    assert_eq!(outcome, MoveOutcome::Won { winner: Player::X, line });
    assert_eq!(game.status(), &GameStatus::Won { winner: Player::X, line });
    assert!(game.board().empty_positions().is_empty());
}

#[test]
fn test_occupied_square_rejected_without_change() {
    let mut game = play(&[4]);
    let events = recorded(&mut game);
    let before = game.state().clone();

    let result = game.apply_move(4);

    assert_eq!(
        result,
        Err(MoveError::SquareOccupied {
            position: Position::Center
        })
    );
    assert_eq!(game.state(), &before);
    assert!(events.lock().expect("lock").is_empty());
}

#[test]
fn test_out_of_range_rejected() {
    let mut game = Game::new(GameMode::HumanVsHuman);
    assert_eq!(game.apply_move(9), Err(MoveError::OutOfRange { index: 9 }));
    assert_eq!(game.board().empty_positions().len(), 9);
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    let before = game.state().clone();

    for index in [5, 6, 7, 8] {
        assert_eq!(game.apply_move(index), Err(MoveError::GameOver));
    }
    assert_eq!(game.state(), &before);
}

#[test]
fn test_players_alternate_and_counts_stay_balanced() {
    let mut game = Game::new(GameMode::HumanVsHuman);
    let mut expected = Player::X;

    for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        if !game.status().is_active() {
            break;
        }
        assert_eq!(game.current_player(), expected);
        game.apply_move(index).expect("Valid move");
        expected = expected.opponent();

        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        assert!(x == o || x == o + 1, "x={x} o={o}");
    }
}

#[test]
fn test_reset_restores_fresh_game() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    let generation = game.generation();

    game.reset(GameMode::HumanVsComputer);

    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.status(), &GameStatus::Active);
    assert_eq!(game.mode(), GameMode::HumanVsComputer);
    assert_eq!(game.generation(), generation + 1);
}

#[test]
fn test_reset_emits_cleared_then_state() {
    let mut game = play(&[0, 1]);
    let events = recorded(&mut game);

    game.reset(GameMode::HumanVsHuman);

    let events = events.lock().expect("lock");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], GameEvent::Cleared { generation: 1 });
    assert!(matches!(&events[1], GameEvent::StateChanged(state) if state.board().empty_positions().len() == 9));
}

#[test]
fn test_accepted_move_notifies_observers() {
    let mut game = Game::new(GameMode::HumanVsHuman);
    let events = recorded(&mut game);

    game.apply_move(4).expect("Valid move");

    let events = events.lock().expect("lock");
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        GameEvent::MoveApplied(mv) if mv.player == Player::X && mv.position == Position::Center
    ));
    match &events[1] {
        GameEvent::StateChanged(state) => {
            assert_eq!(state.current_player(), Player::O);
            assert_eq!(state.status_message(), "Player O's turn");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn test_computer_turn_flagged_only_against_computer() {
    let mut game = Game::new(GameMode::HumanVsComputer);
    let events = recorded(&mut game);

    let outcome = game.apply_move(0).expect("Valid move");
    assert_eq!(
        outcome,
        MoveOutcome::Continue {
            next: Player::O,
            computer_to_move: true
        }
    );
    assert!(game.is_computer_turn());
    assert_eq!(
        events.lock().expect("lock").last(),
        Some(&GameEvent::ComputerTurn { generation: 0 })
    );

    let outcome = game.apply_move(4).expect("Valid move");
    assert_eq!(
        outcome,
        MoveOutcome::Continue {
            next: Player::X,
            computer_to_move: false
        }
    );

    let mut hvh = Game::new(GameMode::HumanVsHuman);
    let outcome = hvh.apply_move(0).expect("Valid move");
    assert_eq!(
        outcome,
        MoveOutcome::Continue {
            next: Player::O,
            computer_to_move: false
        }
    );
}

#[test]
fn test_every_line_wins_for_either_player() {
    for line in WinLine::ALL {
        let spare: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|p| !line.contains(*p))
            .collect();
        let (a, b) = (spare[0], spare[1]);
        // Third off-line cell must not hand the loser a line of their own.
        let c = spare[2..]
            .iter()
            .copied()
            .find(|c| {
                !WinLine::ALL
                    .iter()
                    .any(|l| [a, b, *c].iter().all(|p| l.contains(*p)))
            })
            .expect("spare cell");
        let [l0, l1, l2] = line.positions();

        for winner in [Player::X, Player::O] {
            let order = match winner {
                Player::X => vec![l0, a, l1, b, l2],
                Player::O => vec![a, l0, b, l1, c, l2],
            };
            let mut game = Game::new(GameMode::HumanVsHuman);
            for pos in order {
                game.place(pos).expect("Valid move");
            }

            assert_eq!(
                game.status(),
                &GameStatus::Won { winner, line },
                "line {:?}",
                line.indices()
            );
        }
    }
}

#[test]
fn test_finished_snapshot_serializes_for_display() {
    let game = play(&[0, 3, 1, 4, 2]);

    let json = serde_json::to_value(game.state()).expect("serialize");
    assert_eq!(json["status"]["Won"]["winner"], "X");
    assert_eq!(
        json["status"]["Won"]["line"],
        serde_json::json!(["TopLeft", "TopCenter", "TopRight"])
    );

    let back: tictactoe::GameState = serde_json::from_value(json).expect("deserialize");
    assert_eq!(&back, game.state());
}
