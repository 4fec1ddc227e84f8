//! Tests for move history, time travel and status reporting.

use tictactoe_core::{
    Board, GameState, GameStatus, HistoryEntry, Mark, MoveOutcome, Position, Square,
};

fn pos(i: usize) -> Position {
    Position::from_index(i).expect("index in range")
}

fn play(game: &mut GameState, moves: &[usize]) {
    for &i in moves {
        game.apply_move(pos(i));
    }
}

#[test]
fn test_top_row_win() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 3, 2]);

    assert_eq!(game.status(), GameStatus::Winner(Mark::X));
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_jump_back_to_start() {
    let mut game = GameState::new();
    game.apply_move(Position::TopLeft);
    game.jump_to(0);

    assert_eq!(*game.current_board(), Board::new());
    assert_eq!(game.status().to_string(), "Next player: X");
    // Future entry is kept until a new move is made.
    assert_eq!(game.history_len(), 2);
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut game = GameState::new();
    game.apply_move(Position::Center);
    let before = game.clone();

    let outcome = game.apply_move(Position::Center);

    assert_eq!(outcome, MoveOutcome::IgnoredOccupied(Position::Center));
    assert_eq!(game, before);
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 3, 2]);
    let before = game.clone();

    for i in [5, 6, 7, 8] {
        assert_eq!(game.apply_move(pos(i)), MoveOutcome::IgnoredGameOver(Mark::X));
    }
    assert_eq!(game, before);
}

#[test]
fn test_move_advances_step_and_toggles_mark() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 2]);
    game.jump_to(1);
    assert_eq!(game.next_mark(), Mark::O);

    let outcome = game.apply_move(Position::Center);

    assert!(outcome.is_placed());
    assert_eq!(game.step(), 2);
    assert_eq!(game.next_mark(), Mark::X);
    assert_eq!(
        game.current_board().get(Position::Center),
        Square::Occupied(Mark::O)
    );
}

#[test]
fn test_jump_then_move_truncates_future() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 2, 3, 4]);
    assert_eq!(game.history_len(), 6);

    game.jump_to(2);
    game.apply_move(Position::BottomRight);

    assert_eq!(game.history_len(), 4);
    assert_eq!(game.step(), 3);
    let board = game.current_board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(board.get(Position::TopCenter), Square::Occupied(Mark::O));
    assert_eq!(board.get(Position::BottomRight), Square::Occupied(Mark::X));
    assert!(board.is_empty(Position::TopRight));
    assert!(board.is_empty(Position::MiddleLeft));
}

#[test]
fn test_jump_to_won_position_and_back() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 3, 2]);

    game.jump_to(4);
    assert_eq!(game.status(), GameStatus::NextPlayer(Mark::X));

    game.jump_to(5);
    assert_eq!(game.status(), GameStatus::Winner(Mark::X));
}

#[test]
fn test_replaying_from_a_won_past_is_allowed() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 3, 2]);

    game.jump_to(4);
    let outcome = game.apply_move(Position::BottomRight);

    assert!(outcome.is_placed());
    assert_eq!(game.history_len(), 6);
    assert_eq!(game.status(), GameStatus::NextPlayer(Mark::O));
}

#[test]
fn test_first_entry_always_empty() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0, 8]);
    game.jump_to(0);
    play(&mut game, &[2, 6]);

    assert_eq!(*game.history()[0].board(), Board::new());
    assert_eq!(game.history()[0].placed(), None);
}

#[test]
fn test_reads_are_idempotent() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4]);

    assert_eq!(game.status(), game.status());
    assert_eq!(game.current_board(), game.current_board());
}

#[test]
fn test_history_labels() {
    let mut game = GameState::new();
    play(&mut game, &[2]);

    assert_eq!(HistoryEntry::label(0), "Game start");
    assert_eq!(HistoryEntry::label(3), "Move #3");
    assert_eq!(game.history()[0].describe(0), "Game start");
    assert_eq!(game.history()[1].describe(1), "Move #1 (X at Top-right)");
}

#[test]
fn test_state_serializes_history() {
    let mut game = GameState::new();
    play(&mut game, &[4]);

    let json = serde_json::to_value(&game).expect("serialize");
    assert_eq!(json["step"], 1);
    assert_eq!(json["history"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["history"][1]["placed"]["mark"], "X");
    assert_eq!(json["history"][1]["placed"]["position"], "Center");
}
