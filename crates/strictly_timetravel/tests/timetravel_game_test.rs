//! Tests for the time-travel game controller.

use strictly_timetravel::{
    Board, Game, GameStatus, InvalidStep, Move, MoveOrder, MoveOutcome, MoveRejection, Player,
    Position, Snapshot, Square,
};

fn play_all(game: &mut Game, cells: &[usize]) {
    for &cell in cells {
        let outcome = game.apply_move(cell);
        assert!(outcome.is_accepted(), "cell {cell} rejected: {outcome:?}");
    }
}

#[test]
fn test_top_row_win() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 4, 1, 7, 2]);

    let snapshot = game.current_snapshot();
    let state = snapshot.winning_state().expect("X completed the top row");
    assert_eq!(state.winner(), Player::X);
    assert_eq!(
        state.line(),
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
    assert_eq!(game.status(), GameStatus::Winner(Player::X));
    assert_eq!(game.status().to_string(), "winner = X");
}

#[test]
fn test_full_board_draw() {
    let mut game = Game::new();
    // X: 0, 1, 5, 6, 8  O: 2, 3, 4, 7
    play_all(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(game.cursor(), 9);
    assert_eq!(game.current_snapshot().winning_state(), None);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "draw");
}

#[test]
fn test_jump_to_start() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 4, 1, 7, 2]);

    game.jump_to(0).expect("step 0 is always recorded");
    let snapshot = game.current_snapshot();
    assert_eq!(snapshot.board(), &Board::new());
    assert_eq!(snapshot.winning_state(), None);
    assert_eq!(game.status().to_string(), "next player = X");
}

#[test]
fn test_move_on_occupied_square_is_noop() {
    let mut game = Game::new();
    play_all(&mut game, &[4]);
    let before = game.current_snapshot();

    assert_eq!(
        game.apply_move(4),
        MoveOutcome::Rejected(MoveRejection::SquareOccupied(Position::Center))
    );
    assert_eq!(game.current_snapshot(), before);
    assert_eq!(game.len(), 2);
}

#[test]
fn test_move_after_win_is_noop() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 4, 1, 7, 2]);
    let before = game.current_snapshot();

    assert_eq!(
        game.apply_move(8),
        MoveOutcome::Rejected(MoveRejection::GameOver(Player::X))
    );
    assert_eq!(game.current_snapshot(), before);
    assert_eq!(game.len(), 6);
}

#[test]
fn test_move_after_jump_discards_future() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 4, 1, 7]);
    let discarded: Vec<_> = game.history().entries()[2..].to_vec();

    game.jump_to(1).expect("recorded step");
    // O to move at step 1.
    assert_eq!(
        game.apply_move(8),
        MoveOutcome::Accepted(Move::new(Player::O, Position::BottomRight))
    );

    assert_eq!(game.len(), 3);
    assert_eq!(game.cursor(), 2);
    assert!(game.is_at_tip());
    for old in &discarded {
        assert!(!game.history().entries().contains(old));
    }
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_rejected_move_after_jump_keeps_future() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 4, 1]);
    game.jump_to(1).expect("recorded step");

    let outcome = game.apply_move(0);
    assert!(!outcome.is_accepted());
    assert_eq!(game.len(), 4);
    assert_eq!(game.cursor(), 1);
}

#[test]
fn test_jump_to_win_then_back_allows_play() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 4, 1, 7, 2]);

    game.jump_to(4).expect("recorded step");
    assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
    assert!(game.apply_move(8).is_accepted());
    assert_eq!(game.status(), GameStatus::NextPlayer(Player::O));
    assert_eq!(game.len(), 6);
}

#[test]
fn test_jump_out_of_range_is_reported() {
    let mut game = Game::new();
    play_all(&mut game, &[0]);
    let err = game.jump_to(5).expect_err("only two entries");
    assert_eq!(err, InvalidStep { step: 5, len: 2 });
    assert_eq!(
        err.to_string(),
        "Step 5 is out of range for a history of 2 entries"
    );
    assert_eq!(game.cursor(), 1);
}

#[test]
fn test_history_descriptions() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 2]);
    assert_eq!(
        game.history_descriptions(),
        vec![
            "Go to game start".to_string(),
            "Go to move #1 : Player X played row - 2 col - 2".to_string(),
            "Go to move #2 : Player O played row - 1 col - 3".to_string(),
        ]
    );
}

#[test]
fn test_descriptions_survive_time_travel() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 2, 6]);
    game.jump_to(0).expect("recorded step");

    assert_eq!(game.history_descriptions().len(), 4);
    let list = game.move_list(MoveOrder::Descending);
    assert_eq!(list.first().map(|item| item.step), Some(3));
    assert!(list.last().is_some_and(|item| item.is_current));
}

#[test]
fn test_old_snapshot_unaffected_by_later_moves() {
    let mut game = Game::new();
    play_all(&mut game, &[4]);
    let held: Snapshot = game.current_snapshot();

    play_all(&mut game, &[0, 8]);
    assert_eq!(held.board().occupied(), 1);
    assert_eq!(held.board().get(Position::TopLeft), Square::Empty);
}

#[test]
fn test_snapshot_serializes_for_the_view() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 4, 1, 7, 2]);

    let json = serde_json::to_value(game.current_snapshot()).expect("serializable");
    assert_eq!(json["cursor"], 5);
    assert_eq!(json["winning_state"]["winner"], "X");
    assert_eq!(
        json["winning_state"]["line"],
        serde_json::json!(["TopLeft", "TopCenter", "TopRight"])
    );
}
