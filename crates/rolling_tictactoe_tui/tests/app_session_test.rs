//! Drives the app through a full session the way the event loop does.

use crossterm::event::KeyCode;
use rolling_tictactoe::{GameStatus, Player, Position, Square};
use rolling_tictactoe_tui::{App, Flow};

fn keys(app: &mut App, codes: &[KeyCode]) -> Flow {
    codes
        .iter()
        .map(|&code| app.handle_key(code))
        .last()
        .unwrap_or(Flow::Continue)
}

#[test]
fn test_cursor_session_to_a_column_win_then_reset() {
    let mut app = App::new();
    use KeyCode::*;

    // X: Center, O: Top-left, X: Top-center, O: Top-right, X: Bottom-center.
    keys(&mut app, &[Enter, Up, Left, Enter, Right, Enter, Right, Enter]);
    keys(&mut app, &[Down, Down, Left, Char(' ')]);

    let state = app.engine().state();
    assert_eq!(state.status(), GameStatus::Won(Player::X));
    assert_eq!(state.board().at(Position::BottomCenter), Square::Occupied(Player::X));
    assert_eq!(app.engine().winning_line(), Some([1, 4, 7]));
    assert_eq!(app.notice(), Some("X wins!"));

    // Dismiss the notice, then reset.
    keys(&mut app, &[Char('x'), Char('r')]);
    assert_eq!(app.status_label(), "Turn: X");
    assert!(app.engine().state().board().squares().iter().all(|s| *s == Square::Empty));

    assert_eq!(keys(&mut app, &[Esc]), Flow::Quit);
}

#[test]
fn test_long_game_keeps_at_most_three_marks_each() {
    let mut app = App::new();
    for c in "123546879123".chars() {
        app.handle_key(KeyCode::Char(c));
        let state = app.engine().state();
        if state.status().is_terminal() {
            break;
        }
        assert!(state.board().count(Player::X) <= 3);
        assert!(state.board().count(Player::O) <= 3);
    }
}
