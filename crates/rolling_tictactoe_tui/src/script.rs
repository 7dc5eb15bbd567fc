//! Headless play: apply a list of cell indices and report each result.

use crate::app::describe;
use anyhow::Result;
use rolling_tictactoe::{GameEngine, GameStatus, MoveResult, Player};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};

/// One JSON line of script output.
#[derive(Debug, Serialize)]
struct ScriptStep<'a> {
    step: usize,
    player: Player,
    index: usize,
    #[serde(flatten)]
    result: &'a MoveResult,
}

/// Plays `moves` on a fresh engine, writing one report per move.
///
/// Rejected moves are reported and skipped; only write failures are errors.
#[instrument(skip(out))]
pub fn run_script(moves: &[usize], json: bool, out: &mut impl Write) -> Result<GameStatus> {
    let mut engine = GameEngine::new();

    for (step, &index) in moves.iter().enumerate() {
        let player = engine.state().current_player();
        let result = engine.apply_move(index);

        if json {
            let line = ScriptStep {
                step: step + 1,
                player,
                index,
                result: &result,
            };
            serde_json::to_writer(&mut *out, &line)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}. {}", step + 1, describe(player, index, &result))?;
            if let Some(board) = result.board() {
                writeln!(out, "{}\n", board.display())?;
            }
        }
    }

    let status = engine.state().status();
    if !json {
        let summary = match status {
            GameStatus::InProgress => {
                format!("In progress, {} to move", engine.state().current_player())
            }
            GameStatus::Won(winner) => format!("{} wins", winner),
            GameStatus::Draw => "Draw".to_string(),
        };
        writeln!(out, "Result: {}", summary)?;
    }
    info!(?status, moves = moves.len(), "Script finished");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(moves: &[usize], json: bool) -> (GameStatus, String) {
        let mut out = Vec::new();
        let status = run_script(moves, json, &mut out).expect("writing to a Vec succeeds");
        (status, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn test_text_report_for_a_win() {
        let (status, text) = run(&[0, 3, 1, 4, 2], false);
        assert_eq!(status, GameStatus::Won(Player::X));
        assert!(text.starts_with("1. X played Top-left\nX|2|3\n"));
        assert!(text.contains("5. X played Top-right. X wins!"));
        assert!(text.ends_with("Result: X wins\n"));
    }

    #[test]
    fn test_rejections_are_reported_not_fatal() {
        let (status, text) = run(&[4, 4, 12], false);
        assert_eq!(status, GameStatus::InProgress);
        assert!(text.contains("2. Move rejected: Center is already occupied"));
        assert!(text.contains("3. Move rejected: Cell index 12 is out of range (must be 0-8)"));
        assert!(text.ends_with("Result: In progress, O to move\n"));
    }

    #[test]
    fn test_json_lines() {
        let (_, text) = run(&[0, 3, 1, 7, 5, 8, 6], true);
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("valid json"))
            .collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0]["outcome"], "Applied");
        assert_eq!(lines[0]["player"], "X");
        assert_eq!(lines[6]["step"], 7);
        assert_eq!(lines[6]["evicted"], serde_json::json!([0]));
    }
}
