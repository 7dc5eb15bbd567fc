//! Stateless UI rendering.

use crate::app::App;
use crate::config::TuiConfig;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use rolling_tictactoe::{Player, Position, Square};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const HISTORY_WIDTH: u16 = 30;

/// Renders the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App, config: &TuiConfig) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title
            Constraint::Length(3),            // Status label
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(1),            // Help
        ])
        .split(area);

    let title = Paragraph::new(config.title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(app.status_label())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    if *config.show_history() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(BOARD_WIDTH), Constraint::Length(HISTORY_WIDTH)])
            .split(chunks[2]);
        draw_board(frame, columns[0], app);
        draw_history(frame, columns[1], app);
    } else {
        draw_board(frame, chunks[2], app);
    }

    let message = Paragraph::new(app.message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, chunks[3]);

    let help = Paragraph::new("arrows move | enter/space or 1-9 place | r reset | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if let Some(notice) = app.notice() {
        draw_notice(frame, area, notice);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], app, positions);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (col, &pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], app, pos);
        if col < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

/// Style for a cell, layered: mark colour, disabled, rolling-off, highlight, cursor.
pub fn cell_style(app: &App, pos: Position) -> Style {
    let square = app.engine().state().board().at(pos);
    let mut style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    if square == Square::Empty && !app.is_enabled(pos) {
        style = style.add_modifier(Modifier::DIM);
    }
    if app.rolls_off_next(pos) {
        style = style.add_modifier(Modifier::DIM | Modifier::ITALIC);
    }
    if app.is_highlighted(pos) {
        style = style.bg(Color::LightGreen).fg(Color::Green);
    }
    if pos == app.cursor() && app.notice().is_none() {
        style = style.bg(Color::White).fg(Color::Black);
    }
    style
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let symbol = match app.engine().state().board().at(pos) {
        Square::Empty => format!("{}", pos.to_index() + 1),
        Square::Occupied(player) => player.to_string(),
    };
    let style = cell_style(app, pos);

    let mut lines = vec![Line::default(); CELL_HEIGHT as usize];
    lines[1] = Line::from(Span::styled(format!("   {}   ", symbol), style));
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let history = app.engine().state().history();
    let lines: Vec<Line> = [Player::X, Player::O]
        .into_iter()
        .map(|player| {
            let cells: Vec<String> = history
                .marks(player)
                .iter()
                .map(|&index| (index + 1).to_string())
                .collect();
            Line::from(format!("{}: {}", player, cells.join(" → ")))
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("Oldest → newest")
            .borders(Borders::ALL),
    );
    frame.render_widget(panel, center_rect(area, HISTORY_WIDTH, 4));
}

fn draw_notice(frame: &mut Frame, area: Rect, notice: &str) {
    let popup = center_rect(area, 30, 5);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(Span::styled(
            notice.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().title("Game Over").borders(Borders::ALL));
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App, config: &TuiConfig) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 26)).expect("test terminal");
        terminal
            .draw(|frame| draw(frame, app, config))
            .expect("draw succeeds");
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_turn_and_numbered_cells() {
        let screen = render(&App::new(), &TuiConfig::default());
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains("Turn: X"));
        assert!(screen.contains('9'));
        assert!(screen.contains("Oldest → newest"));
    }

    #[test]
    fn test_renders_game_over_popup() {
        let mut app = App::new();
        for c in "14253".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        let screen = render(&app, &TuiConfig::default());
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("X wins!"));
        assert!(screen.contains("Game Over"));
    }

    #[test]
    fn test_history_panel_can_be_hidden() {
        let config: TuiConfig = toml::from_str("show_history = false").expect("valid config");
        let screen = render(&App::new(), &config);
        assert!(!screen.contains("Oldest"));
    }

    #[test]
    fn test_winning_cells_are_highlighted() {
        let mut app = App::new();
        for c in "14253".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        assert_eq!(cell_style(&app, Position::TopLeft).bg, Some(Color::LightGreen));
        assert_eq!(cell_style(&app, Position::Center).bg, None);
    }
}
