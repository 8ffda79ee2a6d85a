//! Stateless UI rendering for the time-travel board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strictly_timetravel::{Player, Position, Snapshot, Square};

use super::app::App;

const BOARD_WIDTH: u16 = 17;
const BOARD_HEIGHT: u16 = 5;
const ROW_SEPARATOR: &str = "─────┼─────┼─────";

const HELP: &str = "arrows/1-9 move  enter play  j/k select  g jump  s sort  r restart  q quit";

/// Renders the whole screen from the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Timetravel - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, body[0], &app.game().current_snapshot(), app.cursor());
    draw_moves(frame, body[1], app);

    let status = match app.message() {
        Some(message) => format!("{}  ({})", app.game().status(), message),
        None => app.game().status().to_string(),
    };
    let status_color = if app.game().status().is_finished() {
        Color::Green
    } else {
        Color::Yellow
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position) {
    let finished = snapshot.status().is_finished();
    let grid = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        if row > 0 {
            lines.push(Line::styled(ROW_SEPARATOR, grid));
        }
        let mut spans = Vec::with_capacity(5);
        for (col, pos) in positions.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", grid));
            }
            spans.push(cell_span(snapshot, cursor, *pos, finished));
        }
        lines.push(Line::from(spans));
    }

    let [column] = Layout::horizontal([Constraint::Length(BOARD_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [board_area] = Layout::vertical([Constraint::Length(BOARD_HEIGHT)])
        .flex(Flex::Center)
        .areas(column);
    frame.render_widget(Paragraph::new(lines), board_area);
}

/// Empty cells are dimmed once the position can take no more moves.
fn cell_span(
    snapshot: &Snapshot,
    cursor: Position,
    pos: Position,
    finished: bool,
) -> Span<'static> {
    let mark = Style::default().add_modifier(Modifier::BOLD);
    let (symbol, mut style) = match snapshot.board().get(pos) {
        Square::Empty if finished => ("     ", Style::default().add_modifier(Modifier::DIM)),
        Square::Empty => ("     ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => ("  X  ", mark.fg(Color::Blue)),
        Square::Occupied(Player::O) => ("  O  ", mark.fg(Color::Red)),
    };

    if snapshot.is_highlighted(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .move_list()
        .into_iter()
        .map(|row| {
            let marker = if row.step == app.selected() { "> " } else { "  " };
            let style = if row.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(format!("{}{}", marker, row.description), style)))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(list, area);
}
