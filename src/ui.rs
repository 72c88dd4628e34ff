#![allow(
    // Allow truncation when casting from usize to u16 since board coordinates are always small
    clippy::cast_possible_truncation
)]

use std::time::Duration;

use log::error;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::board::Board;
use crate::components::{Bonus, GameState, Position};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::presenter::Presenter;
use crate::systems::apply_cascade;

// Each cell is 4 characters wide and 2 tall to look roughly square
pub const CELL_WIDTH: u16 = 4;
pub const CELL_HEIGHT: u16 = 2;

const BOARD_BLOCK_WIDTH: u16 = BOARD_WIDTH as u16 * CELL_WIDTH + 2; // +2 for borders
const BOARD_BLOCK_HEIGHT: u16 = BOARD_HEIGHT as u16 * CELL_HEIGHT + 2;
const TITLE_HEIGHT: u16 = 2;
const MIN_INFO_WIDTH: u16 = 24;

/// Smallest terminal the game can be drawn in.
#[must_use]
pub fn minimum_size() -> (u16, u16) {
    (
        BOARD_BLOCK_WIDTH + MIN_INFO_WIDTH,
        BOARD_BLOCK_HEIGHT + TITLE_HEIGHT,
    )
}

/// True when `area` is large enough to show the board and the info panel.
#[must_use]
pub fn fits(area: Rect) -> bool {
    let (min_width, min_height) = minimum_size();
    area.width >= min_width && area.height >= min_height
}

/// Area of the bordered board block inside the frame. Shared by drawing and click
/// translation so both agree on where every cell is.
#[must_use]
pub fn board_area(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + TITLE_HEIGHT,
        width: BOARD_BLOCK_WIDTH.min(area.width),
        height: BOARD_BLOCK_HEIGHT.min(area.height.saturating_sub(TITLE_HEIGHT)),
    }
}

/// Maps a terminal position (as reported by a mouse event) to the board cell under it.
#[must_use]
pub fn cell_at(board_area: Rect, column: u16, row: u16) -> Option<Position> {
    let inner = Block::default().borders(Borders::ALL).inner(board_area);
    if column < inner.left() || row < inner.top() {
        return None;
    }

    let position = Position::new(
        usize::from((column - inner.left()) / CELL_WIDTH),
        usize::from((row - inner.top()) / CELL_HEIGHT),
    );
    position.in_bounds().then_some(position)
}

/// Board cell under a click on a frame of `frame_area`. Clicks on the size warning screen
/// hit nothing, since the board is not shown there.
#[must_use]
pub fn tap_position(frame_area: Rect, column: u16, row: u16) -> Option<Position> {
    if !fits(frame_area) {
        return None;
    }
    cell_at(board_area(frame_area), column, row)
}

pub fn render(f: &mut Frame, board: &Board, game_state: &GameState, cursor: Position) {
    if !fits(f.area()) {
        let warning_text = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Gems"));

        let warning_area = centered_rect(60, 40, f.area());
        f.render_widget(warning_text, warning_area);
        return;
    }

    let area = f.area();
    let board_rect = board_area(area);

    let title = Paragraph::new("GEMS")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(
        title,
        Rect {
            height: TITLE_HEIGHT,
            width: BOARD_BLOCK_WIDTH,
            ..area
        },
    );

    render_game_board(f, board, cursor, board_rect);

    let info_area = Rect {
        x: board_rect.right() + 1,
        y: area.y,
        width: area.width.saturating_sub(board_rect.width + 1),
        height: area.height,
    };
    render_info(f, board, game_state, info_area);
}

fn render_game_board(f: &mut Frame, board: &Board, cursor: Position, area: Rect) {
    let inner_area = Block::default().borders(Borders::ALL).inner(area);
    f.render_widget(Block::default().borders(Borders::ALL), area);

    for (position, cell) in board.iter() {
        let left = inner_area.left() + position.x as u16 * CELL_WIDTH;
        let top = inner_area.top() + position.y as u16 * CELL_HEIGHT;

        let background = cell.color.map_or(Color::Black, |color| color.get_color());
        let filler = if cell.is_empty() { "·" } else { " " };

        for dy in 0..CELL_HEIGHT {
            for dx in 0..CELL_WIDTH {
                if let Some(buffer_cell) = f.buffer_mut().cell_mut((left + dx, top + dy)) {
                    buffer_cell.set_symbol(filler);
                    buffer_cell.set_fg(Color::DarkGray);
                    buffer_cell.set_bg(background);
                }
            }
        }

        // Bonus marker in the middle of the top row
        let marker = match cell.bonus {
            Some(Bonus::Bomb) => Some(("●", Color::Black)),
            Some(Bonus::Brush(color)) => Some(("■", color.get_color())),
            None => None,
        };
        if let Some((symbol, color)) = marker {
            for dx in 1..CELL_WIDTH - 1 {
                if let Some(buffer_cell) = f.buffer_mut().cell_mut((left + dx, top)) {
                    buffer_cell.set_symbol(symbol);
                    buffer_cell.set_fg(color);
                    if matches!(cell.bonus, Some(Bonus::Brush(_))) {
                        buffer_cell.set_bg(Color::Black);
                    }
                }
            }
        }

        if board.selection() == Some(position) {
            draw_brackets(f, left, top, "[", "]");
        }
        if cursor == position {
            draw_brackets(f, left, top + CELL_HEIGHT - 1, "<", ">");
        }
    }
}

fn draw_brackets(f: &mut Frame, left: u16, row: u16, open: &str, close: &str) {
    for (column, symbol) in [(left, open), (left + CELL_WIDTH - 1, close)] {
        if let Some(buffer_cell) = f.buffer_mut().cell_mut((column, row)) {
            buffer_cell.set_symbol(symbol);
            buffer_cell.set_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        }
    }
}

fn render_info(f: &mut Frame, board: &Board, game_state: &GameState, area: Rect) {
    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Title
            Constraint::Length(10), // Score and statistics
            Constraint::Min(5),     // Controls
        ])
        .split(area);

    let info_title = Paragraph::new("INFO")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(info_title, info_layout[0]);

    let stats = format!(
        "Score: {}\nMoves: {}\nRuns: {}\nGems cleared: {}\nBombs: {}\nBrushes: {}\nBonus drops: {}\nLongest cascade: {}",
        board.score(),
        game_state.moves,
        game_state.runs_cleared,
        game_state.cells_cleared,
        game_state.bombs_triggered,
        game_state.brushes_triggered,
        game_state.bonuses_dropped,
        game_state.longest_cascade,
    );
    let stats_info = Paragraph::new(stats)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: true });
    f.render_widget(stats_info, info_layout[1]);

    let controls = Paragraph::new(
        "Controls:\n\
        Click: Select / swap\n\
        Arrows/WASD: Move cursor\n\
        Enter/Space: Select / swap\n\
        R: Restart\n\
        X/Q: Quit\n\
        ",
    )
    .block(Block::default().borders(Borders::TOP))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, info_layout[2]);
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draws every step of a cascade to the terminal and sleeps between them. Statistics shown
/// are the session totals from before the tap plus the cascade resolved so far.
pub struct TerminalPresenter<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    game_state: GameState,
    cursor: Position,
}

impl<'a, B: Backend> TerminalPresenter<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, game_state: GameState, cursor: Position) -> Self {
        Self {
            terminal,
            game_state,
            cursor,
        }
    }
}

impl<B: Backend> Presenter for TerminalPresenter<'_, B> {
    fn render(&mut self, board: &Board) {
        let mut shown = self.game_state.clone();
        if let Some(progress) = board.cascade_in_progress() {
            apply_cascade(&mut shown, progress);
        }
        let game_state = &shown;
        let cursor = self.cursor;
        if let Err(err) = self
            .terminal
            .draw(|f| render(f, board, game_state, cursor))
        {
            error!("Failed to draw board: {err}");
        }
    }

    fn wait_visible(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
