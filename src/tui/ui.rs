//! Stateless UI rendering and mouse hit-testing.
//!
//! [`Screen::layout`] is the single source of element positions: drawing and
//! click handling both go through it, so a click always lands on what was
//! drawn.

use gridtoe_core::{Cell, GameState, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::app::App;

/// Widest cell drawn, borders included.
pub const CELL_WIDTH: u16 = 5;
/// Tallest cell drawn, borders included.
pub const CELL_HEIGHT: u16 = 3;

const SHRINK_LABEL: &str = "[-]";
const GROW_LABEL: &str = "[+]";
const SIZE_LABEL_WIDTH: u16 = 12;
const PLAY_AGAIN_LABEL: &str = "[ Play again ]";
const HELP: &str = "arrows/hjkl move | enter place | -/+ size | r play again | q quit";

/// A clickable screen element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A grid cell by flat index.
    Cell(usize),
    /// The size decrease button.
    Shrink,
    /// The size increase button.
    Grow,
    /// The restart button.
    PlayAgain,
}

/// Position of the N x N grid within the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    area: Rect,
    n: u16,
    cell_width: u16,
    cell_height: u16,
}

impl GridLayout {
    /// Fits an `n` x `n` grid into `available`, shrinking cells when space
    /// is short and centring the result.
    pub fn fit(available: Rect, n: usize) -> Self {
        let n = u16::try_from(n).unwrap_or(u16::MAX).max(1);
        let cell_width = (available.width / n).min(CELL_WIDTH);
        let cell_height = (available.height / n).min(CELL_HEIGHT);
        Self {
            area: center_rect(available, cell_width * n, cell_height * n),
            n,
            cell_width,
            cell_height,
        }
    }

    /// False when the terminal is too small to give every cell a character.
    pub fn fits(&self) -> bool {
        self.cell_width > 0 && self.cell_height > 0
    }

    /// The whole grid.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Screen rectangle of a cell.
    pub fn cell_rect(&self, index: usize) -> Rect {
        let n = usize::from(self.n);
        let (row, col) = ((index / n) as u16, (index % n) as u16);
        Rect::new(
            self.area.x + col * self.cell_width,
            self.area.y + row * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Cell under a screen position.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<usize> {
        if !self.fits() || !contains(self.area, x, y) {
            return None;
        }
        let col = (x - self.area.x) / self.cell_width;
        let row = (y - self.area.y) / self.cell_height;
        Some(usize::from(row) * usize::from(self.n) + usize::from(col))
    }
}

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    /// Title line.
    pub title: Rect,
    /// Size decrease button.
    pub shrink: Rect,
    /// Current size label.
    pub size_label: Rect,
    /// Size increase button.
    pub grow: Rect,
    /// Board grid.
    pub grid: GridLayout,
    /// Turn or end text.
    pub status: Rect,
    /// Restart button, drawn only once the game is over.
    pub play_again: Rect,
    /// Key help line.
    pub help: Rect,
}

impl Screen {
    /// Lays out the screen for an `n` x `n` board.
    pub fn layout(area: Rect, n: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1),
                Constraint::Length(1), // Size control
                Constraint::Length(1),
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Status
                Constraint::Length(1), // Play again
                Constraint::Length(1), // Help
            ])
            .split(area);

        let bar_width = label_width(SHRINK_LABEL) + 1 + SIZE_LABEL_WIDTH + 1 + label_width(GROW_LABEL);
        let bar = center_rect(rows[2], bar_width, 1);
        let shrink = Rect::new(bar.x, bar.y, label_width(SHRINK_LABEL), 1).intersection(bar);
        let size_label =
            Rect::new(bar.x + label_width(SHRINK_LABEL) + 1, bar.y, SIZE_LABEL_WIDTH, 1)
                .intersection(bar);
        let grow = Rect::new(
            (bar.x + bar.width).saturating_sub(label_width(GROW_LABEL)),
            bar.y,
            label_width(GROW_LABEL),
            1,
        )
        .intersection(bar);

        Self {
            title: rows[0],
            shrink,
            size_label,
            grow,
            grid: GridLayout::fit(rows[4], n),
            status: rows[5],
            play_again: center_rect(rows[6], label_width(PLAY_AGAIN_LABEL), 1),
            help: rows[7],
        }
    }

    /// Element under a screen position. The restart button only counts once
    /// the game is over.
    pub fn target_at(&self, x: u16, y: u16, concluded: bool) -> Option<Target> {
        if let Some(index) = self.grid.cell_at(x, y) {
            return Some(Target::Cell(index));
        }
        if contains(self.shrink, x, y) {
            return Some(Target::Shrink);
        }
        if contains(self.grow, x, y) {
            return Some(Target::Grow);
        }
        if concluded && contains(self.play_again, x, y) {
            return Some(Target::PlayAgain);
        }
        None
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let game = app.game();
    let screen = Screen::layout(frame.area(), game.size().get());

    let title = Paragraph::new(format!("Tic Tac Toe ({})", game.size()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, screen.title);

    draw_size_control(frame, &screen, game);

    if screen.grid.fits() {
        for index in 0..game.board().len() {
            draw_cell(frame, &screen.grid, game, index, index == app.cursor());
        }
    } else {
        let notice = Paragraph::new("Terminal too small for this board")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(notice, screen.grid.area());
    }

    let status_style = if game.is_concluded() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center);
    frame.render_widget(status, screen.status);

    if game.is_concluded() {
        let button = Paragraph::new(PLAY_AGAIN_LABEL)
            .style(Style::default().fg(Color::Black).bg(Color::Gray));
        frame.render_widget(button, screen.play_again);
    }

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, screen.help);
}

fn draw_size_control(frame: &mut Frame, screen: &Screen, game: &GameState) {
    let button = Style::default().fg(Color::Cyan);
    frame.render_widget(Paragraph::new(SHRINK_LABEL).style(button), screen.shrink);
    frame.render_widget(Paragraph::new(GROW_LABEL).style(button), screen.grow);

    let label = Paragraph::new(format!("Size {}", game.size().get())).alignment(Alignment::Center);
    frame.render_widget(label, screen.size_label);
}

fn draw_cell(frame: &mut Frame, grid: &GridLayout, game: &GameState, index: usize, cursor: bool) {
    let (symbol, base_style) = match game.board().get(index) {
        Some(Cell::Occupied(Mark::X)) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Occupied(Mark::O)) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (" ", Style::default().fg(Color::DarkGray)),
    };

    let style = if cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let area = grid.cell_rect(index);
    let mut paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    if area.width >= 3 && area.height >= 3 {
        paragraph = paragraph.block(
            Block::bordered()
                .border_style(Style::default().fg(Color::DarkGray))
                .style(style),
        );
    } else {
        paragraph = paragraph.style(style);
    }
    frame.render_widget(paragraph, area);
}

fn label_width(label: &str) -> u16 {
    u16::try_from(label.chars().count()).unwrap_or(u16::MAX)
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
