//! Terminal UI for gridtoe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Direction, action_for, move_cursor};
pub use ui::{CELL_HEIGHT, CELL_WIDTH, GridLayout, Screen, Target, draw};

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the user quits.
pub fn run(config: &GameConfig) -> Result<()> {
    // Log to a file so output does not corrupt the screen
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(board_size = %config.board_size(), first_mark = %config.first_mark(), "Starting gridtoe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, then blocks on the next terminal event, until quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            draw(frame, &app);
        })?;

        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = action_for(key) {
                    app.apply(action);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let screen = Screen::layout(area, app.game().size().get());
                match screen.target_at(mouse.column, mouse.row, app.game().is_concluded()) {
                    Some(target) => app.click(target),
                    None => debug!(x = mouse.column, y = mouse.row, "Click outside controls"),
                }
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
