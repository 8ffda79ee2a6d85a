//! Terminal front-end: renders snapshots and forwards key presses.

mod app;
mod input;
mod ui;

use app::App;

use crate::config::TuiConfig;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{info, instrument};

/// Runs the terminal UI until the user quits.
#[instrument(skip(config))]
pub fn run(config: &TuiConfig) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, App::new(*config.move_order()));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    info!("Entering event loop");

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }

    info!(moves = app.game().len() - 1, "Leaving event loop");
    Ok(())
}
