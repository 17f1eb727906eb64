//! Terminal user interface

mod input;
mod render;

use crate::app::{Actions, App, Event, Handler};
use anyhow::Result;
use ratatui::crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Run the TUI application until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);
    let action_handler = Actions::new();

    let result = run_loop(&mut terminal, &mut app, event_handler, action_handler);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("TUI exited");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: Handler,
    action_handler: Actions,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // A queued request runs after the frame showing its loading line.
        if app.pending.is_some() {
            app.process_pending();
            continue;
        }

        match event_handler.next()? {
            Event::Key(key) => {
                input::handle_key_event(app, action_handler, key.code, key.modifiers);
            }
            Event::Tick | Event::Resize(..) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
