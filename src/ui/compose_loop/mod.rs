//! The interactive compose screen.
//!
//! A single-threaded loop: poll for terminal events, hand keys to
//! [`keybindings::handle_key`], redraw. The terminal is restored on every
//! exit path, including errors.

pub mod keybindings;
pub mod lifecycle;

use std::error::Error;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, error, info};

use crate::core::app::{App, StatusKind};
use crate::ui::renderer::ui;
use crate::utils::clipboard::ClipboardSink;
use crate::utils::editor::edit_in_external_editor;

use keybindings::{handle_key, KeyLoopAction};
use lifecycle::{
    restore_terminal, resume_terminal, setup_terminal, suspend_terminal, ComposeTerminal,
};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_compose(
    app: &mut App,
    clipboard: &mut dyn ClipboardSink,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = setup_terminal()?;
    info!("compose screen started");

    let result = event_loop(&mut terminal, app, clipboard);

    restore_terminal(&mut terminal)?;
    info!("compose screen closed");
    result
}

fn event_loop(
    terminal: &mut ComposeTerminal,
    app: &mut App,
    clipboard: &mut dyn ClipboardSink,
) -> Result<(), Box<dyn Error>> {
    loop {
        app.expire_status(Instant::now());
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match handle_key(app, key, clipboard) {
                    KeyLoopAction::Continue => {}
                    KeyLoopAction::Break => break,
                    KeyLoopAction::LaunchExternalEditor => {
                        launch_external_editor(terminal, app)?;
                    }
                }
            }
            Event::Paste(text) => app.paste(&text),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
            }
            _ => {}
        }
    }
    Ok(())
}

fn launch_external_editor(
    terminal: &mut ComposeTerminal,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let Some(initial) = app.ui.dialog.as_ref().map(|dialog| dialog.text()) else {
        return Ok(());
    };

    suspend_terminal(terminal)?;
    let outcome = edit_in_external_editor(&initial);
    resume_terminal(terminal)?;

    match outcome {
        Ok(outcome) => app.apply_external_edit(outcome),
        Err(e) => {
            error!(error = %e, "external editor failed");
            app.set_status(format!("Editor error: {}", e), StatusKind::Error);
        }
    }
    Ok(())
}
