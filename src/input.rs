use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::App;

/// Handle terminal events
/// Returns true if the app should quit
pub fn handle_events(app: &mut App) -> Result<bool> {
    // Poll for events with a timeout
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        // Only handle key press events (not release) - important for Windows
        if key.kind != KeyEventKind::Press {
            return Ok(app.should_quit());
        }

        handle_key(app, key);
    }

    Ok(app.should_quit())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Handle Ctrl+C globally
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.request_quit();
        }
        // The surface is read-only; quit is the only interaction
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
        }
        _ => {}
    }
}
