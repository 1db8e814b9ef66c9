//! Event handler for the TUI
//!
//! Routes keyboard events to the active screen after the global keys.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Screen};
use super::event::Event;
use super::views;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick(Instant::now());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Any key closes help
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::F(1) => {
            app.show_help = true;
            return Ok(());
        }
        _ => {}
    }

    let handled = match app.screen {
        Screen::Login => views::login::handle_key(app, key),
        Screen::Dashboard => views::dashboard::handle_key(app, key),
        Screen::Voice => views::voice::handle_key(app, key),
        Screen::Chat => views::chat::handle_key(app, key),
    };

    // The dashboard has no text fields, so plain keys work there too
    if !handled && app.screen == Screen::Dashboard {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
            KeyCode::Char('?') => app.show_help = true,
            _ => {}
        }
    }

    Ok(())
}
