//! Main entry point and event loop
//!
//! Terminal setup and teardown bracket the loop; any error inside still
//! restores the terminal before surfacing.

use super::model::{Model, Tab};
use super::ui;
use algodex_catalog::Catalog;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the catalogue browser
pub fn run_viewer(open_patterns: bool) -> io::Result<()> {
    let catalog = Catalog::load().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to load catalogue: {e}"),
        )
    })?;

    let tab = if open_patterns {
        Tab::Patterns
    } else {
        Tab::Algorithms
    };
    let mut model = Model::new(catalog, tab);

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &mut model);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: &mut Model,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            ui::render(frame, model);
        })?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(key, model) {
                        return Ok(());
                    }
                }
                // On terminal resize, the next loop iteration re-renders
                // with the new dimensions
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }
}

/// Returns true when the app should exit
pub fn handle_key_event(key: KeyEvent, model: &mut Model) -> bool {
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Tab => {
            model.toggle_tab();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            model.select_next();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            model.select_previous();
            false
        }
        KeyCode::PageDown => {
            model.scroll_down();
            false
        }
        KeyCode::PageUp => {
            model.scroll_up();
            false
        }
        _ => false,
    }
}
