use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::app::{App, AppEvent};

/// Polls crossterm and maps key presses and resizes to `AppEvent`s.
/// A quiet poll becomes a `Tick`, which drives the copied-marker reset.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if !event::poll(timeout)? {
        return Ok(Some(AppEvent::Tick));
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(AppEvent::Quit));
            }
            Ok(Some(AppEvent::KeyPress(key.code)))
        }
        Event::Resize(width, _) => Ok(Some(AppEvent::Resize(width))),
        _ => Ok(None),
    }
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    app.update(AppEvent::Resize(terminal.size()?.width));

    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(tick_rate)? {
            app.update(event);
        }
    }
    Ok(())
}
