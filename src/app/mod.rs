mod indicator;
mod state;
mod watch;

use crossterm::event::KeyCode;

pub use state::{App, CountPopup};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
    /// New terminal width in cells.
    Resize(u16),
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Grid,
    Help,
}
