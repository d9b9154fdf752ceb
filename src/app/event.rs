//! Terminal event plumbing for the dashboard loop

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::Duration;

/// Events the dashboard loop reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Poll timeout elapsed with no input
    Tick,
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resized to (width, height)
    Resize(u16, u16),
}

impl From<CrosstermEvent> for Event {
    fn from(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) => Self::Key(key),
            CrosstermEvent::Mouse(mouse) => Self::Mouse(mouse),
            CrosstermEvent::Resize(width, height) => Self::Resize(width, height),
            _ => Self::Tick,
        }
    }
}

/// Poll-based source of terminal events
#[derive(Debug, Clone, Copy)]
pub struct Events {
    tick: Duration,
}

impl Events {
    /// Create a source that times out after `poll_interval_ms`
    #[must_use]
    pub const fn new(poll_interval_ms: u64) -> Self {
        Self {
            tick: Duration::from_millis(poll_interval_ms),
        }
    }

    /// Wait for the next event, yielding [`Event::Tick`] on timeout
    ///
    /// # Errors
    ///
    /// Returns an error if polling the terminal fails
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick)? {
            Ok(event::read()?.into())
        } else {
            Ok(Event::Tick)
        }
    }

    /// Poll timeout
    #[must_use]
    pub const fn tick(&self) -> Duration {
        self.tick
    }
}
