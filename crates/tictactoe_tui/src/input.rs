//! Input sources feeding the event loop.

use crate::keymap::KeyMap;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tictactoe_core::Input;
use tracing::trace;

/// Something that yields one input event at a time.
pub trait InputSource {
    /// Waits for the next event.
    ///
    /// Returns `Ok(None)` for events that carry no game input (unbound keys,
    /// resizes, key releases).
    fn next_input(&mut self) -> Result<Option<Input>>;
}

/// Reads key presses from the terminal.
#[derive(Debug)]
pub struct CrosstermInput {
    keymap: KeyMap,
}

impl CrosstermInput {
    /// Creates an input source using `keymap`.
    pub fn new(keymap: KeyMap) -> Self {
        Self { keymap }
    }
}

impl InputSource for CrosstermInput {
    fn next_input(&mut self) -> Result<Option<Input>> {
        match event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let input = self.keymap.lookup(&key);
                trace!(?key, ?input, "Key event");
                Ok(input)
            }
            _ => Ok(None),
        }
    }
}
