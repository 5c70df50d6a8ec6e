//! Translation from terminal key events to game inputs.

use crate::config::{ConfigError, KeyBindings};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tictactoe_core::Input;
use tracing::{debug, instrument};

/// A key plus whether Ctrl was held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    code: KeyCode,
    ctrl: bool,
}

impl KeyChord {
    /// Parses a key name such as `"left"`, `"space"`, `"q"` or `"ctrl+c"`.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let trimmed = name.trim();
        let (ctrl, key) = match trimmed.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("ctrl+") => (true, &trimmed[5..]),
            _ => (false, trimmed),
        };

        let code = match key.to_lowercase().as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "enter" => KeyCode::Enter,
            "space" => KeyCode::Char(' '),
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ctrl => KeyCode::Char(ch.to_ascii_lowercase()),
                    (Some(ch), None) => KeyCode::Char(ch),
                    _ => return Err(ConfigError::new(format!("Unknown key name: {:?}", name))),
                }
            }
        };

        Ok(Self { code, ctrl })
    }

    fn from_event(key: &KeyEvent) -> Self {
        Self {
            code: key.code,
            ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        }
    }
}

/// Lookup table from key chords to inputs.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<KeyChord, Input>,
    help: String,
}

impl KeyMap {
    /// Builds the table, rejecting unknown key names and keys bound twice.
    #[instrument(skip(bindings))]
    pub fn from_bindings(bindings: &KeyBindings) -> Result<Self, ConfigError> {
        let mut table = HashMap::new();
        for input in Input::ALL {
            for name in bindings.for_input(input) {
                let chord = KeyChord::parse(name)?;
                if let Some(existing) = table.insert(chord, input)
                    && existing != input
                {
                    return Err(ConfigError::new(format!(
                        "Key {:?} bound to both {} and {}",
                        name, existing, input
                    )));
                }
            }
        }
        debug!(keys = table.len(), "Key map built");

        Ok(Self {
            bindings: table,
            help: help_line(bindings),
        })
    }

    /// Input bound to `key`, if any.
    pub fn lookup(&self, key: &KeyEvent) -> Option<Input> {
        self.bindings.get(&KeyChord::from_event(key)).copied()
    }

    /// One-line summary of the bindings for the footer.
    pub fn help(&self) -> &str {
        &self.help
    }
}

fn help_line(bindings: &KeyBindings) -> String {
    Input::ALL
        .into_iter()
        .map(|input| {
            let keys = bindings.for_input(input).join("/");
            format!("{} {}", keys, input.label())
        })
        .collect::<Vec<_>>()
        .join(" • ")
}
