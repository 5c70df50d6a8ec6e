//! Logical input symbols accepted by the game controller.

use serde::{Deserialize, Serialize};

/// One discrete input event.
///
/// Key bindings are the input source's concern; the controller only sees these.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Input {
    /// Move the cursor one column left.
    Left,
    /// Move the cursor one column right.
    Right,
    /// Move the cursor one row up.
    Up,
    /// Move the cursor one row down.
    Down,
    /// Place the current player's mark under the cursor.
    Commit,
    /// Start a new game.
    Restart,
    /// Leave the session.
    Quit,
}

impl Input {
    /// Every input, in help-text order.
    pub const ALL: [Input; 7] = [
        Input::Left,
        Input::Right,
        Input::Up,
        Input::Down,
        Input::Commit,
        Input::Restart,
        Input::Quit,
    ];

    /// Short description for help text.
    pub fn label(self) -> &'static str {
        match self {
            Input::Left => "left",
            Input::Right => "right",
            Input::Up => "up",
            Input::Down => "down",
            Input::Commit => "mark",
            Input::Restart => "restart",
            Input::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_round_trip() {
        for input in Input::iter() {
            assert_eq!(Input::from_str(&input.to_string()), Ok(input));
        }
        assert_eq!(Input::Commit.to_string(), "commit");
    }

    #[test]
    fn test_all_lists_every_variant() {
        assert_eq!(Input::iter().collect::<Vec<_>>(), Input::ALL);
    }

    #[test]
    fn test_deserializes_lowercase() {
        let input: Input = serde_json::from_str("\"restart\"").unwrap();
        assert_eq!(input, Input::Restart);
    }
}
