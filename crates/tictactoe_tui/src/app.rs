//! Event loop tying the controller to a renderer and an input source.

use crate::input::InputSource;
use crate::keymap::KeyMap;
use crate::ui;
use anyhow::Result;
use ratatui::{Terminal, backend::Backend};
use tictactoe_core::{GameController, Transition};
use tracing::{debug, info, instrument};

/// Runs until the controller is quitting.
///
/// Each event is fully applied and redrawn before the next one is read. The
/// final frame is drawn from the quitting snapshot, which leaves the screen
/// blank.
#[instrument(skip_all)]
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut GameController,
    input: &mut impl InputSource,
    keymap: &KeyMap,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    info!("Starting game loop");

    loop {
        let snapshot = controller.snapshot();
        terminal.draw(|f| ui::draw(f, &snapshot, keymap.help()))?;

        if *snapshot.quitting() {
            info!("Game loop finished");
            return Ok(());
        }

        let Some(event) = input.next_input()? else {
            continue;
        };

        match controller.handle_input(event) {
            Transition::Placed(_) | Transition::Won(_) | Transition::Drew => {
                debug!(board = %controller.board(), "Board after move");
            }
            other => debug!(transition = ?other, "Input applied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyBindings;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;
    use tictactoe_core::{Input, Mark, Outcome, Player};

    /// Replays a fixed list of events, with `None` standing for unbound keys.
    struct Scripted(VecDeque<Option<Input>>);

    impl Scripted {
        fn new(events: impl IntoIterator<Item = Option<Input>>) -> Self {
            Self(events.into_iter().collect())
        }
    }

    impl InputSource for Scripted {
        fn next_input(&mut self) -> Result<Option<Input>> {
            self.0
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("script exhausted"))
        }
    }

    fn keymap() -> KeyMap {
        KeyMap::from_bindings(&KeyBindings::default()).unwrap()
    }

    #[test]
    fn test_loop_plays_until_quit() {
        use Input::*;
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut controller = GameController::new();
        // X center, O top-left, X top-center, O bottom-left, X bottom-center.
        let mut input = Scripted::new(
            [
                Commit, Up, Left, Commit, Right, Commit, Down, Down, Left, Commit, Right, Commit,
                Quit,
            ]
            .map(Some),
        );

        run(&mut terminal, &mut controller, &mut input, &keymap()).unwrap();

        assert!(controller.is_quitting());
        assert_eq!(*controller.outcome(), Some(Outcome::Winner(Player::X)));
        assert_eq!(controller.board().get(2, 1), Mark::X);
        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.trim().is_empty());
    }

    #[test]
    fn test_unbound_events_are_skipped() {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut controller = GameController::new();
        let mut input = Scripted::new([None, Some(Input::Commit), None, Some(Input::Quit)]);

        run(&mut terminal, &mut controller, &mut input, &keymap()).unwrap();
        assert_eq!(controller.board().get(1, 1), Mark::X);
    }

    #[test]
    fn test_input_errors_propagate() {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut controller = GameController::new();
        let mut input = Scripted::new([Some(Input::Commit)]);

        let err = run(&mut terminal, &mut controller, &mut input, &keymap()).unwrap_err();
        assert!(err.to_string().contains("script exhausted"));
        assert!(!controller.is_quitting());
    }
}
