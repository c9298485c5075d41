//! Screen trait and transition type for the round state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use strictly_hangman::{GameEngine, Snapshot};

/// The result of handling a key on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`GameController`](super::GameController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// The engine moved to a new phase; show its screen.
    Advance,
    /// Reset the engine and return to the setup form.
    NewRound,
    /// Exit the application.
    Quit,
}

/// Implemented by each phase's screen.
///
/// A screen owns only its input state (text being typed, the highlighted
/// option, the last error). Game state lives in the engine and reaches the
/// screen as a [`Snapshot`].
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, snapshot: &Snapshot);

    /// Handles a key, calling into the engine when input is confirmed.
    fn handle_key(&mut self, key: KeyEvent, engine: &mut GameEngine) -> ScreenTransition;

    /// The last rejected input's message, if it has not been cleared.
    fn error(&self) -> Option<&str>;
}
