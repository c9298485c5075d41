//! Game controller: the event loop that routes keys to the screen for the
//! engine's current phase.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_getters::Getters;
use ratatui::{Frame, Terminal, backend::Backend};
use strictly_hangman::{GameEngine, RoundConfig, RoundPhase, RoundState, Seat};
use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{
    GuessScreen, PickerScreen, RoundOverScreen, SetupScreen, WordEntryScreen,
};

/// Screen for the engine's current phase.
#[derive(Debug)]
enum ActiveScreen {
    Setup(SetupScreen),
    Picker(PickerScreen),
    WordEntry(WordEntryScreen),
    Guessing(GuessScreen),
    RoundOver(RoundOverScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Setup(s) => s,
            ActiveScreen::Picker(s) => s,
            ActiveScreen::WordEntry(s) => s,
            ActiveScreen::Guessing(s) => s,
            ActiveScreen::RoundOver(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Setup(s) => s,
            ActiveScreen::Picker(s) => s,
            ActiveScreen::WordEntry(s) => s,
            ActiveScreen::Guessing(s) => s,
            ActiveScreen::RoundOver(s) => s,
        }
    }
}

/// Controller that owns the engine and drives the screens.
///
/// Call [`GameController::run`] to start the event loop, or feed keys to
/// [`GameController::handle_key`] directly.
#[derive(Debug, Getters)]
pub struct GameController {
    engine: GameEngine,
    /// Names and budget offered by the next setup form.
    prefill: RoundConfig,
    #[getter(skip)]
    screen: ActiveScreen,
}

impl GameController {
    /// Creates a controller with a fresh engine and the setup form
    /// pre-filled from `config`.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        info!("Creating GameController");
        let engine = GameEngine::new();
        let prefill = config.round_config();
        let screen = ActiveScreen::Setup(SetupScreen::new(&prefill, *engine.rules()));
        Self {
            engine,
            prefill,
            screen,
        }
    }

    /// Current phase of the engine.
    pub fn phase(&self) -> RoundPhase {
        self.engine.phase()
    }

    /// Error shown on the current screen, if any.
    pub fn error(&self) -> Option<&str> {
        self.screen.as_screen().error()
    }

    /// Draws the current screen.
    pub fn render(&self, frame: &mut Frame) {
        let snapshot = self.engine.snapshot();
        self.screen.as_screen().render(frame, &snapshot);
    }

    /// Handles one key press. Returns `false` once the player quits.
    ///
    /// Keys are not recorded: the word is typed through here.
    #[instrument(skip_all)]
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Interrupted");
            return false;
        }

        let transition = self.screen.as_screen_mut().handle_key(key, &mut self.engine);
        self.apply_transition(transition)
    }

    /// Runs the event loop until the player quits.
    #[instrument(skip_all)]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !self.handle_key(key) {
                    info!("Game loop finished");
                    return Ok(());
                }
            }
        }
    }

    /// Applies a transition. Returns `false` to quit.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        match transition {
            ScreenTransition::Stay => true,
            ScreenTransition::Quit => false,
            ScreenTransition::Advance => {
                self.remember_setup();
                self.screen = self.screen_for_phase();
                debug!(phase = %self.phase(), "Screen advanced");
                true
            }
            ScreenTransition::NewRound => {
                self.engine.reset();
                self.screen = self.screen_for_phase();
                info!("New round");
                true
            }
        }
    }

    /// Keeps the confirmed names and budget for the next round's form.
    fn remember_setup(&mut self) {
        if let RoundState::AwaitingPickerSelection(lineup) = self.engine.round() {
            self.prefill = RoundConfig::new(
                lineup.name(Seat::First),
                lineup.name(Seat::Second),
                lineup.budget().allowed(),
            );
        }
    }

    fn screen_for_phase(&self) -> ActiveScreen {
        match self.engine.phase() {
            RoundPhase::AwaitingPlayers => {
                ActiveScreen::Setup(SetupScreen::new(&self.prefill, *self.engine.rules()))
            }
            RoundPhase::AwaitingPickerSelection => ActiveScreen::Picker(PickerScreen::new()),
            RoundPhase::AwaitingWord => ActiveScreen::WordEntry(WordEntryScreen::new()),
            RoundPhase::Guessing => ActiveScreen::Guessing(GuessScreen::new()),
            RoundPhase::RoundOver => ActiveScreen::RoundOver(RoundOverScreen::new()),
        }
    }
}
