//! Word entry screen: the picker types the secret word, masked.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use strictly_hangman::{GameEngine, Snapshot};
use tracing::{info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::widgets::{center_rect, draw_frame, screen_layout, text_field};

/// Longest word the field accepts.
const MAX_WORD_LEN: usize = 30;

/// State for the word entry screen.
#[derive(Debug, Default)]
pub struct WordEntryScreen {
    input: String,
    error_message: Option<String>,
}

impl WordEntryScreen {
    /// Creates the screen with an empty field.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The field as shown on screen, one `*` per character typed.
    pub fn masked(&self) -> String {
        "*".repeat(self.input.chars().count())
    }
}

impl Screen for WordEntryScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let layout = screen_layout(frame.area());
        draw_frame(
            frame,
            &layout,
            "Hangman - Secret Word",
            std::slice::from_ref(snapshot.message()),
            self.error_message.as_deref(),
            "Type the word (guesser, look away) | Enter: Submit | Esc: Quit",
        );

        let masked = self.masked();
        frame.render_widget(
            text_field(&masked, "Word", true),
            center_rect(layout.body, 40, 3),
        );
    }

    #[instrument(skip_all)]
    fn handle_key(&mut self, key: KeyEvent, engine: &mut GameEngine) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Enter => match engine.submit_word(&self.input) {
                Ok(()) => {
                    info!("Word submitted");
                    self.input.clear();
                    self.error_message = None;
                    ScreenTransition::Advance
                }
                Err(e) => {
                    self.error_message = Some(e.to_string());
                    ScreenTransition::Stay
                }
            },
            KeyCode::Backspace => {
                self.input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Char(c) if self.input.chars().count() < MAX_WORD_LEN => {
                self.input.push(c);
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }

    fn error(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use strictly_hangman::{RoundPhase, Seat};

    fn engine() -> GameEngine {
        let mut engine = GameEngine::new();
        engine.configure_players("Ada", "Grace", 5).unwrap();
        engine.select_picker(Some(Seat::First)).unwrap();
        engine
    }

    fn type_str(screen: &mut WordEntryScreen, engine: &mut GameEngine, s: &str) {
        for c in s.chars() {
            screen.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), engine);
        }
    }

    #[test]
    fn test_input_is_masked() {
        let mut engine = engine();
        let mut screen = WordEntryScreen::new();
        type_str(&mut screen, &mut engine, "rust");
        assert_eq!(screen.masked(), "****");
    }

    #[test]
    fn test_invalid_word_keeps_screen() {
        let mut engine = engine();
        let mut screen = WordEntryScreen::new();
        type_str(&mut screen, &mut engine, "ca7");

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(screen.handle_key(enter, &mut engine), ScreenTransition::Stay);
        assert_eq!(screen.error(), Some("Your word can only contain letters"));
        assert_eq!(engine.phase(), RoundPhase::AwaitingWord);
    }
}
