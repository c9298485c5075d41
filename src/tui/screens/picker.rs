//! Picker screen: choose who supplies the word.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use strictly_hangman::{GameEngine, Seat, Snapshot};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::widgets::{center_rect, draw_frame, screen_layout};

/// State for the picker selection screen.
///
/// Nothing is highlighted until the players choose, so confirming straight
/// away is rejected by the engine.
#[derive(Debug, Default)]
pub struct PickerScreen {
    list_state: ListState,
    error_message: Option<String>,
}

impl PickerScreen {
    /// Creates the screen with no seat highlighted.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The highlighted seat.
    pub fn selected(&self) -> Option<Seat> {
        self.list_state.selected().and_then(Seat::from_index)
    }

    fn highlight(&mut self, seat: Seat) {
        debug!(?seat, "Picker highlighted");
        self.list_state.select(Some(seat.index()));
    }

    fn toggle(&mut self) {
        let seat = self.selected().map_or(Seat::First, Seat::other);
        self.highlight(seat);
    }
}

impl Screen for PickerScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let layout = screen_layout(frame.area());
        draw_frame(
            frame,
            &layout,
            "Hangman - Who Picks the Word?",
            std::slice::from_ref(snapshot.message()),
            self.error_message.as_deref(),
            "↑↓ / 1 2: Choose | Enter: Confirm | Esc: Quit",
        );

        let items: Vec<ListItem> = snapshot
            .players()
            .iter()
            .enumerate()
            .map(|(i, p)| ListItem::new(format!("{}. {}", i + 1, p.name())))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Picker"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(list, center_rect(layout.body, 40, 4), &mut list_state);
    }

    #[instrument(skip(self, engine))]
    fn handle_key(&mut self, key: KeyEvent, engine: &mut GameEngine) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            KeyCode::Up | KeyCode::Down => {
                self.toggle();
                ScreenTransition::Stay
            }
            KeyCode::Char('1') => {
                self.highlight(Seat::First);
                ScreenTransition::Stay
            }
            KeyCode::Char('2') => {
                self.highlight(Seat::Second);
                ScreenTransition::Stay
            }
            KeyCode::Enter => match engine.select_picker(self.selected()) {
                Ok(()) => {
                    info!("Picker confirmed");
                    ScreenTransition::Advance
                }
                Err(e) => {
                    self.error_message = Some(e.to_string());
                    ScreenTransition::Stay
                }
            },
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
    use strictly_hangman::{Role, RoundPhase};

    fn engine() -> GameEngine {
        let mut engine = GameEngine::new();
        engine.configure_players("Ada", "Grace", 5).unwrap();
        engine
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_confirm_without_selection_shows_error() {
        let mut engine = engine();
        let mut screen = PickerScreen::new();

        assert_eq!(screen.handle_key(key(KeyCode::Enter), &mut engine), ScreenTransition::Stay);
        assert_eq!(screen.error(), Some("Select which player will pick the word"));
        assert_eq!(engine.phase(), RoundPhase::AwaitingPickerSelection);
    }

    #[test]
    fn test_arrows_toggle_between_seats() {
        let mut engine = engine();
        let mut screen = PickerScreen::new();

        screen.handle_key(key(KeyCode::Down), &mut engine);
        assert_eq!(screen.selected(), Some(Seat::First));
        screen.handle_key(key(KeyCode::Down), &mut engine);
        assert_eq!(screen.selected(), Some(Seat::Second));
        screen.handle_key(key(KeyCode::Up), &mut engine);
        assert_eq!(screen.selected(), Some(Seat::First));
    }

    #[test]
    fn test_number_key_then_enter_assigns_roles() {
        let mut engine = engine();
        let mut screen = PickerScreen::new();

        screen.handle_key(key(KeyCode::Char('2')), &mut engine);
        let transition = screen.handle_key(key(KeyCode::Enter), &mut engine);

        assert_eq!(transition, ScreenTransition::Advance);
        assert_eq!(engine.role_of(Seat::Second), Some(Role::Picker));
    }
}
