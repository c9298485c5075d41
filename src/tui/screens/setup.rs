//! Setup screen: player names and guess budget.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_hangman::{GameEngine, GameRules, RoundConfig, Seat, Snapshot};
use tracing::{debug, info, instrument, warn};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::widgets::{center_rect, draw_frame, screen_layout, text_field};

/// Longest name the form accepts.
const MAX_NAME_LEN: usize = 20;

/// Field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    /// First player's name.
    Player1,
    /// Second player's name.
    Player2,
    /// Guess budget selector.
    Budget,
}

impl SetupField {
    fn next(self) -> Self {
        match self {
            SetupField::Player1 => SetupField::Player2,
            SetupField::Player2 => SetupField::Budget,
            SetupField::Budget => SetupField::Player1,
        }
    }

    fn previous(self) -> Self {
        match self {
            SetupField::Player1 => SetupField::Budget,
            SetupField::Player2 => SetupField::Player1,
            SetupField::Budget => SetupField::Player2,
        }
    }

    fn seat(self) -> Option<Seat> {
        match self {
            SetupField::Player1 => Some(Seat::First),
            SetupField::Player2 => Some(Seat::Second),
            SetupField::Budget => None,
        }
    }
}

/// State for the setup form.
#[derive(Debug, Getters)]
pub struct SetupScreen {
    names: [String; 2],
    budget: u8,
    focus: SetupField,
    rules: GameRules,
    error_message: Option<String>,
}

impl SetupScreen {
    /// Creates the form pre-filled from `prefill`.
    ///
    /// A budget outside `rules` falls back to the rules' default.
    #[instrument(skip(prefill))]
    pub fn new(prefill: &RoundConfig, rules: GameRules) -> Self {
        let mut budget = *prefill.guess_budget();
        if !rules.allows(budget) {
            warn!(budget, "Configured budget out of range, using default");
            budget = rules.default_budget();
        }
        Self {
            names: [
                prefill.name(Seat::First).to_string(),
                prefill.name(Seat::Second).to_string(),
            ],
            budget,
            focus: SetupField::Player1,
            rules,
            error_message: None,
        }
    }

    #[instrument(skip(self))]
    fn step_budget(&mut self, up: bool) {
        self.budget = self.rules.step_budget(self.budget, up);
        debug!(budget = self.budget, "Budget stepped");
    }

    fn edit_name(&mut self, seat: Seat, key: KeyCode) {
        let name = &mut self.names[seat.index()];
        match key {
            KeyCode::Char(c) if name.chars().count() < MAX_NAME_LEN => name.push(c),
            KeyCode::Backspace => {
                name.pop();
            }
            _ => {}
        }
    }

    #[instrument(skip(self, engine))]
    fn confirm(&mut self, engine: &mut GameEngine) -> ScreenTransition {
        match engine.configure_players(&self.names[0], &self.names[1], self.budget) {
            Ok(()) => {
                info!("Setup confirmed");
                self.error_message = None;
                ScreenTransition::Advance
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                ScreenTransition::Stay
            }
        }
    }
}

impl Screen for SetupScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let layout = screen_layout(frame.area());
        draw_frame(
            frame,
            &layout,
            "Hangman - New Round",
            std::slice::from_ref(snapshot.message()),
            self.error_message.as_deref(),
            "Tab: Next field | ←→: Guesses | Enter: Start | Esc: Quit",
        );

        let form = center_rect(layout.body, 40, 9);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(form);

        frame.render_widget(
            text_field(&self.names[0], "Player 1", self.focus == SetupField::Player1),
            rows[0],
        );
        frame.render_widget(
            text_field(&self.names[1], "Player 2", self.focus == SetupField::Player2),
            rows[1],
        );

        let budget_style = if self.focus == SetupField::Budget {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let budget = Paragraph::new(format!("◀ {} ▶", self.budget))
            .style(budget_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Guesses"));
        frame.render_widget(budget, rows[2]);
    }

    #[instrument(skip(self, engine))]
    fn handle_key(&mut self, key: KeyEvent, engine: &mut GameEngine) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => {
                info!("Leaving from setup");
                ScreenTransition::Quit
            }
            KeyCode::Enter => self.confirm(engine),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                ScreenTransition::Stay
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                ScreenTransition::Stay
            }
            KeyCode::Left => {
                self.step_budget(false);
                ScreenTransition::Stay
            }
            KeyCode::Right => {
                self.step_budget(true);
                ScreenTransition::Stay
            }
            code => {
                if let Some(seat) = self.focus.seat() {
                    self.edit_name(seat, code);
                }
                ScreenTransition::Stay
            }
        }
    }

    fn error(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
