//! Guessing screen: the blank, the budget and one letter per Enter.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_hangman::{GameEngine, Snapshot};
use tracing::{debug, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::widgets::{center_rect, draw_frame, screen_layout, text_field};

/// State for the guessing screen.
#[derive(Debug, Default)]
pub struct GuessScreen {
    input: String,
    error_message: Option<String>,
}

impl GuessScreen {
    /// Creates the screen with an empty guess field.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self, engine))]
    fn submit(&mut self, engine: &mut GameEngine) -> ScreenTransition {
        let raw = std::mem::take(&mut self.input);
        match engine.submit_guess(&raw) {
            Ok(feedback) => {
                debug!(mark = %feedback.mark, revealed = feedback.revealed, "Guess accepted");
                self.error_message = None;
                if feedback.outcome.is_some() {
                    ScreenTransition::Advance
                } else {
                    ScreenTransition::Stay
                }
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                ScreenTransition::Stay
            }
        }
    }
}

impl Screen for GuessScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let layout = screen_layout(frame.area());
        draw_frame(
            frame,
            &layout,
            "Hangman",
            std::slice::from_ref(snapshot.message()),
            self.error_message.as_deref(),
            "Type a letter | Enter: Guess | Esc: Quit",
        );

        let board = center_rect(layout.body, 50, 9);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Blank
                Constraint::Length(3), // Budget and guessed letters
                Constraint::Length(3), // Input
            ])
            .split(board);

        let blank = Paragraph::new(snapshot.blank().as_str())
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Word"));
        frame.render_widget(blank, rows[0]);

        let left = snapshot.guesses_left().unwrap_or_default();
        let budget_color = if left <= 1 { Color::Red } else { Color::Green };
        let info = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Guesses left: {}", left),
                Style::default().fg(budget_color),
            ),
            Span::raw("   "),
            Span::raw(format!("Guessed: {}", snapshot.guessed())),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(info, rows[1]);

        frame.render_widget(text_field(&self.input, "Guess", true), rows[2]);
    }

    #[instrument(skip_all)]
    fn handle_key(&mut self, key: KeyEvent, engine: &mut GameEngine) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Enter => self.submit(engine),
            KeyCode::Backspace => {
                self.input.pop();
                ScreenTransition::Stay
            }
            // Room for a mistyped second character so the engine can reject it.
            KeyCode::Char(c) if self.input.chars().count() < 2 => {
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
