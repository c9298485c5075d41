//! Round over screen: the word and who won.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use strictly_hangman::{GameEngine, Snapshot};
use tracing::{info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::widgets::{center_rect, draw_frame, screen_layout};

/// State for the round over screen.
#[derive(Debug, Default)]
pub struct RoundOverScreen;

impl RoundOverScreen {
    /// Creates the screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for RoundOverScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let layout = screen_layout(frame.area());
        let mut status = vec![snapshot.message().clone()];
        status.extend(snapshot.detail().iter().cloned());
        draw_frame(
            frame,
            &layout,
            "Hangman - Round Over",
            &status,
            None,
            "Enter: New round | q / Esc: Quit",
        );

        let winner = snapshot
            .outcome()
            .as_ref()
            .map(|o| format!("{} WINS!", o.winner_name()))
            .unwrap_or_default();
        let banner = Paragraph::new(vec![
            Line::from(snapshot.blank().as_str()),
            Line::from(""),
            Line::from(winner).style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, center_rect(layout.body, 50, 5));
    }

    #[instrument(skip_all)]
    fn handle_key(&mut self, key: KeyEvent, _engine: &mut GameEngine) -> ScreenTransition {
        match key.code {
            KeyCode::Enter => {
                info!("New round requested");
                ScreenTransition::NewRound
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    fn error(&self) -> Option<&str> {
        None
    }
}
