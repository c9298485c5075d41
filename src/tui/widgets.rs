//! Shared layout and widgets for the screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Regions every screen is drawn into.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Screen-specific content.
    pub body: Rect,
    /// Status message from the engine.
    pub status: Rect,
    /// Last rejected input.
    pub error: Rect,
    /// Key help.
    pub help: Rect,
}

/// Splits the frame into the standard regions.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Body
            Constraint::Length(4), // Status (two lines)
            Constraint::Length(3), // Error
            Constraint::Length(3), // Help
        ])
        .split(area);

    ScreenLayout {
        title: chunks[0],
        body: chunks[1],
        status: chunks[2],
        error: chunks[3],
        help: chunks[4],
    }
}

/// Draws the title, status, error and help regions.
pub fn draw_frame(
    frame: &mut Frame,
    layout: &ScreenLayout,
    title: &str,
    status: &[String],
    error: Option<&str>,
    help: &str,
) {
    let title = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let lines: Vec<Line> = status.iter().map(|s| Line::from(s.as_str())).collect();
    let status = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let error = Paragraph::new(error.unwrap_or(""))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(error, layout.error);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

/// A bordered single-line text field.
pub fn text_field<'a>(value: &'a str, title: &'a str, focused: bool) -> Paragraph<'a> {
    let style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Paragraph::new(value).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    )
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_fits() {
        let area = Rect::new(0, 0, 80, 24);
        let inner = center_rect(area, 40, 10);
        assert_eq!(inner.width, 40);
        assert_eq!(inner.height, 10);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 7);
    }

    #[test]
    fn test_center_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let inner = center_rect(area, 40, 10);
        assert!(inner.width <= 20);
        assert!(inner.height <= 5);
    }
}
