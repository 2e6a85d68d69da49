// Centered overlay box, used for the game-over screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct Overlay {
    pub title: Option<String>,
    pub lines: Vec<String>,
    /// Border and title color.
    pub accent: Color,
}

impl Overlay {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            title: None,
            lines,
            accent: Color::Cyan,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

/// Render the overlay centered in `area`, clearing what is underneath.
pub fn render_overlay(frame: &mut Frame, overlay: &Overlay, area: Rect) {
    let widest = overlay
        .lines
        .iter()
        .map(|line| line.len() as u16)
        .chain(overlay.title.iter().map(|t| t.len() as u16 + 4))
        .max()
        .unwrap_or(0);

    let width = (widest + 6).min(area.width.saturating_sub(2));
    let height = (overlay.lines.len() as u16 + 4).min(area.height.saturating_sub(2));

    let boxed = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, boxed);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(overlay.accent))
        .style(Style::default().bg(Color::Rgb(15, 15, 35)));
    if let Some(ref title) = overlay.title {
        block = block.title(format!(" {} ", title));
    }
    frame.render_widget(block, boxed);

    let inner = boxed.inner(ratatui::layout::Margin::new(2, 1));
    let text: Vec<Line> = overlay
        .lines
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), Style::default().fg(Color::White))))
        .collect();
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}
