// Menu rendering. Records each item's screen area back into the state so
// mouse input can hit-test against what was actually drawn.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::config::DisplayConfig;

use super::state::MenuState;

fn rgb(c: [u8; 3]) -> Color {
    Color::Rgb(c[0], c[1], c[2])
}

pub fn render_menu(frame: &mut Frame, menu_state: &mut MenuState, display: &DisplayConfig) {
    let area = frame.area();

    let background = Block::default().style(Style::default().bg(rgb(display.background)));
    frame.render_widget(background, area);

    // Title block in the upper third.
    let title_y = area.height / 5;
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "P  O  N  G",
            Style::default()
                .fg(rgb(display.accent_color))
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Choose Your Difficulty",
            Style::default().fg(rgb(display.ui_color)),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(
        title,
        Rect::new(area.x, area.y + title_y, area.width, 3).intersection(area),
    );

    // One row per item, centered, with a blank row between.
    let first_item_y = area.y + title_y + 5;
    menu_state.item_areas.clear();

    for (index, item) in menu_state.items.iter().enumerate() {
        let row = first_item_y + (index as u16) * 2;
        if row >= area.bottom() {
            break;
        }
        let item_area = Rect::new(area.x, row, area.width, 1);

        let highlighted = index == menu_state.selected_index
            || menu_state.hovered_index == Some(index);
        let style = if highlighted {
            Style::default()
                .fg(rgb(display.background))
                .bg(rgb(display.paddle_color))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(rgb(display.ui_color))
        };

        let text = if highlighted {
            format!("> {} <", item.label())
        } else {
            item.label()
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, item_area);
        menu_state.item_areas.push(item_area);
    }

    // Footer hint.
    let hint = Paragraph::new(Line::from(Span::styled(
        "Arrows/Mouse to choose  |  Enter/Click to start  |  Esc to quit",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    if area.height > 2 {
        frame.render_widget(hint, Rect::new(area.x, area.bottom() - 2, area.width, 1));
    }
}
