// Game rendering: the 1600x900 virtual playfield drawn on a braille
// canvas, with score and hints as text overlays.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points, Rectangle},
    widgets::Paragraph,
    Frame,
};

use crate::config::DisplayConfig;
use crate::effects::Effects;
use crate::game::field::{
    BALL_RADIUS, PLAY_AREA_BOTTOM, PLAY_AREA_TOP, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::game::{Paddle, RoundState};

pub fn rgb(c: [u8; 3]) -> Color {
    Color::Rgb(c[0], c[1], c[2])
}

/// Fade a color toward black; `alpha` 1.0 = full brightness.
fn faded(c: [u8; 3], alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    Color::Rgb(
        (c[0] as f32 * a) as u8,
        (c[1] as f32 * a) as u8,
        (c[2] as f32 * a) as u8,
    )
}

// The canvas y-axis grows upward; the simulation's grows downward.
fn flip(y: f32) -> f64 {
    (SCREEN_HEIGHT - y) as f64
}

pub fn render(frame: &mut Frame, state: &RoundState, effects: &Effects, display: &DisplayConfig) {
    let area = frame.area();

    let canvas = Canvas::default()
        .background_color(rgb(display.background))
        .marker(Marker::Braille)
        .x_bounds([0.0, SCREEN_WIDTH as f64])
        .y_bounds([0.0, SCREEN_HEIGHT as f64])
        .paint(|ctx| {
            // Border rails at the play area edges.
            for y in [PLAY_AREA_TOP, PLAY_AREA_BOTTOM] {
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: flip(y),
                    x2: SCREEN_WIDTH as f64,
                    y2: flip(y),
                    color: rgb(display.accent_color),
                });
            }

            // Dashed center line.
            let mut dashes = Vec::new();
            let mut y = PLAY_AREA_TOP;
            while y < PLAY_AREA_BOTTOM {
                dashes.push((SCREEN_WIDTH as f64 / 2.0, flip(y)));
                dashes.push((SCREEN_WIDTH as f64 / 2.0, flip(y + 10.0)));
                y += 30.0;
            }
            ctx.draw(&Points {
                coords: &dashes,
                color: faded(display.ui_color, 0.5),
            });

            draw_paddle(ctx, &state.player, display);
            draw_paddle(ctx, &state.bot, display);

            ctx.draw(&Circle {
                x: state.ball.center.x as f64,
                y: flip(state.ball.center.y),
                radius: BALL_RADIUS as f64,
                color: rgb(display.ball_color),
            });

            for particle in effects.particles() {
                let coords = [(particle.position.x as f64, flip(particle.position.y))];
                ctx.draw(&Points {
                    coords: &coords,
                    color: faded(particle.color, particle.lifetime),
                });
            }
        });
    frame.render_widget(canvas, area);

    draw_score(frame, state, display, area);
    draw_hints(frame, area);
}

fn draw_paddle(
    ctx: &mut ratatui::widgets::canvas::Context,
    paddle: &Paddle,
    display: &DisplayConfig,
) {
    ctx.draw(&Rectangle {
        x: paddle.x as f64,
        // Rectangle anchors at its lower-left corner in canvas space.
        y: flip(paddle.y + paddle.height),
        width: paddle.width as f64,
        height: paddle.height as f64,
        color: rgb(display.paddle_color),
    });
}

fn draw_score(frame: &mut Frame, state: &RoundState, display: &DisplayConfig, area: Rect) {
    if area.height < 2 {
        return;
    }
    let score = Line::from(vec![
        Span::styled(
            format!("{:>3}", state.player_score),
            Style::default()
                .fg(rgb(display.paddle_color))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  :  ", Style::default().fg(rgb(display.ui_color))),
        Span::styled(
            format!("{:<3}", state.bot_score),
            Style::default()
                .fg(rgb(display.paddle_color))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let paragraph = Paragraph::new(score).alignment(Alignment::Center);
    frame.render_widget(paragraph, Rect::new(area.x, area.y + 1, area.width, 1));
}

fn draw_hints(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let hint = Paragraph::new(Line::from(Span::styled(
        "Esc - Menu | Q - Quit ",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(hint, Rect::new(area.x, area.y, area.width, 1));
}
