//! Rendering seam between the game logic and whatever actually draws.
//!
//! The core never owns a frame buffer; it issues `Canvas` calls and trusts
//! the implementation to be synchronous and side-effect-only.

use hecs::World;

use crate::components::{Ball, Paddle, Wall};
use crate::resources::Scoreboard;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

/// Drawing surface for one frame.
///
/// Rectangles are addressed by their center point, matching the rest of the
/// crate's geometry. No call returns a value the core consumes.
pub trait Canvas {
    fn set_color(&mut self, color: Color);
    fn fill_rect(&mut self, cx: f32, cy: f32, width: f32, height: f32);
    fn draw_text(&mut self, text: &str, size: f32, align: TextAlign);
}

/// Draw walls, paddles, the ball, and both scores for the current frame.
pub fn draw_frame<C: Canvas>(world: &mut World, scoreboard: &Scoreboard, canvas: &mut C) {
    canvas.set_color(Color::WHITE);
    for (_entity, wall) in world.query_mut::<&Wall>() {
        canvas.fill_rect(
            wall.rect.center.x,
            wall.rect.center.y,
            wall.rect.size.x,
            wall.rect.size.y,
        );
    }
    for (_entity, paddle) in world.query_mut::<&Paddle>() {
        canvas.fill_rect(paddle.pos.x, paddle.pos.y, paddle.size.x, paddle.size.y);
    }

    for (_entity, ball) in world.query_mut::<&Ball>() {
        ball.draw(canvas);
    }

    scoreboard.one.draw(canvas);
    scoreboard.two.draw(canvas);
}

#[cfg(test)]
pub(crate) mod test_canvas {
    use super::{Canvas, Color, TextAlign};

    /// Captures the call stream for assertions.
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        SetColor(Color),
        FillRect {
            cx: f32,
            cy: f32,
            width: f32,
            height: f32,
        },
        Text {
            text: String,
            size: f32,
            align: TextAlign,
        },
    }

    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
    }

    impl Canvas for RecordingCanvas {
        fn set_color(&mut self, color: Color) {
            self.calls.push(DrawCall::SetColor(color));
        }

        fn fill_rect(&mut self, cx: f32, cy: f32, width: f32, height: f32) {
            self.calls.push(DrawCall::FillRect {
                cx,
                cy,
                width,
                height,
            });
        }

        fn draw_text(&mut self, text: &str, size: f32, align: TextAlign) {
            self.calls.push(DrawCall::Text {
                text: text.to_string(),
                size,
                align,
            });
        }
    }
}
