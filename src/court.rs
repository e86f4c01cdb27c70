use glam::Vec2;

use crate::components::{PlayerSide, Wall, WallSide};
use crate::config::Params;

/// Axis-aligned rectangle addressed by center and size.
///
/// Screen coordinates: y grows downward, so `top()` is the smallest-y edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }
}

/// Playfield definition: outer dimensions plus derived spawn and goal lines.
///
/// The standard court closes the top and bottom edges with walls and leaves
/// the left and right edges open as goal lines.
#[derive(Debug, Clone)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center of the court, where the ball spawns and serves restart.
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a paddle center Y so the paddle stays fully on the court.
    pub fn clamp_paddle_y(&self, y: f32, paddle_half_height: f32) -> f32 {
        y.clamp(paddle_half_height, self.height - paddle_half_height)
    }

    /// Which player scored, if the ball center has crossed a goal line.
    /// Crossing the left line concedes a point to player two, and vice versa.
    pub fn goal(&self, ball_cx: f32) -> Option<PlayerSide> {
        if ball_cx < 0.0 {
            Some(PlayerSide::Two)
        } else if ball_cx > self.width {
            Some(PlayerSide::One)
        } else {
            None
        }
    }

    /// Build a wall flush with a court edge, `thickness` deep.
    ///
    /// All four sides are supported; the standard court only spawns Top and
    /// Bottom, since a closed side line would rebound the ball before it
    /// could ever cross the goal.
    pub fn wall(&self, side: WallSide, thickness: f32) -> Wall {
        let half = thickness / 2.0;
        let rect = match side {
            WallSide::Top => Rect::new(
                Vec2::new(self.width / 2.0, half),
                Vec2::new(self.width, thickness),
            ),
            WallSide::Bottom => Rect::new(
                Vec2::new(self.width / 2.0, self.height - half),
                Vec2::new(self.width, thickness),
            ),
            WallSide::Left => Rect::new(
                Vec2::new(half, self.height / 2.0),
                Vec2::new(thickness, self.height),
            ),
            WallSide::Right => Rect::new(
                Vec2::new(self.width - half, self.height / 2.0),
                Vec2::new(thickness, self.height),
            ),
        };
        Wall::new(side, rect)
    }
}

impl Default for Court {
    fn default() -> Self {
        Self {
            width: Params::COURT_WIDTH,
            height: Params::COURT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(Vec2::new(100.0, 110.0), Vec2::new(200.0, 10.0));
        assert_eq!(rect.left(), 0.0);
        assert_eq!(rect.right(), 200.0);
        assert_eq!(rect.top(), 105.0);
        assert_eq!(rect.bottom(), 115.0);
    }

    #[test]
    fn test_ball_spawn_is_court_center() {
        let court = Court::new();
        assert_eq!(
            court.ball_spawn(),
            Vec2::new(court.width / 2.0, court.height / 2.0)
        );
    }

    #[test]
    fn test_goal_detection() {
        let court = Court::new();
        assert_eq!(
            court.goal(-0.1),
            Some(PlayerSide::Two),
            "Ball out on the left scores for player two"
        );
        assert_eq!(
            court.goal(court.width + 0.1),
            Some(PlayerSide::One),
            "Ball out on the right scores for player one"
        );
        assert_eq!(court.goal(court.width / 2.0), None, "In play, no goal");
        assert_eq!(court.goal(0.0), None, "Exactly on the line is still in play");
    }

    #[test]
    fn test_walls_sit_flush_with_edges() {
        let court = Court::new();

        let top = court.wall(WallSide::Top, 10.0);
        assert_eq!(top.rect.top(), 0.0);
        assert_eq!(top.rect.bottom(), 10.0);
        assert_eq!(top.rect.size.x, court.width);

        let bottom = court.wall(WallSide::Bottom, 10.0);
        assert_eq!(bottom.rect.bottom(), court.height);

        let left = court.wall(WallSide::Left, 10.0);
        assert_eq!(left.rect.left(), 0.0);
        assert_eq!(left.rect.size.y, court.height);

        let right = court.wall(WallSide::Right, 10.0);
        assert_eq!(right.rect.right(), court.width);
    }

    #[test]
    fn test_clamp_paddle_y() {
        let court = Court::new();
        let half = 50.0;
        assert_eq!(court.clamp_paddle_y(0.0, half), half);
        assert_eq!(court.clamp_paddle_y(10_000.0, half), court.height - half);
        assert_eq!(court.clamp_paddle_y(300.0, half), 300.0);
    }
}
