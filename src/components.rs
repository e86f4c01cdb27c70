use glam::{IVec2, Vec2};

use crate::court::Rect;
use crate::render::{Canvas, Color};
use crate::resources::GameRng;

/// Which edge of the court a wall occupies.
///
/// Screen coordinates: y grows downward, so `Top` is the smallest-y edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Player identity. `One` defends the left goal line, `Two` the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSide {
    One,
    Two,
}

impl PlayerSide {
    /// Display label used by the scoreboard.
    pub fn label(self) -> &'static str {
        match self {
            PlayerSide::One => "Player 1",
            PlayerSide::Two => "Player 2",
        }
    }
}

/// Identity tag for a surface the ball can collide with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceId {
    Wall(WallSide),
    Paddle(PlayerSide),
}

/// Wall component - a static court edge
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub side: WallSide,
    pub rect: Rect,
}

impl Wall {
    pub fn new(side: WallSide, rect: Rect) -> Self {
        Self { side, rect }
    }
}

/// Paddle component - a player's racket
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: PlayerSide,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: PlayerSide, pos: Vec2, size: Vec2) -> Self {
        Self { side, pos, size }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Ball component - the moving game piece
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    /// Center of the ball's rectangle.
    pub pos: Vec2,
    pub size: Vec2,
    /// Per-axis direction multipliers; each component is always exactly
    /// -1 or +1, never 0 or any other magnitude.
    pub dir: IVec2,
    /// Distance travelled per millisecond along each axis.
    pub speed: f32,
    pub color: Color,
    /// Position recorded at construction; the serve returns here.
    pub start: Vec2,
}

impl Ball {
    /// The ball starts moving rightward-downward: both multipliers +1.
    pub fn new(cx: f32, cy: f32, width: f32, height: f32, color: Color, speed: f32) -> Self {
        Self {
            pos: Vec2::new(cx, cy),
            size: Vec2::new(width, height),
            dir: IVec2::ONE,
            speed,
            color,
            start: Vec2::new(cx, cy),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Advance the position by `dt_ms` elapsed milliseconds.
    ///
    /// Linear in `dt_ms`: two updates with d1 and d2 land where one update
    /// with d1 + d2 would, up to float rounding. A zero delta is a no-op.
    pub fn update(&mut self, dt_ms: f32) {
        self.pos += self.dir.as_vec2() * self.speed * dt_ms;
    }

    /// React to a wall hit: force the matching axis multiplier back into
    /// the court, regardless of its prior value.
    pub fn bounce_off_wall(&mut self, side: WallSide) {
        match side {
            WallSide::Bottom => self.dir.y = -1,
            WallSide::Top => self.dir.y = 1,
            WallSide::Right => self.dir.x = -1,
            WallSide::Left => self.dir.x = 1,
        }
    }

    /// React to a paddle hit: send the ball away from the paddle's side.
    pub fn bounce_off_paddle(&mut self, side: PlayerSide) {
        match side {
            PlayerSide::One => self.dir.x = 1,
            PlayerSide::Two => self.dir.x = -1,
        }
    }

    /// Overlap test against a wall. Stateless and idempotent; it does not
    /// guard against repeated bounces while the ball is still overlapping.
    pub fn overlaps_wall(&self, wall: &Wall) -> bool {
        self.overlaps(SurfaceId::Wall(wall.side), wall.rect)
    }

    /// Overlap test against a paddle.
    pub fn overlaps_paddle(&self, paddle: &Paddle) -> bool {
        self.overlaps(SurfaceId::Paddle(paddle.side), paddle.rect())
    }

    /// Single overlap test dispatched on the surface identity.
    ///
    /// Walls use an inclusive half-plane test on their facing edge only;
    /// paddles use a two-axis AABB overlap. The two paddle arms are the
    /// same test with mirrored comparison order, kept as literal aliases.
    fn overlaps(&self, id: SurfaceId, rect: Rect) -> bool {
        let ball = self.rect();
        match id {
            SurfaceId::Wall(WallSide::Bottom) => ball.bottom() >= rect.top(),
            SurfaceId::Wall(WallSide::Top) => ball.top() <= rect.bottom(),
            SurfaceId::Wall(WallSide::Left) => ball.left() <= rect.right(),
            SurfaceId::Wall(WallSide::Right) => ball.right() >= rect.left(),
            SurfaceId::Paddle(PlayerSide::Two) => {
                ball.right() >= rect.left()
                    && ball.left() <= rect.right()
                    && rect.top() <= ball.bottom()
                    && ball.top() <= rect.bottom()
            }
            SurfaceId::Paddle(PlayerSide::One) => {
                ball.left() <= rect.right()
                    && ball.right() >= rect.left()
                    && rect.top() <= ball.bottom()
                    && ball.top() <= rect.bottom()
            }
        }
    }

    /// Return the ball to its start position with a fresh serve direction.
    /// Each multiplier is drawn independently from {-1, +1}.
    pub fn serve(&mut self, rng: &mut GameRng) {
        use rand::Rng;
        self.pos = self.start;
        self.dir.x = if rng.0.gen_bool(0.5) { 1 } else { -1 };
        self.dir.y = if rng.0.gen_bool(0.5) { 1 } else { -1 };
    }

    /// Draw a filled rectangle centered at the current position.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        canvas.set_color(self.color);
        canvas.fill_rect(self.pos.x, self.pos.y, self.size.x, self.size.y);
    }
}
