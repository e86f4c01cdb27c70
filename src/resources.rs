use crate::components::PlayerSide;
use crate::config::Params;
use crate::render::{Canvas, TextAlign};

/// Time resource for tracking simulation time, in milliseconds
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Elapsed milliseconds for this tick
    pub now: f32, // Total elapsed milliseconds
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 16.0, now: 0.0 }
    }
}

/// A single player's point count
#[derive(Debug, Clone, Copy)]
pub struct Score {
    pub player: PlayerSide,
    /// Starts at 0 and only ever grows via `inc`.
    pub points: u32,
}

impl Score {
    pub fn new(player: PlayerSide) -> Self {
        Self { player, points: 0 }
    }

    pub fn inc(&mut self) {
        self.points += 1;
    }

    /// Render "<label>: <points>", left-aligned for player one and
    /// right-aligned for player two.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        let align = match self.player {
            PlayerSide::One => TextAlign::Left,
            PlayerSide::Two => TextAlign::Right,
        };
        let text = format!("{}: {}", self.player.label(), self.points);
        canvas.draw_text(&text, Params::SCORE_TEXT_SIZE, align);
    }
}

/// Both players' scores
#[derive(Debug, Clone, Copy)]
pub struct Scoreboard {
    pub one: Score,
    pub two: Score,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tally(&mut self, side: PlayerSide) {
        match side {
            PlayerSide::One => self.one.inc(),
            PlayerSide::Two => self.two.inc(),
        }
    }

    pub fn points(&self, side: PlayerSide) -> u32 {
        match side {
            PlayerSide::One => self.one.points,
            PlayerSide::Two => self.two.points,
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            one: Score::new(PlayerSide::One),
            two: Score::new(PlayerSide::Two),
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub player_one_scored: bool,
    pub player_two_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.player_one_scored = false;
        self.player_two_scored = false;
    }
}

/// Random number generator for serve directions
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
