use crate::components::PlayerSide;
use crate::render::Color;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;
    pub const WALL_THICKNESS: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 0.5; // px per millisecond

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 50.0;

    // Scoreboard
    pub const SCORE_TEXT_SIZE: f32 = 70.0;

    // Tick
    pub const MAX_DT_MS: f32 = 100.0;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub wall_thickness: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ball_color: Color,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            wall_thickness: Params::WALL_THICKNESS,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_color: Color::WHITE,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle center based on the player's side
    pub fn paddle_x(&self, side: PlayerSide) -> f32 {
        match side {
            PlayerSide::One => self.paddle_inset,
            PlayerSide::Two => self.court_width - self.paddle_inset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(PlayerSide::One), 50.0, "Left paddle X");
        assert_eq!(config.paddle_x(PlayerSide::Two), 750.0, "Right paddle X");
    }

    #[test]
    fn test_defaults_match_params() {
        let config = Config::new();
        assert_eq!(config.ball_speed, Params::BALL_SPEED);
        assert_eq!(config.court_width, Params::COURT_WIDTH);
    }
}
