pub mod components;
pub mod config;
pub mod court;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use court::*;
pub use render::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation.
///
/// Fixed call order: overlap tests and direction flips first, then the
/// position update, then goal detection and the re-serve.
pub fn step(
    world: &mut World,
    time: &mut Time,
    court: &Court,
    scoreboard: &mut Scoreboard,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let dt = time.dt.min(Params::MAX_DT_MS);

    // Clear events at start of tick
    events.clear();

    // 1. Check collisions (ball vs walls, paddles) and flip direction
    check_collisions(world, events);

    // 2. Move ball
    move_ball(world, &Time::new(dt, time.now));

    // 3. Check scoring (ball crossed a goal line)
    check_scoring(world, court, scoreboard, events, rng);

    // Update time
    time.now += dt;
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create a wall entity
pub fn create_wall(world: &mut World, wall: Wall) -> hecs::Entity {
    world.spawn((wall,))
}

/// Spawn the standard court: ball at center, one paddle per player, and the
/// Top and Bottom walls. The left and right edges stay open as goal lines.
pub fn spawn_court(world: &mut World, court: &Court, config: &Config) {
    let spawn = court.ball_spawn();
    create_ball(
        world,
        Ball::new(
            spawn.x,
            spawn.y,
            config.ball_size,
            config.ball_size,
            config.ball_color,
            config.ball_speed,
        ),
    );

    for side in [PlayerSide::One, PlayerSide::Two] {
        create_paddle(
            world,
            Paddle::new(
                side,
                Vec2::new(config.paddle_x(side), court.height / 2.0),
                Vec2::new(config.paddle_width, config.paddle_height),
            ),
        );
    }

    create_wall(world, court.wall(WallSide::Top, config.wall_thickness));
    create_wall(world, court.wall(WallSide::Bottom, config.wall_thickness));
}
