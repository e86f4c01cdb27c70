use crate::{Ball, Time};
use hecs::World;

/// Advance the ball by the elapsed milliseconds
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update(time.dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Ball, Color};
    use glam::Vec2;

    #[test]
    fn test_move_ball_applies_direction_and_speed() {
        let mut world = World::new();
        create_ball(
            &mut world,
            Ball::new(100.0, 100.0, 10.0, 10.0, Color::WHITE, 0.5),
        );

        move_ball(&mut world, &Time::new(10.0, 0.0));

        for (_entity, ball) in world.query_mut::<&Ball>() {
            assert_eq!(ball.pos, Vec2::new(105.0, 105.0));
        }
    }

    #[test]
    fn test_move_ball_with_no_ball_is_harmless() {
        let mut world = World::new();
        move_ball(&mut world, &Time::default());
    }
}
