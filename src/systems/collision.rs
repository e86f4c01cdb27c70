use crate::{Ball, Events, Paddle, Wall};
use hecs::World;

/// Test the ball against every wall and paddle entity and flip its
/// direction on contact.
///
/// Purely sign-flipping: no push-out, no speed change. A ball still
/// overlapping on the next tick simply has the same direction re-asserted.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect the static geometry first so the ball can be mutated after.
    let walls: Vec<Wall> = world.query_mut::<&Wall>().into_iter().map(|(_e, w)| *w).collect();
    let paddles: Vec<Paddle> = world
        .query_mut::<&Paddle>()
        .into_iter()
        .map(|(_e, p)| *p)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for wall in &walls {
            if ball.overlaps_wall(wall) {
                ball.bounce_off_wall(wall.side);
                events.ball_hit_wall = true;
            }
        }

        for paddle in &paddles {
            if ball.overlaps_paddle(paddle) {
                ball.bounce_off_paddle(paddle.side);
                events.ball_hit_paddle = true;
            }
        }
    }
}
