use crate::{Ball, Court, Events, GameRng, PlayerSide, Scoreboard};
use hecs::World;

/// Award a point and re-serve when the ball crosses a goal line
pub fn check_scoring(
    world: &mut World,
    court: &Court,
    scoreboard: &mut Scoreboard,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(scorer) = court.goal(ball.pos.x) {
            scoreboard.tally(scorer);
            match scorer {
                PlayerSide::One => events.player_one_scored = true,
                PlayerSide::Two => events.player_two_scored = true,
            }

            // Reposition for the next rally.
            ball.serve(rng);
        }
    }
}
