use hecs::World;

use crate::{Arena, Ball, Config, Events, GameRng, Layout, Score};

/// Check if the ball fully left the arena through either end
///
/// Leaving on the left is a point for the computer and the ball is served
/// back toward the right paddle; leaving on the right is the mirror case.
#[allow(clippy::too_many_arguments)]
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    layout: &Layout,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let radius = layout.ball_radius;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let toward_right = if ball.pos.x + radius < 0.0 {
            score.increment_computer();
            events.computer_scored = true;
            true
        } else if ball.pos.x - radius > arena.width() {
            score.increment_player();
            events.player_scored = true;
            false
        } else {
            continue;
        };

        ball.serve(
            arena.center(),
            toward_right,
            layout.ball_speed,
            config.serve_angle(),
            rng,
        );
    }
}
