use hecs::World;

use crate::{Ball, Config, CpuControl, Layout, Paddle};

/// Move a paddle toward vertical alignment with the ball
///
/// Reacts to where the ball is now, not where it will be, so fast or
/// steep shots can beat it.
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, max_speed: f32, deadzone: f32, layout: &Layout) {
    let target = ball.pos.y - layout.paddle_height / 2.0;
    let delta = target - paddle.top;
    if delta.abs() > deadzone {
        paddle.top += delta.signum() * max_speed.min(delta.abs());
        paddle.top = layout.clamp_paddle_top(paddle.top);
    }
}

/// Run the tracker for every CPU-controlled paddle
pub fn move_cpu_paddles(world: &mut World, layout: &Layout, config: &Config) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);

    let Some(ball) = ball else {
        return; // No ball in world
    };

    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &CpuControl)>() {
        track_ball(paddle, &ball, layout.cpu_speed, config.cpu_deadzone, layout);
    }
}
