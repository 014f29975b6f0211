use hecs::World;

use crate::{Aabb, Arena, Ball, Config, Events, Layout, Paddle, Side};

/// Reflect the ball off the top or bottom wall
///
/// Returns true when a wall was hit. The ball edge is left exactly on the wall.
pub fn bounce_off_walls(ball: &mut Ball, radius: f32, arena_height: f32) -> bool {
    if ball.pos.y - radius <= 0.0 {
        ball.pos.y = radius;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + radius >= arena_height {
        ball.pos.y = arena_height - radius;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Bounce the ball off a paddle face if it reached it
///
/// The outgoing angle depends on where the ball met the paddle: dead centre
/// goes straight back, the tips deflect by the configured maximum. Speed
/// grows per hit up to the layout cap. Returns true on a hit.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    side: Side,
    rect: &Aabb,
    layout: &Layout,
    config: &Config,
) -> bool {
    let radius = layout.ball_radius;
    // Centre still in front of the back edge; a ball behind the paddle is lost
    let reached_face = match side {
        Side::Left => ball.pos.x - radius <= rect.max.x && ball.pos.x >= rect.min.x,
        Side::Right => ball.pos.x + radius >= rect.min.x && ball.pos.x <= rect.max.x,
    };
    let within_span = ball.pos.y >= rect.min.y && ball.pos.y <= rect.max.y;
    if !(reached_face && within_span) {
        return false;
    }

    // Positive when the ball is above the paddle centre
    let half_height = rect.height() / 2.0;
    let relative = rect.center().y - ball.pos.y;
    let normalized = (relative / half_height).clamp(-1.0, 1.0);
    let bounce_angle = normalized * config.max_bounce_angle();

    let speed = (ball.speed() * config.ball_speed_increase).min(layout.ball_speed_max);
    let direction = match side {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };
    ball.vel.x = direction * speed * bounce_angle.cos();
    ball.vel.y = -speed * bounce_angle.sin();

    // Park the ball outside the face so the next tick cannot hit again
    ball.pos.x = match side {
        Side::Left => rect.max.x + radius + config.paddle_exit_gap,
        Side::Right => rect.min.x - radius - config.paddle_exit_gap,
    };
    true
}

/// Check ball collisions with walls, then with each paddle
pub fn check_collisions(
    world: &mut World,
    arena: &Arena,
    layout: &Layout,
    config: &Config,
    events: &mut Events,
) {
    // Collect paddle rects without holding a borrow on the world
    let mut paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, layout.paddle_rect(p.side, p.top)))
        .collect();
    // Left is always resolved before right
    paddles.sort_by_key(|(side, _)| *side == Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, layout.ball_radius, arena.height()) {
            events.ball_hit_wall = true;
        }

        for (side, rect) in &paddles {
            if bounce_off_paddle(ball, *side, rect, layout, config) {
                events.ball_hit_paddle = true;
            }
        }
    }
}
