//! Deterministic Pong simulation
//!
//! One touch-driven paddle on the left, one CPU paddle on the right. Sizes
//! and speeds are derived from the arena, velocities are per tick, and the
//! only randomness is the seeded serve angle.

pub mod arena;
pub mod components;
pub mod config;
pub mod error;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod snapshot;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    arena: &Arena,
    layout: &Layout,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    controls: &mut ControlQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply the latest touch target to the left paddle
    ingest_controls(world, controls, layout);

    // 2. CPU paddle tracks the ball
    move_cpu_paddles(world, layout, config);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (walls first, then paddles)
    check_collisions(world, arena, layout, config, events);

    // 5. Check scoring (ball exited arena)
    check_scoring(world, arena, layout, config, score, events, rng);

    // Update time
    time.now += time.dt;
}

/// Helper to create a paddle entity
///
/// The left paddle follows touch input, the right one is CPU controlled.
pub fn create_paddle(world: &mut World, side: Side, top: f32) -> hecs::Entity {
    match side {
        Side::Left => world.spawn((Paddle::new(side, top), TouchControl)),
        Side::Right => world.spawn((Paddle::new(side, top), CpuControl)),
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
