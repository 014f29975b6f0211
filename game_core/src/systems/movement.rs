use hecs::World;

use crate::Ball;

/// Move ball by one tick of velocity
///
/// Velocity is already in units per tick, so the measured frame time does
/// not scale the step.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_move_ball_adds_velocity_once() {
        let mut world = World::new();
        crate::create_ball(&mut world, Vec2::new(10.0, 10.0), Vec2::new(3.0, -2.0));

        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(13.0, 8.0));
        }
    }
}
