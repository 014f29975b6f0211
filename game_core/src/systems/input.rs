use hecs::World;

use crate::{ControlQueue, Layout, Paddle, TouchControl};

/// Apply the latest touch target to the touch-controlled paddle
pub fn ingest_controls(world: &mut World, queue: &mut ControlQueue, layout: &Layout) {
    let Some(top) = queue.take_paddle_top().filter(|top| top.is_finite()) else {
        return;
    };

    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &TouchControl)>() {
        paddle.top = layout.clamp_paddle_top(top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Arena, Config, Side};

    fn setup() -> (World, Layout) {
        let arena = Arena::new(800.0, 480.0).unwrap();
        let layout = Layout::new(&arena, &Config::new());
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, layout.paddle_spawn_top());
        create_paddle(&mut world, Side::Right, layout.paddle_spawn_top());
        (world, layout)
    }

    fn tops(world: &World) -> (f32, f32) {
        let mut left = f32::NAN;
        let mut right = f32::NAN;
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left = paddle.top,
                Side::Right => right = paddle.top,
            }
        }
        (left, right)
    }

    #[test]
    fn test_ingest_moves_only_touch_paddle() {
        let (mut world, layout) = setup();
        let mut queue = ControlQueue::new();
        queue.push_paddle_top(100.0);

        ingest_controls(&mut world, &mut queue, &layout);

        let (left, right) = tops(&world);
        assert_eq!(left, 100.0);
        assert_eq!(right, layout.paddle_spawn_top());
        assert!(queue.left_paddle_top.is_none(), "Target should be consumed");
    }

    #[test]
    fn test_ingest_clamps_target() {
        let (mut world, layout) = setup();
        let mut queue = ControlQueue::new();
        queue.push_paddle_top(10_000.0);

        ingest_controls(&mut world, &mut queue, &layout);

        assert_eq!(tops(&world).0, layout.max_paddle_top());
    }

    #[test]
    fn test_ingest_drops_non_finite_target() {
        let (mut world, layout) = setup();
        let mut queue = ControlQueue::new();
        queue.push_paddle_top(f32::NAN);

        ingest_controls(&mut world, &mut queue, &layout);

        assert_eq!(tops(&world).0, layout.paddle_spawn_top());
        assert!(queue.left_paddle_top.is_none());
    }

    #[test]
    fn test_ingest_without_target_leaves_paddle() {
        let (mut world, layout) = setup();
        let mut queue = ControlQueue::new();

        ingest_controls(&mut world, &mut queue, &layout);

        assert_eq!(tops(&world).0, layout.paddle_spawn_top());
    }
}
