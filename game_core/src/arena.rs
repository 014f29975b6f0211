use glam::Vec2;

use crate::{Config, GameError, Side};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self::new(top_left, top_left + size)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Playing field size in arbitrary units
///
/// Only constructible with strictly positive, finite dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Result<Self, GameError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(GameError::InvalidArena { width, height })
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Sizes and speeds derived from the arena
///
/// Recomputed whenever the arena changes so gameplay scales with the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub left_paddle_x: f32,
    pub right_paddle_x: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_speed_max: f32,
    pub cpu_speed: f32,
    arena_height: f32,
}

impl Layout {
    pub fn new(arena: &Arena, config: &Config) -> Self {
        let (w, h) = (arena.width(), arena.height());
        let paddle_width = w * config.paddle_width_ratio;
        let inset = w * config.paddle_inset_ratio;
        Self {
            paddle_width,
            paddle_height: h * config.paddle_height_ratio,
            left_paddle_x: inset,
            right_paddle_x: w - inset - paddle_width,
            ball_radius: (w + h) * config.ball_radius_ratio,
            ball_speed: w * config.ball_speed_ratio,
            ball_speed_max: w * config.ball_speed_max_ratio,
            cpu_speed: h * config.cpu_speed_ratio,
            arena_height: h,
        }
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_paddle_x,
            Side::Right => self.right_paddle_x,
        }
    }

    /// Top position that centres a paddle vertically
    pub fn paddle_spawn_top(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Largest legal paddle top
    pub fn max_paddle_top(&self) -> f32 {
        (self.arena_height - self.paddle_height).max(0.0)
    }

    /// Clamp a paddle top so the paddle stays fully inside the arena
    pub fn clamp_paddle_top(&self, top: f32) -> f32 {
        top.clamp(0.0, self.max_paddle_top())
    }

    pub fn paddle_rect(&self, side: Side, top: f32) -> Aabb {
        Aabb::from_top_left(
            Vec2::new(self.paddle_x(side), top),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_800x480() -> Layout {
        let arena = Arena::new(800.0, 480.0).unwrap();
        Layout::new(&arena, &Config::new())
    }

    #[test]
    fn test_arena_rejects_non_positive_dimensions() {
        assert!(Arena::new(0.0, 480.0).is_err());
        assert!(Arena::new(800.0, -1.0).is_err());
        assert!(Arena::new(f32::NAN, 480.0).is_err());
        assert_eq!(
            Arena::new(-5.0, 10.0),
            Err(GameError::InvalidArena {
                width: -5.0,
                height: 10.0
            })
        );
    }

    #[test]
    fn test_layout_scales_with_arena() {
        let layout = layout_800x480();
        assert!((layout.paddle_width - 24.0).abs() < 1e-4);
        assert!((layout.paddle_height - 134.4).abs() < 1e-3);
        assert!((layout.left_paddle_x - 24.0).abs() < 1e-4);
        assert!((layout.right_paddle_x - 752.0).abs() < 1e-3);
        assert!((layout.ball_radius - 8.32).abs() < 1e-3);
        assert!((layout.ball_speed - 8.4).abs() < 1e-4);
        assert!((layout.ball_speed_max - 16.0).abs() < 1e-4);
        assert!((layout.cpu_speed - 4.08).abs() < 1e-4);
    }

    #[test]
    fn test_layout_clamp_paddle_top() {
        let layout = layout_800x480();
        assert_eq!(layout.clamp_paddle_top(-50.0), 0.0);
        assert_eq!(layout.clamp_paddle_top(1000.0), layout.max_paddle_top());
        assert_eq!(layout.clamp_paddle_top(100.0), 100.0);
    }

    #[test]
    fn test_paddle_rect_right_edge_at_97_percent() {
        let layout = layout_800x480();
        let rect = layout.paddle_rect(Side::Right, 10.0);
        assert!((rect.max.x - 776.0).abs() < 1e-3);
        assert_eq!(rect.min.y, 10.0);
        assert!((rect.height() - layout.paddle_height).abs() < 1e-6);
    }

    #[test]
    fn test_aabb_from_top_left() {
        let rect = Aabb::from_top_left(Vec2::new(10.0, 20.0), Vec2::new(4.0, 8.0));
        assert_eq!(rect, Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(14.0, 28.0)));
        assert_eq!(rect.center(), Vec2::new(12.0, 24.0));
        assert_eq!(rect.width(), 4.0);
    }
}
