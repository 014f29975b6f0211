use glam::Vec2;

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub top: f32, // Top edge (clamped to arena)
}

impl Paddle {
    pub fn new(side: Side, top: f32) -> Self {
        Self { side, top }
    }
}

/// Marks the paddle driven by touch input
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchControl;

/// Marks the paddle driven by the CPU tracker
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuControl;

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Centre
    pub vel: Vec2, // Units per tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Serve from `center` at a fixed angle (radians, 0 = horizontal)
    pub fn serve_at_angle(&mut self, center: Vec2, toward_right: bool, speed: f32, angle: f32) {
        let sign = if toward_right { 1.0 } else { -1.0 };
        self.pos = center;
        self.vel = Vec2::new(sign * speed * angle.cos(), speed * angle.sin());
    }

    /// Serve from `center` at a random angle within +/- `max_angle`
    pub fn serve(
        &mut self,
        center: Vec2,
        toward_right: bool,
        speed: f32,
        max_angle: f32,
        rng: &mut crate::GameRng,
    ) {
        let angle = rng.serve_angle(max_angle);
        self.serve_at_angle(center, toward_right, speed, angle);
    }
}
