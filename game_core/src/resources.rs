/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Measured seconds covered by the last step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,   // Human, left paddle
    pub computer: u32, // CPU, right paddle
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_computer(&mut self) {
        self.computer += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform angle in `[-max_angle, max_angle]`
    pub fn serve_angle(&mut self, max_angle: f32) -> f32 {
        use rand::Rng;
        if max_angle <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-max_angle..=max_angle)
    }

    /// Coin flip for the opening serve direction
    pub fn serve_toward_right(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.computer_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn any_score(&self) -> bool {
        self.player_scored || self.computer_scored
    }
}

/// Control input handed over from the input thread
///
/// Only the latest paddle target matters; older targets are overwritten.
#[derive(Debug, Clone, Default)]
pub struct ControlQueue {
    pub left_paddle_top: Option<f32>,
}

impl ControlQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_paddle_top = None;
    }

    pub fn push_paddle_top(&mut self, top: f32) {
        self.left_paddle_top = Some(top);
    }

    pub fn take_paddle_top(&mut self) -> Option<f32> {
        self.left_paddle_top.take()
    }
}
