/// Game tuning parameters for Pong
///
/// Sizes are ratios of the arena so gameplay scales with the screen.
/// Speeds are expressed in arena units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Loop
    pub const TICK_RATE: u32 = 60;
    pub const SHUTDOWN_TIMEOUT_MS: u64 = 500;

    // Paddle
    pub const PADDLE_WIDTH_RATIO: f32 = 0.03; // of arena width
    pub const PADDLE_HEIGHT_RATIO: f32 = 0.28; // of arena height
    pub const PADDLE_INSET_RATIO: f32 = 0.03; // gap between arena edge and paddle

    // Ball
    pub const BALL_RADIUS_RATIO: f32 = 0.0065; // of width + height
    pub const BALL_SPEED_RATIO: f32 = 0.0105; // of arena width, per tick
    pub const BALL_SPEED_MAX_RATIO: f32 = 0.02; // of arena width, per tick
    pub const BALL_SPEED_INCREASE: f32 = 1.03; // Multiply speed on paddle hit
    pub const MAX_BOUNCE_ANGLE_DEG: f32 = 75.0;
    pub const SERVE_ANGLE_DEG: f32 = 30.0; // Serve within +/- this angle
    pub const PADDLE_EXIT_GAP: f32 = 0.5; // Push-out past the paddle face

    // CPU paddle
    pub const CPU_SPEED_RATIO: f32 = 0.0085; // of arena height, per tick
    pub const CPU_DEADZONE: f32 = 2.0;
}
