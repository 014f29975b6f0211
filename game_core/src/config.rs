use std::time::Duration;

use crate::params::Params;

/// Game configuration
///
/// Every tunable the simulation and the loop read lives here, so tests can
/// swap in deterministic values instead of patching literals.
#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: u32,
    pub shutdown_timeout: Duration,
    pub paddle_width_ratio: f32,
    pub paddle_height_ratio: f32,
    pub paddle_inset_ratio: f32,
    pub ball_radius_ratio: f32,
    pub ball_speed_ratio: f32,
    pub ball_speed_max_ratio: f32,
    pub ball_speed_increase: f32,
    pub max_bounce_angle_deg: f32,
    pub serve_angle_deg: f32,
    pub paddle_exit_gap: f32,
    pub cpu_speed_ratio: f32,
    pub cpu_deadzone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Params::TICK_RATE,
            shutdown_timeout: Duration::from_millis(Params::SHUTDOWN_TIMEOUT_MS),
            paddle_width_ratio: Params::PADDLE_WIDTH_RATIO,
            paddle_height_ratio: Params::PADDLE_HEIGHT_RATIO,
            paddle_inset_ratio: Params::PADDLE_INSET_RATIO,
            ball_radius_ratio: Params::BALL_RADIUS_RATIO,
            ball_speed_ratio: Params::BALL_SPEED_RATIO,
            ball_speed_max_ratio: Params::BALL_SPEED_MAX_RATIO,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            max_bounce_angle_deg: Params::MAX_BOUNCE_ANGLE_DEG,
            serve_angle_deg: Params::SERVE_ANGLE_DEG,
            paddle_exit_gap: Params::PADDLE_EXIT_GAP,
            cpu_speed_ratio: Params::CPU_SPEED_RATIO,
            cpu_deadzone: Params::CPU_DEADZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wall-clock length of one tick at the target rate
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    /// Maximum deflection off a paddle, in radians
    pub fn max_bounce_angle(&self) -> f32 {
        self.max_bounce_angle_deg.to_radians()
    }

    /// Half-width of the serve cone, in radians
    pub fn serve_angle(&self) -> f32 {
        self.serve_angle_deg.to_radians()
    }
}
