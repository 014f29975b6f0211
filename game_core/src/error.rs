use thiserror::Error;

/// Errors raised by the simulation core
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GameError {
    #[error("invalid arena dimensions {width}x{height}: both must be positive")]
    InvalidArena { width: f32, height: f32 },
}
