use std::time::Duration;

use game_core::GameError;
use thiserror::Error;

/// Errors raised by the loop scheduler
#[derive(Debug, Error)]
pub enum LoopError {
    #[error(transparent)]
    Arena(#[from] GameError),

    #[error("invalid view size {width}x{height}: both must be positive")]
    InvalidView { width: f32, height: f32 },

    #[error("no arena size known; call start first")]
    NotStarted,

    #[error("simulation thread did not exit within {0:?}")]
    ShutdownTimeout(Duration),

    #[error("simulation thread panicked")]
    ThreadPanicked,

    #[error("simulation was lost to a thread that never shut down")]
    Abandoned,

    #[error("failed to spawn simulation thread: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoopError>;
