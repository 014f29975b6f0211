//! Threaded host for the Pong simulation
//!
//! Runs [`game_core::Simulation`] at a fixed cadence on its own thread, maps
//! multi-touch input onto the left paddle and hands frames to a render sink.

pub mod controls;
pub mod error;
pub mod fsm;
pub mod input;
pub mod pacer;
pub mod render;
pub mod scheduler;

pub use controls::{Controls, SharedControls};
pub use error::{LoopError, Result};
pub use fsm::{LoopAction, LoopFsm, LoopState, TransitionResult};
pub use input::{PaddleMapping, PointerEvent, PointerId, PointerPhase, TouchInput, TouchResponse};
pub use pacer::{FramePacer, Pace};
pub use render::{FrameRecorder, LogSink, RenderSink, Tee};
pub use scheduler::GameLoop;
