//! Render sinks
//!
//! The simulation thread hands one [`RenderState`] per tick to a sink. Sinks
//! run on that thread, so they must be `Send` and should return quickly.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use game_core::RenderState;

/// Receives one frame per tick
pub trait RenderSink: Send {
    fn present(&mut self, frame: &RenderState);
}

impl<F> RenderSink for F
where
    F: FnMut(&RenderState) + Send,
{
    fn present(&mut self, frame: &RenderState) {
        self(frame)
    }
}

/// Logs a summary line every `every` frames at debug level
#[derive(Debug)]
pub struct LogSink {
    every: u64,
    frames: u64,
}

impl LogSink {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn present(&mut self, frame: &RenderState) {
        self.frames += 1;
        if self.frames % self.every == 0 {
            log::debug!(
                "frame {} tick {}: ball ({:.1}, {:.1}) score {}-{}{}",
                self.frames,
                frame.tick,
                frame.ball_center.x,
                frame.ball_center.y,
                frame.score.player,
                frame.score.computer,
                if frame.paused { " [paused]" } else { "" }
            );
        }
    }
}

/// Fans each frame out to two sinks
#[derive(Debug)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: RenderSink, B: RenderSink> RenderSink for Tee<A, B> {
    fn present(&mut self, frame: &RenderState) {
        self.0.present(frame);
        self.1.present(frame);
    }
}

#[derive(Debug, Default)]
struct Recorded {
    last: Option<RenderState>,
    count: u64,
}

/// Keeps the most recent frame and a running frame count
///
/// Clones share the same record, so one clone can be boxed into the loop
/// while another observes it.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder(Arc<Mutex<Recorded>>);

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn last(&self) -> Option<RenderState> {
        self.lock().last
    }

    pub fn count(&self) -> u64 {
        self.lock().count
    }
}

impl RenderSink for FrameRecorder {
    fn present(&mut self, frame: &RenderState) {
        let mut recorded = self.lock();
        recorded.last = Some(*frame);
        recorded.count += 1;
    }
}
