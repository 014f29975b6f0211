//! The slice of game state owned by the input side
//!
//! Touch handling writes here; the simulation thread copies it out once per
//! tick. Nothing else crosses between the two threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Controls {
    pub left_paddle_top: Option<f32>, // Latest target, consumed by the next tick
    pub paused: bool,
}

/// Cloneable handle to the input-owned controls
#[derive(Debug, Clone, Default)]
pub struct SharedControls(Arc<Mutex<Controls>>);

impl SharedControls {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Controls> {
        // A panic mid-write cannot leave two plain fields inconsistent
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self) -> Controls {
        *self.lock()
    }

    pub fn set_paddle_top(&self, top: f32) {
        self.lock().left_paddle_top = Some(top);
    }

    pub fn clear_paddle_top(&self) {
        self.lock().left_paddle_top = None;
    }

    pub fn set_paused(&self, paused: bool) {
        self.lock().paused = paused;
    }

    /// Flip the pause flag, returning the new value
    pub fn toggle_paused(&self) -> bool {
        let mut controls = self.lock();
        controls.paused = !controls.paused;
        controls.paused
    }

    pub fn paused(&self) -> bool {
        self.lock().paused
    }

    /// Copy the controls for one tick, consuming the paddle target
    pub fn take_for_tick(&self) -> Controls {
        let mut controls = self.lock();
        let out = *controls;
        controls.left_paddle_top = None;
        out
    }
}
