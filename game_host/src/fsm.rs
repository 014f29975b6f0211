//! Loop State Machine
//!
//! Tracks whether the simulation thread is stopped, ticking, or ticking
//! with physics suspended.

/// Loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
    Paused,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Start,
    Pause,
    Resume,
    Stop,
}

/// Result of a state transition
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: LoopState,
    to_state: LoopState,
    action: LoopAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> LoopState {
        self.from_state
    }

    pub fn to_state(&self) -> LoopState {
        self.to_state
    }

    pub fn action(&self) -> LoopAction {
        self.action
    }
}

/// Loop Finite State Machine
#[derive(Debug)]
pub struct LoopFsm {
    state: LoopState,
}

impl LoopFsm {
    pub fn new() -> Self {
        Self {
            state: LoopState::Stopped,
        }
    }

    /// Get current state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: LoopAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    ///
    /// Invalid transitions leave the state untouched and report failure, so
    /// repeating a signal (pause while paused, resume while running) is a
    /// harmless no-op.
    pub fn transition(&mut self, action: LoopAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: LoopAction) -> Option<LoopState> {
        match (self.state, action) {
            (LoopState::Stopped, LoopAction::Start) => Some(LoopState::Running),

            (LoopState::Running, LoopAction::Pause) => Some(LoopState::Paused),
            (LoopState::Running, LoopAction::Stop) => Some(LoopState::Stopped),

            (LoopState::Paused, LoopAction::Resume) => Some(LoopState::Running),
            (LoopState::Paused, LoopAction::Stop) => Some(LoopState::Stopped),

            _ => None,
        }
    }

    /// Check if the simulation thread should be alive
    pub fn is_active(&self) -> bool {
        matches!(self.state, LoopState::Running | LoopState::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.state == LoopState::Paused
    }
}

impl Default for LoopFsm {
    fn default() -> Self {
        Self::new()
    }
}
