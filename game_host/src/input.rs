//! Touch input handling
//!
//! Turns a stream of multi-touch pointer events into a single controlling
//! finger for the left paddle, plus tap-to-pause on the right half.

use game_core::{Arena, Layout};

pub type PointerId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer event in view coordinates
///
/// `pointer_count` is the number of pointers down when the event fired,
/// including the one going up for [`PointerPhase::Up`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub id: PointerId,
    pub x: f32,
    pub y: f32,
    pub pointer_count: usize,
}

impl PointerEvent {
    pub fn down(id: PointerId, x: f32, y: f32, pointer_count: usize) -> Self {
        Self::new(PointerPhase::Down, id, x, y, pointer_count)
    }

    pub fn moved(id: PointerId, x: f32, y: f32, pointer_count: usize) -> Self {
        Self::new(PointerPhase::Move, id, x, y, pointer_count)
    }

    pub fn up(id: PointerId, x: f32, y: f32, pointer_count: usize) -> Self {
        Self::new(PointerPhase::Up, id, x, y, pointer_count)
    }

    pub fn cancel() -> Self {
        Self::new(PointerPhase::Cancel, 0, 0.0, 0.0, 0)
    }

    fn new(phase: PointerPhase, id: PointerId, x: f32, y: f32, pointer_count: usize) -> Self {
        Self {
            phase,
            id,
            x,
            y,
            pointer_count,
        }
    }
}

/// View-to-arena conversion for paddle placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleMapping {
    pub view_width: f32,
    pub view_height: f32,
    pub arena_height: f32,
    pub paddle_height: f32,
}

impl PaddleMapping {
    pub fn new(view_width: f32, view_height: f32, arena: &Arena, layout: &Layout) -> Self {
        Self {
            view_width,
            view_height,
            arena_height: arena.height(),
            paddle_height: layout.paddle_height,
        }
    }

    /// Paddle top that centres the paddle on a touch at `touch_y`
    pub fn paddle_top(&self, touch_y: f32) -> f32 {
        let top = (touch_y / self.view_height) * self.arena_height - self.paddle_height / 2.0;
        top.clamp(0.0, (self.arena_height - self.paddle_height).max(0.0))
    }

    /// Paddle top for a touch, or `None` when the view size makes it meaningless
    pub fn target(&self, touch_y: f32) -> Option<f32> {
        Some(self.paddle_top(touch_y)).filter(|top| top.is_finite())
    }

    pub fn in_left_half(&self, x: f32) -> bool {
        x <= self.view_width / 2.0
    }
}

/// What the caller should apply after an event
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchResponse {
    pub paddle_top: Option<f32>,
    pub toggle_pause: bool,
}

impl TouchResponse {
    fn paddle(top: Option<f32>) -> Self {
        Self {
            paddle_top: top,
            toggle_pause: false,
        }
    }

    fn toggle() -> Self {
        Self {
            paddle_top: None,
            toggle_pause: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TrackedPointer {
    id: PointerId,
    x: f32,
    y: f32,
}

/// Multi-touch to single-paddle mapper
#[derive(Debug, Clone)]
pub struct TouchInput {
    mapping: PaddleMapping,
    active: Option<PointerId>,
    last_touch_y: f32,
    pointers: Vec<TrackedPointer>, // Arrival order, first is primary
}

impl TouchInput {
    pub fn new(mapping: PaddleMapping) -> Self {
        Self {
            mapping,
            active: None,
            last_touch_y: 0.0,
            pointers: Vec::new(),
        }
    }

    pub fn set_mapping(&mut self, mapping: PaddleMapping) {
        self.mapping = mapping;
    }

    pub fn mapping(&self) -> &PaddleMapping {
        &self.mapping
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active
    }

    pub fn last_touch_y(&self) -> f32 {
        self.last_touch_y
    }

    pub fn handle(&mut self, event: &PointerEvent) -> TouchResponse {
        match event.phase {
            PointerPhase::Down => self.on_down(event),
            PointerPhase::Move => self.on_move(event),
            PointerPhase::Up => self.on_up(event),
            PointerPhase::Cancel => {
                self.reset();
                TouchResponse::default()
            }
        }
    }

    fn on_down(&mut self, event: &PointerEvent) -> TouchResponse {
        if event.pointer_count <= 1 {
            // A fresh gesture: anything still tracked lost its up event
            self.pointers.clear();
        }
        let primary = self.pointers.is_empty();
        self.track(event);

        if self.resolved_active().is_some() {
            return TouchResponse::default();
        }

        if self.mapping.in_left_half(event.x) {
            self.active = Some(event.id);
            self.last_touch_y = event.y;
            TouchResponse::paddle(self.mapping.target(event.y))
        } else if primary {
            TouchResponse::toggle()
        } else {
            TouchResponse::default()
        }
    }

    fn on_move(&mut self, event: &PointerEvent) -> TouchResponse {
        self.track(event);

        match self.active {
            Some(active) if active == event.id => {
                self.last_touch_y = event.y;
                TouchResponse::paddle(self.mapping.target(event.y))
            }
            Some(active) if self.resolved_active().is_none() => {
                // Active finger vanished without an up event; follow the primary one
                match self.pointers.first() {
                    Some(primary) if primary.id == event.id => {
                        log::trace!("pointer {active} unresolved, following primary {}", event.id);
                        self.last_touch_y = event.y;
                        TouchResponse::paddle(self.mapping.target(event.y))
                    }
                    _ => TouchResponse::default(),
                }
            }
            _ => TouchResponse::default(),
        }
    }

    fn on_up(&mut self, event: &PointerEvent) -> TouchResponse {
        self.pointers.retain(|p| p.id != event.id);

        if event.pointer_count <= 1 || self.pointers.is_empty() {
            self.reset();
            return TouchResponse::default();
        }

        if self.active != Some(event.id) {
            return TouchResponse::default();
        }

        let mapping = self.mapping;
        match self.pointers.iter().find(|p| mapping.in_left_half(p.x)) {
            Some(next) => {
                self.active = Some(next.id);
                self.last_touch_y = next.y;
                TouchResponse::paddle(mapping.target(next.y))
            }
            None => {
                // Paddle stays where the released finger left it
                self.active = None;
                TouchResponse::default()
            }
        }
    }

    fn track(&mut self, event: &PointerEvent) {
        match self.pointers.iter_mut().find(|p| p.id == event.id) {
            Some(pointer) => {
                pointer.x = event.x;
                pointer.y = event.y;
            }
            None => self.pointers.push(TrackedPointer {
                id: event.id,
                x: event.x,
                y: event.y,
            }),
        }
    }

    fn resolved_active(&self) -> Option<PointerId> {
        self.active
            .filter(|id| self.pointers.iter().any(|p| p.id == *id))
    }

    fn reset(&mut self) {
        self.active = None;
        self.pointers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Config;

    fn input_800x480() -> TouchInput {
        let arena = Arena::new(800.0, 480.0).unwrap();
        let layout = Layout::new(&arena, &Config::new());
        TouchInput::new(PaddleMapping::new(800.0, 480.0, &arena, &layout))
    }

    #[test]
    fn test_touch_at_top_clamps_paddle_to_zero() {
        let mut input = input_800x480();

        let response = input.handle(&PointerEvent::down(1, 100.0, 0.0, 1));

        assert_eq!(response.paddle_top, Some(0.0));
        assert!(!response.toggle_pause);
        assert_eq!(input.active_pointer(), Some(1));
    }

    #[test]
    fn test_touch_centres_paddle_on_finger() {
        let mut input = input_800x480();
        let paddle_height = input.mapping().paddle_height;

        let response = input.handle(&PointerEvent::down(1, 100.0, 240.0, 1));

        let top = response.paddle_top.unwrap();
        assert!((top + paddle_height / 2.0 - 240.0).abs() < 1e-3);
    }

    #[test]
    fn test_view_scaling_converts_to_arena_space() {
        let arena = Arena::new(800.0, 480.0).unwrap();
        let layout = Layout::new(&arena, &Config::new());
        // Display is twice as tall as the arena
        let mut input = TouchInput::new(PaddleMapping::new(400.0, 960.0, &arena, &layout));

        let response = input.handle(&PointerEvent::down(1, 10.0, 480.0, 1));

        let expected = 240.0 - layout.paddle_height / 2.0;
        assert!((response.paddle_top.unwrap() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_primary_tap_on_right_toggles_pause() {
        let mut input = input_800x480();

        let response = input.handle(&PointerEvent::down(1, 700.0, 100.0, 1));

        assert!(response.toggle_pause);
        assert_eq!(response.paddle_top, None);
        assert_eq!(input.active_pointer(), None);
    }

    #[test]
    fn test_secondary_tap_on_right_does_not_toggle() {
        let mut input = input_800x480();
        input.handle(&PointerEvent::down(1, 700.0, 100.0, 1));

        let response = input.handle(&PointerEvent::down(2, 650.0, 100.0, 2));

        assert_eq!(response, TouchResponse::default());
    }

    #[test]
    fn test_move_of_active_pointer_moves_paddle() {
        let mut input = input_800x480();
        input.handle(&PointerEvent::down(1, 100.0, 200.0, 1));

        let response = input.handle(&PointerEvent::moved(1, 120.0, 300.0, 1));

        assert_eq!(response.paddle_top, Some(input.mapping().paddle_top(300.0)));
        assert_eq!(input.last_touch_y(), 300.0);
    }

    #[test]
    fn test_zero_view_height_yields_no_target() {
        let arena = Arena::new(800.0, 480.0).unwrap();
        let layout = Layout::new(&arena, &Config::new());
        let mut input = TouchInput::new(PaddleMapping::new(0.0, 0.0, &arena, &layout));

        let response = input.handle(&PointerEvent::down(1, 0.0, 0.0, 1));

        assert_eq!(response.paddle_top, None);
        assert_eq!(input.active_pointer(), Some(1));
    }

    #[test]
    fn test_second_finger_does_not_steal_control() {
        let mut input = input_800x480();
        input.handle(&PointerEvent::down(1, 100.0, 200.0, 1));

        let down = input.handle(&PointerEvent::down(2, 150.0, 50.0, 2));
        let moved = input.handle(&PointerEvent::moved(2, 150.0, 60.0, 2));

        assert_eq!(down, TouchResponse::default());
        assert_eq!(moved, TouchResponse::default());
        assert_eq!(input.active_pointer(), Some(1));
    }

    #[test]
    fn test_release_of_active_promotes_left_half_pointer() {
        let mut input = input_800x480();
        input.handle(&PointerEvent::down(1, 100.0, 200.0, 1));
        input.handle(&PointerEvent::down(2, 150.0, 50.0, 2));
        input.handle(&PointerEvent::moved(2, 150.0, 80.0, 2));

        let response = input.handle(&PointerEvent::up(1, 100.0, 200.0, 2));

        assert_eq!(input.active_pointer(), Some(2));
        assert_eq!(input.last_touch_y(), 80.0);
        assert_eq!(response.paddle_top, Some(input.mapping().paddle_top(80.0)));

        let follow = input.handle(&PointerEvent::moved(2, 150.0, 400.0, 1));
        assert_eq!(follow.paddle_top, Some(input.mapping().paddle_top(400.0)));
    }

    #[test]
    fn test_release_of_active_with_only_right_pointer_idles() {
        let mut input = input_800x480();
        input.handle(&PointerEvent::down(1, 100.0, 200.0, 1));
        input.handle(&PointerEvent::down(2, 700.0, 50.0, 2));

        let response = input.handle(&PointerEvent::up(1, 100.0, 200.0, 2));

        assert_eq!(response, TouchResponse::default());
        assert_eq!(input.active_pointer(), None);
        let moved = input.handle(&PointerEvent::moved(2, 700.0, 300.0, 1));
        assert_eq!(moved, TouchResponse::default());
    }

    #[test]
    fn test_release_of_non_active_is_noop() {
        let mut input = input_800x480();
        input.handle(&PointerEvent::down(1, 100.0, 200.0, 1));
        input.handle(&PointerEvent::down(2, 150.0, 50.0, 2));

        let response = input.handle(&PointerEvent::up(2, 150.0, 50.0, 2));

        assert_eq!(response, TouchResponse::default());
        assert_eq!(input.active_pointer(), Some(1));
    }

    #[test]
    fn test_last_release_clears_active() {
        let mut input = input_800x480();
        input.handle(&PointerEvent::down(1, 100.0, 200.0, 1));

        let response = input.handle(&PointerEvent::up(1, 100.0, 200.0, 1));

        assert_eq!(response, TouchResponse::default());
        assert_eq!(input.active_pointer(), None);
        // A new touch takes over again
        let again = input.handle(&PointerEvent::down(5, 10.0, 480.0, 1));
        assert_eq!(again.paddle_top, Some(input.mapping().paddle_top(480.0)));
    }

    #[test]
    fn test_cancel_clears_everything() {
        let mut input = input_800x480();
        input.handle(&PointerEvent::down(1, 100.0, 200.0, 1));
        input.handle(&PointerEvent::down(2, 150.0, 50.0, 2));

        input.handle(&PointerEvent::cancel());

        assert_eq!(input.active_pointer(), None);
        let moved = input.handle(&PointerEvent::moved(1, 100.0, 300.0, 1));
        assert_eq!(moved, TouchResponse::default());
    }

    #[test]
    fn test_lost_up_falls_back_to_primary() {
        let mut input = input_800x480();
        input.handle(&PointerEvent::down(1, 100.0, 200.0, 1));
        // Pointer 1 never reported its release; a new gesture starts on the right
        let tap = input.handle(&PointerEvent::down(7, 700.0, 100.0, 1));
        assert!(tap.toggle_pause);
        assert_eq!(input.active_pointer(), Some(1));

        let moved = input.handle(&PointerEvent::moved(7, 700.0, 300.0, 1));

        assert_eq!(moved.paddle_top, Some(input.mapping().paddle_top(300.0)));
        assert_eq!(input.last_touch_y(), 300.0);
    }

    #[test]
    fn test_lost_up_then_left_touch_takes_over() {
        let mut input = input_800x480();
        input.handle(&PointerEvent::down(1, 100.0, 200.0, 1));

        let response = input.handle(&PointerEvent::down(2, 50.0, 100.0, 1));

        assert_eq!(input.active_pointer(), Some(2));
        assert_eq!(response.paddle_top, Some(input.mapping().paddle_top(100.0)));
    }
}
