//! Read-only frame state handed to the renderer

use glam::Vec2;

use crate::{Aabb, Score};

/// Everything a renderer needs to draw one frame
///
/// Plain copyable data: it is safe to send across threads and holds no
/// reference back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub arena_width: f32,
    pub arena_height: f32,
    pub left_paddle: Aabb,
    pub right_paddle: Aabb,
    pub ball_center: Vec2,
    pub ball_radius: f32,
    pub score: Score,
    pub paused: bool,
    pub tick: u64,
}
