//! Authoritative game state for one session

use glam::Vec2;
use hecs::World;

use crate::{
    create_ball, create_paddle, step, Arena, Ball, Config, ControlQueue, Events, GameRng, Layout,
    Paddle, RenderState, Score, Side, Time,
};

/// Ball, paddles, score and pause flag for one arena
///
/// Owned by whichever thread runs the loop. Other threads only hand in a
/// paddle target and the pause flag, and read back [`RenderState`] copies.
pub struct Simulation {
    world: World,
    arena: Arena,
    layout: Layout,
    config: Config,
    time: Time,
    score: Score,
    events: Events,
    controls: ControlQueue,
    rng: GameRng,
    paused: bool,
    tick: u64,
}

impl Simulation {
    pub fn new(arena: Arena, config: Config, seed: u64) -> Self {
        let layout = Layout::new(&arena, &config);
        let mut sim = Self {
            world: World::new(),
            arena,
            layout,
            config,
            time: Time::default(),
            score: Score::new(),
            events: Events::new(),
            controls: ControlQueue::new(),
            rng: GameRng::new(seed),
            paused: false,
            tick: 0,
        };

        let top = sim.layout.paddle_spawn_top();
        create_paddle(&mut sim.world, Side::Left, top);
        create_paddle(&mut sim.world, Side::Right, top);
        create_ball(&mut sim.world, arena.center(), Vec2::ZERO);
        sim.serve_random();
        sim
    }

    /// Re-derive sizes for a new arena and start a fresh rally
    ///
    /// Paddles go back to the middle and the ball is re-served. The score
    /// survives; stale positions and pending touch targets do not.
    pub fn resize(&mut self, arena: Arena) {
        self.arena = arena;
        self.layout = Layout::new(&arena, &self.config);
        self.controls.clear();

        let top = self.layout.paddle_spawn_top();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.top = top;
        }
        self.serve_random();
    }

    /// Advance one tick
    ///
    /// `dt` is the measured wall-clock time since the previous tick. It is
    /// recorded but does not scale movement: velocities are per tick.
    /// Does nothing while paused.
    pub fn advance(&mut self, dt: f32) {
        self.events.clear();
        if self.paused {
            return;
        }

        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.arena,
            &self.layout,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.controls,
            &mut self.rng,
        );
        self.tick += 1;
    }

    /// Queue a new top position for the touch paddle, applied next tick
    pub fn set_left_paddle_target(&mut self, top: f32) {
        self.controls.push_paddle_top(top);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Place the ball directly, bypassing the serve
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Serve from the centre at a chosen angle instead of a random one
    pub fn serve_at_angle(&mut self, toward_right: bool, angle: f32) {
        let center = self.arena.center();
        let speed = self.layout.ball_speed;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve_at_angle(center, toward_right, speed, angle);
        }
    }

    fn serve_random(&mut self) {
        let toward_right = self.rng.serve_toward_right();
        let center = self.arena.center();
        let speed = self.layout.ball_speed;
        let max_angle = self.config.serve_angle();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(center, toward_right, speed, max_angle, &mut self.rng);
        }
    }

    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(self.arena.center(), Vec2::ZERO))
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
            .unwrap_or_else(|| Paddle::new(side, self.layout.paddle_spawn_top()))
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Copy out the state a renderer needs for this frame
    pub fn snapshot(&self) -> RenderState {
        let left = self.paddle(Side::Left);
        let right = self.paddle(Side::Right);
        RenderState {
            arena_width: self.arena.width(),
            arena_height: self.arena.height(),
            left_paddle: self.layout.paddle_rect(Side::Left, left.top),
            right_paddle: self.layout.paddle_rect(Side::Right, right.top),
            ball_center: self.ball().pos,
            ball_radius: self.layout.ball_radius,
            score: self.score,
            paused: self.paused,
            tick: self.tick,
        }
    }
}
