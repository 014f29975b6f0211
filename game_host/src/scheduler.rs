//! Fixed-cadence game loop on a dedicated thread
//!
//! The host side owns lifecycle and touch handling. The `pong-sim` thread
//! owns the [`Simulation`] and the sink while it runs and hands both back
//! through its join handle when it exits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use game_core::{Arena, Config, Layout, RenderState, Simulation};

use crate::controls::SharedControls;
use crate::error::{LoopError, Result};
use crate::fsm::{LoopAction, LoopFsm, LoopState};
use crate::input::{PaddleMapping, PointerEvent, TouchInput};
use crate::pacer::{FramePacer, Pace};
use crate::render::RenderSink;

const THREAD_NAME: &str = "pong-sim";

/// Work applied between ticks
#[derive(Debug)]
enum Command {
    Resize(Arena),
}

/// What the thread hands back on exit
struct Parked {
    sim: Simulation,
    sink: Box<dyn RenderSink>,
}

struct Worker {
    running: Arc<AtomicBool>,
    commands: Sender<Command>,
    exited: Receiver<()>,
    handle: JoinHandle<Parked>,
}

/// Owns the simulation thread and routes lifecycle and touch signals to it
pub struct GameLoop {
    config: Config,
    seed: u64,
    fsm: LoopFsm,
    controls: SharedControls,
    input: Option<TouchInput>,
    view: Option<(f32, f32)>,
    arena: Option<Arena>,
    sim: Option<Simulation>, // Parked here while stopped
    sink: Option<Box<dyn RenderSink>>,
    worker: Option<Worker>,
}

impl GameLoop {
    pub fn new(config: Config, sink: Box<dyn RenderSink>, seed: u64) -> Self {
        Self {
            config,
            seed,
            fsm: LoopFsm::new(),
            controls: SharedControls::new(),
            input: None,
            view: None,
            arena: None,
            sim: None,
            sink: Some(sink),
            worker: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.fsm.state()
    }

    pub fn is_paused(&self) -> bool {
        self.controls.paused()
    }

    pub fn arena(&self) -> Option<Arena> {
        self.arena
    }

    /// Frame state of the parked simulation; `None` while the thread owns it
    pub fn snapshot(&self) -> Option<RenderState> {
        self.sim.as_ref().map(Simulation::snapshot)
    }

    /// Size of the touch surface, when it differs from the arena
    ///
    /// Rejected sizes leave the current mapping in place.
    pub fn set_view_size(&mut self, width: f32, height: f32) -> Result<()> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(LoopError::InvalidView { width, height });
        }
        self.view = Some((width, height));
        if let Some(arena) = self.arena {
            self.refresh_mapping(arena);
        }
        Ok(())
    }

    /// Start ticking on an arena of the given size
    ///
    /// On a live loop this is a resize.
    pub fn start(&mut self, width: f32, height: f32) -> Result<()> {
        let arena = Arena::new(width, height)?;
        self.apply_arena(arena);
        if self.fsm.is_active() {
            return Ok(());
        }
        self.controls.set_paused(false);
        self.spawn(arena)
    }

    /// Change the arena size; the running thread picks it up between ticks
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        let arena = Arena::new(width, height)?;
        self.apply_arena(arena);
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        match self.fsm.state() {
            LoopState::Running => Ok(()),
            LoopState::Paused => {
                self.fsm.transition(LoopAction::Resume);
                self.controls.set_paused(false);
                log::info!("resumed");
                Ok(())
            }
            LoopState::Stopped => {
                let arena = self.arena.ok_or(LoopError::NotStarted)?;
                self.controls.set_paused(false);
                self.spawn(arena)
            }
        }
    }

    pub fn pause(&mut self) {
        if self.fsm.transition(LoopAction::Pause).success() {
            self.controls.set_paused(true);
            log::info!("paused");
        }
    }

    /// Stop the thread and take back the simulation
    ///
    /// Waits at most `shutdown_timeout`. On timeout the thread is detached
    /// and its simulation is gone for good.
    pub fn stop(&mut self) -> Result<()> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };
        self.fsm.transition(LoopAction::Stop);
        worker.running.store(false, Ordering::Release);

        let timeout = self.config.shutdown_timeout;
        match worker.exited.recv_timeout(timeout) {
            // Disconnected means the thread died; join reports how
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {}
            Err(RecvTimeoutError::Timeout) => {
                log::warn!("{THREAD_NAME} did not exit within {timeout:?}, detaching");
                return Err(LoopError::ShutdownTimeout(timeout));
            }
        }

        let parked = worker.handle.join().map_err(|_| LoopError::ThreadPanicked)?;
        self.sim = Some(parked.sim);
        self.sink = Some(parked.sink);
        log::info!("stopped");
        Ok(())
    }

    /// Feed one pointer event through touch handling
    ///
    /// Gestures are tracked even while stopped, but only a live loop acts
    /// on them.
    pub fn on_pointer(&mut self, event: &PointerEvent) {
        let Some(input) = self.input.as_mut() else {
            return;
        };
        let response = input.handle(event);
        if !self.fsm.is_active() {
            return;
        }

        if let Some(top) = response.paddle_top {
            self.controls.set_paddle_top(top);
        }
        if response.toggle_pause {
            if self.fsm.is_paused() {
                self.fsm.transition(LoopAction::Resume);
                self.controls.set_paused(false);
                log::info!("resumed by tap");
            } else {
                self.fsm.transition(LoopAction::Pause);
                self.controls.set_paused(true);
                log::info!("paused by tap");
            }
        }
    }

    fn apply_arena(&mut self, arena: Arena) {
        if self.arena == Some(arena) {
            return;
        }
        self.arena = Some(arena);
        self.refresh_mapping(arena);
        self.controls.clear_paddle_top();

        if let Some(worker) = &self.worker {
            if worker.commands.send(Command::Resize(arena)).is_err() {
                log::warn!("{THREAD_NAME} is gone, resize dropped");
            }
        } else if let Some(sim) = self.sim.as_mut() {
            sim.resize(arena);
            log::debug!("resized parked simulation to {}x{}", arena.width(), arena.height());
        }
    }

    fn refresh_mapping(&mut self, arena: Arena) {
        let layout = Layout::new(&arena, &self.config);
        let (view_width, view_height) = self.view.unwrap_or((arena.width(), arena.height()));
        let mapping = PaddleMapping::new(view_width, view_height, &arena, &layout);
        match self.input.as_mut() {
            Some(input) => input.set_mapping(mapping),
            None => self.input = Some(TouchInput::new(mapping)),
        }
    }

    fn spawn(&mut self, arena: Arena) -> Result<()> {
        let Some(sink) = self.sink.take() else {
            return Err(LoopError::Abandoned);
        };
        let sim = match self.sim.take() {
            Some(sim) => sim,
            None => Simulation::new(arena, self.config.clone(), self.seed),
        };

        let running = Arc::new(AtomicBool::new(true));
        let (commands, command_rx) = mpsc::channel();
        let (exit_tx, exited) = mpsc::channel();
        let controls = self.controls.clone();
        let period = self.config.tick_period();
        let flag = Arc::clone(&running);

        let handle = thread::Builder::new()
            .name(THREAD_NAME.into())
            .spawn(move || {
                let parked = run(sim, sink, &controls, &command_rx, &flag, period);
                let _ = exit_tx.send(());
                parked
            })?;

        self.worker = Some(Worker {
            running,
            commands,
            exited,
            handle,
        });
        self.fsm.transition(LoopAction::Start);
        log::info!(
            "started {}x{} at {} Hz",
            arena.width(),
            arena.height(),
            self.config.tick_rate
        );
        Ok(())
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        // Timeout is already logged
        let _ = self.stop();
    }
}

fn run(
    mut sim: Simulation,
    mut sink: Box<dyn RenderSink>,
    controls: &SharedControls,
    commands: &Receiver<Command>,
    running: &AtomicBool,
    period: Duration,
) -> Parked {
    let mut pacer = FramePacer::new(period, Instant::now());

    while running.load(Ordering::Acquire) {
        for command in commands.try_iter() {
            match command {
                Command::Resize(arena) => {
                    if sim.arena() != arena {
                        sim.resize(arena);
                        log::debug!("resized to {}x{}", arena.width(), arena.height());
                    }
                }
            }
        }

        match pacer.poll(Instant::now()) {
            Pace::Tick(elapsed) => {
                let tick = controls.take_for_tick();
                sim.set_paused(tick.paused);
                if let Some(top) = tick.left_paddle_top {
                    // Held by the simulation until it is unpaused
                    sim.set_left_paddle_target(top);
                }
                sim.advance(elapsed.as_secs_f32());

                let events = sim.events();
                if events.any_score() {
                    let score = sim.score();
                    let scorer = if events.player_scored {
                        "player"
                    } else {
                        "computer"
                    };
                    log::info!("{scorer} scored: {}-{}", score.player, score.computer);
                }
                sink.present(&sim.snapshot());
            }
            Pace::Idle(wait) => thread::sleep(wait),
        }
    }

    Parked { sim, sink }
}
