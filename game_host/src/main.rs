//! Headless demo: a scripted finger plays the left paddle for a few seconds

use std::thread;
use std::time::Duration;

use game_core::Config;
use game_host::{FrameRecorder, GameLoop, LogSink, PointerEvent, RenderSink, Tee};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 480.0;
const DEMO_SECONDS: u64 = 5;

fn main() -> Result<(), game_host::LoopError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::new();
    let ticks_per_second = u64::from(config.tick_rate);
    let recorder = FrameRecorder::new();
    let sink: Box<dyn RenderSink> = Box::new(Tee(LogSink::new(ticks_per_second), recorder.clone()));
    let mut game = GameLoop::new(config, sink, 2024);

    game.start(WIDTH, HEIGHT)?;

    // Sweep a finger up and down the left half
    game.on_pointer(&PointerEvent::down(1, 100.0, HEIGHT / 2.0, 1));
    let steps = DEMO_SECONDS * 20;
    for i in 0..steps {
        let phase = i as f32 / 20.0;
        let y = HEIGHT / 2.0 + (HEIGHT / 2.5) * (phase * 1.7).sin();
        game.on_pointer(&PointerEvent::moved(1, 100.0, y, 1));
        thread::sleep(Duration::from_millis(50));
    }
    game.on_pointer(&PointerEvent::up(1, 100.0, HEIGHT / 2.0, 1));

    game.stop()?;

    match game.snapshot() {
        Some(frame) => log::info!(
            "final score {}-{} after {} ticks ({} frames presented)",
            frame.score.player,
            frame.score.computer,
            frame.tick,
            recorder.count()
        ),
        None => log::warn!("no simulation to report"),
    }
    Ok(())
}
