//! Fixed-interval game loop driver.
//!
//! The platform layer asks `is_due` and calls `tick` when the interval has
//! elapsed. The next tick is scheduled one interval after the tick started,
//! with no catch-up for overrun; the measured delta absorbs any lateness.

use std::time::{Duration, Instant};

use dash_core::config::GameConfig;
use dash_core::input::InputState;
use dash_core::time::{Clock, TickTiming};
use dash_render::Surface;

use crate::scene::Scene;

/// Receives the periodic frame-rate sample.
pub trait FrameRateDisplay {
    fn show(&mut self, fps: f64);
}

pub struct GameLoop {
    scene: Scene,
    clock: Clock,
    interval: Duration,
    next_tick: Instant,
}

impl GameLoop {
    pub fn new(scene: Scene, config: &GameConfig, start: Instant) -> Self {
        let interval = Duration::from_millis(config.tick_interval_ms);
        Self {
            scene,
            clock: Clock::new(start, config.fps_sample_period),
            interval,
            next_tick: start + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    pub fn tick_count(&self) -> u64 {
        self.clock.tick_count
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Run one update + render pass at `now`.
    pub fn tick(
        &mut self,
        now: Instant,
        input: &InputState,
        surface: &mut dyn Surface,
        display: &mut dyn FrameRateDisplay,
    ) -> TickTiming {
        let timing = self.clock.tick(now);
        log::trace!("tick {} delta {:.1}ms", self.clock.tick_count, timing.delta_ms);

        self.scene.update(timing.delta_ms, input);
        self.scene.render(surface);

        if let Some(fps) = timing.fps_sample {
            log::info!("FPS: {fps:.2}");
            display.show(fps);
        }

        self.next_tick = now + self.interval;
        timing
    }
}
