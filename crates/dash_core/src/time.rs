//! Tick clock for the wall-clock polling loop.
//!
//! Each tick measures the real time since the previous tick. Ticks are not
//! compensated for overrun, so `delta_ms` can exceed the nominal interval.
//! Every `sample_period` ticks the clock emits an instantaneous frame-rate
//! sample computed from that tick's delta alone.

use std::time::Instant;

pub const DEFAULT_FPS_SAMPLE_PERIOD: u32 = 24;

/// Timing produced by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickTiming {
    pub delta_ms: f64,
    pub fps_sample: Option<f64>,
}

pub struct Clock {
    last_tick: Instant,
    sample_period: u32,
    ticks_since_sample: u32,
    pub tick_count: u64,
}

impl Clock {
    pub fn new(start: Instant, sample_period: u32) -> Self {
        Self {
            last_tick: start,
            sample_period: sample_period.max(1),
            ticks_since_sample: 0,
            tick_count: 0,
        }
    }

    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Record a tick at `now` and return its timing.
    pub fn tick(&mut self, now: Instant) -> TickTiming {
        let delta_ms = now.saturating_duration_since(self.last_tick).as_secs_f64() * 1000.0;
        self.last_tick = now;
        self.tick_count += 1;
        self.ticks_since_sample += 1;

        let fps_sample = if self.ticks_since_sample >= self.sample_period {
            self.ticks_since_sample = 0;
            Some(frame_rate(delta_ms))
        } else {
            None
        };

        TickTiming {
            delta_ms,
            fps_sample,
        }
    }
}

/// Instantaneous frame rate for a single tick delta.
pub fn frame_rate(delta_ms: f64) -> f64 {
    if delta_ms > 0.0 {
        1000.0 / delta_ms
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn run_ticks(clock: &mut Clock, start: Instant, deltas_ms: &[u64]) -> Vec<TickTiming> {
        let mut now = start;
        deltas_ms
            .iter()
            .map(|&d| {
                now += Duration::from_millis(d);
                clock.tick(now)
            })
            .collect()
    }

    #[test]
    fn delta_is_time_since_previous_tick() {
        let start = Instant::now();
        let mut clock = Clock::new(start, DEFAULT_FPS_SAMPLE_PERIOD);
        let timings = run_ticks(&mut clock, start, &[41, 60, 35]);
        assert!((timings[0].delta_ms - 41.0).abs() < 1e-6);
        assert!((timings[1].delta_ms - 60.0).abs() < 1e-6);
        assert!((timings[2].delta_ms - 35.0).abs() < 1e-6);
        assert_eq!(clock.tick_count, 3);
    }

    #[test]
    fn sample_reported_on_24th_tick() {
        let start = Instant::now();
        let mut clock = Clock::new(start, DEFAULT_FPS_SAMPLE_PERIOD);
        let timings = run_ticks(&mut clock, start, &[41; 24]);

        assert!(timings[..23].iter().all(|t| t.fps_sample.is_none()));
        let fps = timings[23].fps_sample.expect("24th tick should sample");
        assert!((fps - 1000.0 / 41.0).abs() < 1e-6);
        assert!((fps - 24.39).abs() < 0.01);
    }

    #[test]
    fn sample_uses_that_ticks_delta_not_average() {
        let start = Instant::now();
        let mut clock = Clock::new(start, 4);
        let timings = run_ticks(&mut clock, start, &[10, 10, 10, 50]);
        let fps = timings[3].fps_sample.expect("4th tick should sample");
        assert!((fps - 20.0).abs() < 1e-6);
    }

    #[test]
    fn counter_resets_after_sample() {
        let start = Instant::now();
        let mut clock = Clock::new(start, 3);
        let timings = run_ticks(&mut clock, start, &[20; 7]);
        let sampled: Vec<usize> = timings
            .iter()
            .enumerate()
            .filter(|(_, t)| t.fps_sample.is_some())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(sampled, vec![2, 5]);
    }

    #[test]
    fn zero_delta_reports_zero_rate() {
        let start = Instant::now();
        let mut clock = Clock::new(start, 1);
        let timing = clock.tick(start);
        assert_eq!(timing.delta_ms, 0.0);
        assert_eq!(timing.fps_sample, Some(0.0));
    }
}
