//! Native frame scheduling
//!
//! There is no display-refresh callback outside the browser, so frames are
//! driven by a fixed-rate timer that stops as soon as the driver leaves the
//! playing phase.

use std::thread;
use std::time::Duration;

use serde::Serialize;

use crate::driver::{Driver, LoopControl};
use crate::renderer::Frame;
use crate::sim::GamePhase;

/// Fixed-rate replacement for `requestAnimationFrame`
#[derive(Debug, Clone)]
pub struct FixedRateLoop {
    /// Time between frames
    pub interval: Duration,
    /// Upper bound on frames per run (None = until the loop stops itself)
    pub max_frames: Option<u64>,
}

impl Default for FixedRateLoop {
    fn default() -> Self {
        Self {
            interval: Duration::from_micros(16_667),
            max_frames: None,
        }
    }
}

impl FixedRateLoop {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_frames: None,
        }
    }

    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Run frames until the driver stops its loop or the frame cap is hit.
    ///
    /// Each frame simulates at `clock()` and then paints. Returns the number
    /// of frames run.
    pub fn run(
        &self,
        driver: &mut Driver,
        mut clock: impl FnMut() -> f64,
        mut paint: impl FnMut(&Frame),
    ) -> u64 {
        let mut frames = 0;
        while driver.is_running() {
            if self.max_frames.is_some_and(|max| frames >= max) {
                log::debug!("Frame cap reached after {} frames", frames);
                break;
            }
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }

            let control = driver.frame(clock());
            frames += 1;
            paint(&driver.build_frame());

            if control != LoopControl::Continue {
                break;
            }
        }
        frames
    }
}

/// Summary of a headless session
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub frames: u64,
    pub phase: GamePhase,
    pub survived_ms: f64,
    pub best_ms: f64,
}

impl SessionReport {
    pub fn from_driver(driver: &Driver) -> Self {
        let state = driver.state();
        Self {
            frames: driver.frames(),
            phase: state.phase,
            survived_ms: state.last_elapsed_time,
            best_ms: state.best_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_SURFACE;
    use glam::Vec2;

    fn stepping_clock(step: f64) -> impl FnMut() -> f64 {
        clock_from(0.0, step)
    }

    fn clock_from(start: f64, step: f64) -> impl FnMut() -> f64 {
        let mut now = start;
        move || {
            now += step;
            now
        }
    }

    #[test]
    fn test_loop_idle_when_not_playing() {
        let mut driver = Driver::new(DEFAULT_SURFACE);
        let frames = FixedRateLoop::new(Duration::ZERO).run(&mut driver, stepping_clock(16.0), |_| {});
        assert_eq!(frames, 0);
    }

    #[test]
    fn test_loop_stops_on_game_over() {
        let mut driver = Driver::new(DEFAULT_SURFACE);
        let center = driver.state().player.rect.pos;
        driver.click(center, 0.0);

        let mut painted = 0;
        let frames = FixedRateLoop::new(Duration::ZERO)
            .with_max_frames(100_000)
            .run(&mut driver, stepping_clock(16.0), |_| painted += 1);

        // A stationary player is eventually hit by an enemy
        assert_eq!(driver.state().phase, GamePhase::GameOver);
        assert!(!driver.is_running());
        assert_eq!(frames, painted);
        assert!(frames > 1);
    }

    #[test]
    fn test_loop_respects_frame_cap() {
        let mut driver = Driver::new(DEFAULT_SURFACE);
        let center = driver.state().player.rect.pos;
        driver.click(center, 0.0);

        let frames = FixedRateLoop::new(Duration::ZERO)
            .with_max_frames(3)
            .run(&mut driver, stepping_clock(1.0), |_| {});
        assert_eq!(frames, 3);
        assert_eq!(driver.state().phase, GamePhase::Playing);

        let report = SessionReport::from_driver(&driver);
        assert_eq!(report.frames, 3);
        assert_eq!(report.survived_ms, 3.0);
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("\"phase\":\"Playing\""));
    }

    #[test]
    fn test_report_counts_frames_across_resumes() {
        let mut driver = Driver::new(DEFAULT_SURFACE);
        let center = driver.state().player.rect.pos;
        driver.click(center, 0.0);

        let first = FixedRateLoop::new(Duration::ZERO)
            .with_max_frames(2)
            .run(&mut driver, stepping_clock(1.0), |_| {});
        assert_eq!(driver.click(Vec2::ZERO, 3.0), LoopControl::Stop);
        assert_eq!(driver.state().phase, GamePhase::Paused);
        assert_eq!(driver.click(center, 4.0), LoopControl::Start);

        let second = FixedRateLoop::new(Duration::ZERO)
            .with_max_frames(2)
            .run(&mut driver, clock_from(4.0, 1.0), |_| {});
        assert_eq!((first, second), (2, 2));
        assert_eq!(SessionReport::from_driver(&driver).frames, 4);
    }
}
