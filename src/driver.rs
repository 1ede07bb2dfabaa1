//! Event-to-state glue shared by every platform
//!
//! The driver owns the single `GameState` and turns pointer events and frame
//! callbacks into `LoopControl` answers. Platforms only schedule or cancel the
//! next frame and paint whatever `build_frame` returns.

use glam::Vec2;

use crate::renderer::{Frame, build_frame};
use crate::sim::{self, ClickOutcome, GamePhase, GameState};

/// What the platform must do with its frame loop after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Begin requesting frames
    Start,
    /// Request the next frame
    Continue,
    /// Cancel any pending frame and paint one frame now
    Stop,
    /// Loop stays stopped; paint one frame now
    Redraw,
    /// Nothing to do
    Unchanged,
}

pub struct Driver {
    state: GameState,
    running: bool,
    frames: u64,
}

impl Driver {
    /// Create a driver for a drawing surface of the given size
    pub fn new(surface: Vec2) -> Self {
        Self {
            state: GameState::new(surface),
            running: false,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the frame loop should currently be running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames simulated since startup
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn pointer_move(&mut self, point: Vec2) {
        sim::pointer_move(&mut self.state, point);
    }

    pub fn click(&mut self, point: Vec2, now: f64) -> LoopControl {
        match sim::click(&mut self.state, point, now) {
            ClickOutcome::Started | ClickOutcome::Resumed => {
                self.running = true;
                LoopControl::Start
            }
            ClickOutcome::Paused => {
                self.running = false;
                LoopControl::Stop
            }
            ClickOutcome::Reset => LoopControl::Redraw,
            ClickOutcome::Ignored => LoopControl::Unchanged,
        }
    }

    /// Simulate one frame at `now`. The caller paints afterwards in both the
    /// `Continue` and `Stop` cases.
    pub fn frame(&mut self, now: f64) -> LoopControl {
        if !self.running {
            // Stale callback from before a pause
            return LoopControl::Unchanged;
        }

        sim::tick(&mut self.state, now);
        self.state.record_frame(now);
        self.frames += 1;
        log::trace!("frame {} at {:.0}ms", self.frames, now);

        if self.state.phase == GamePhase::Playing {
            LoopControl::Continue
        } else {
            self.running = false;
            LoopControl::Stop
        }
    }

    /// Display list for the current state
    pub fn build_frame(&self) -> Frame {
        build_frame(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_SURFACE;

    #[test]
    fn test_loop_controls_over_a_run() {
        let mut driver = Driver::new(DEFAULT_SURFACE);
        let center = driver.state().player.rect.pos;

        assert_eq!(driver.click(Vec2::ZERO, 0.0), LoopControl::Unchanged);
        assert!(!driver.is_running());

        assert_eq!(driver.click(center, 0.0), LoopControl::Start);
        assert!(driver.is_running());
        assert_eq!(driver.frame(16.0), LoopControl::Continue);

        assert_eq!(driver.click(Vec2::ZERO, 32.0), LoopControl::Stop);
        assert!(!driver.is_running());
        // A frame callback that was already queued does nothing
        assert_eq!(driver.frame(48.0), LoopControl::Unchanged);
        assert_eq!(driver.frames(), 1);

        assert_eq!(driver.click(center, 100.0), LoopControl::Start);

        // Crash into the margin
        driver.pointer_move(Vec2::new(10.0, 10.0));
        assert_eq!(driver.frame(116.0), LoopControl::Stop);
        assert_eq!(driver.state().phase, GamePhase::GameOver);
        assert!(!driver.is_running());

        assert_eq!(driver.click(Vec2::ZERO, 200.0), LoopControl::Redraw);
        assert_eq!(driver.state().phase, GamePhase::Waiting);
    }

    #[test]
    fn test_best_time_tracks_playing_frames() {
        let mut driver = Driver::new(DEFAULT_SURFACE);
        let center = driver.state().player.rect.pos;
        driver.click(center, 1000.0);
        driver.frame(1100.0);
        driver.frame(1150.0);
        assert_eq!(driver.state().last_elapsed_time, 150.0);
        assert_eq!(driver.state().best_time, 150.0);

        driver.pointer_move(Vec2::new(10.0, 10.0));
        driver.frame(1200.0);
        // The fatal frame is not recorded
        assert_eq!(driver.state().last_elapsed_time, 150.0);
        assert_eq!(driver.state().best_time, 150.0);
    }
}
