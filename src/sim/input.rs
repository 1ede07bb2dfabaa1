//! Pointer input handling for the phase machine

use glam::Vec2;

use super::state::{GamePhase, GameState};

/// What a click did to the phase machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click did not match any transition
    Ignored,
    /// Waiting -> Playing
    Started,
    /// Playing -> Paused
    Paused,
    /// Paused -> Playing
    Resumed,
    /// GameOver -> Waiting with a fresh layout
    Reset,
}

/// Apply a click at surface-local `point`, at wall-clock time `now` (ms)
pub fn click(state: &mut GameState, point: Vec2, now: f64) -> ClickOutcome {
    match state.phase {
        GamePhase::Waiting => {
            if !state.player.rect.contains_point(point) {
                return ClickOutcome::Ignored;
            }
            state.phase = GamePhase::Playing;
            state.start_time = now;
            state.pause_time = None;
            state.last_tick = now;
            log::info!("Run started");
            ClickOutcome::Started
        }
        GamePhase::Playing => {
            state.phase = GamePhase::Paused;
            state.pause_time = Some(now);
            log::info!("Paused at {:.3}s", state.elapsed_time(now) / 1000.0);
            ClickOutcome::Paused
        }
        GamePhase::Paused => {
            if !state.player.rect.contains_point(point) {
                return ClickOutcome::Ignored;
            }
            if let Some(paused) = state.pause_time {
                state.start_time += now - paused;
            }
            state.phase = GamePhase::Playing;
            state.last_tick = now;
            log::info!("Resumed");
            ClickOutcome::Resumed
        }
        GamePhase::GameOver => {
            state.start_time = now;
            state.new_game_state();
            log::info!("Reset, best {:.3}s", state.best_time / 1000.0);
            ClickOutcome::Reset
        }
    }
}

/// Follow the pointer while playing; ignored in every other phase
pub fn pointer_move(state: &mut GameState, point: Vec2) {
    if state.phase == GamePhase::Playing {
        state.player.rect.pos = point;
    }
}
