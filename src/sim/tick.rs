//! Per-frame simulation tick
//!
//! Advances enemies by the wall-clock time since the previous tick, bounces
//! them off the surface edges, then checks the player against the arena
//! margin and every enemy.

use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Speed divisor for a run that has lasted `elapsed_ms`.
///
/// The final step is open-ended, so a frame that jumps past the whole
/// schedule still lands on the fastest divisor.
pub fn speed_for_elapsed(elapsed_ms: f64) -> f32 {
    let mut threshold = 0.0;
    for &(duration, speed) in SPEED_STEPS.iter() {
        threshold += duration;
        if elapsed_ms < threshold {
            return speed;
        }
    }
    SPEED_STEPS[SPEED_STEPS.len() - 1].1
}

/// True if the player has crossed the arena margin or touches any enemy
pub fn check_collisions(state: &GameState) -> bool {
    let player = &state.player.rect;
    if player.left() < ARENA_MARGIN
        || player.right() > state.surface.x - ARENA_MARGIN
        || player.top() < ARENA_MARGIN
        || player.bottom() > state.surface.y - ARENA_MARGIN
    {
        return true;
    }
    state.enemies.iter().any(|enemy| player.collides_with(&enemy.rect))
}

/// Advance the game state to wall-clock time `now` (ms)
pub fn tick(state: &mut GameState, now: f64) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let delta = now - state.last_tick;
    let bounds = state.surface;
    let speed = state.speed;
    for (i, enemy) in state.enemies.iter_mut().enumerate() {
        enemy.advance(delta, speed);
        if enemy.bounce(bounds) {
            log::trace!("enemy {} bounced, vel {:?}", i, enemy.vel);
        }
    }

    if check_collisions(state) {
        let elapsed = state.elapsed_time(now);
        state.phase = GamePhase::GameOver;
        state.pause_time = Some(now);
        log::info!("Game over after {:.3}s", elapsed / 1000.0);
    }

    state.last_tick = now;

    let speed = speed_for_elapsed(state.elapsed_time(now));
    if speed != state.speed {
        log::debug!("Speed divisor {} -> {}", state.speed, speed);
    }
    state.speed = speed;
}
