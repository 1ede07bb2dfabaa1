//! Game state and core simulation types
//!
//! Times are wall-clock milliseconds supplied by the caller, so the whole
//! simulation can be driven from tests without a real clock.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::colors;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh layout, waiting for the player to click their rectangle
    Waiting,
    /// Active gameplay, frame loop running
    Playing,
    /// Frozen mid-run, waiting for a click on the player to resume
    Paused,
    /// Run ended by a collision
    GameOver,
}

/// The pointer-controlled rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            rect: Rect::new(pos, PLAYER_DIMS, colors::PLAYER),
        }
    }
}

/// A bouncing enemy rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    /// Pixels per `speed` milliseconds
    pub vel: Vec2,
}

impl Enemy {
    pub fn new(pos: Vec2, dims: Vec2, vel: Vec2) -> Self {
        Self {
            rect: Rect::new(pos, dims, colors::ENEMY),
            vel,
        }
    }

    /// Integrate position over `delta_ms` with the current speed divisor
    pub fn advance(&mut self, delta_ms: f64, speed: f32) {
        let scale = delta_ms as f32 / speed;
        self.rect.pos += self.vel * scale;
    }

    /// Flip velocity on each axis whose leading edge is past the surface edges.
    ///
    /// Position is never clamped, so an enemy can sit inside a wall for up to
    /// one tick while it turns around. Returns true if any axis flipped.
    pub fn bounce(&mut self, bounds: Vec2) -> bool {
        let mut bounced = false;
        if (self.rect.left() < 0.0 && self.vel.x < 0.0)
            || (self.rect.right() > bounds.x && self.vel.x > 0.0)
        {
            self.vel.x = -self.vel.x;
            bounced = true;
        }
        if (self.rect.top() < 0.0 && self.vel.y < 0.0)
            || (self.rect.bottom() > bounds.y && self.vel.y > 0.0)
        {
            self.vel.y = -self.vel.y;
            bounced = true;
        }
        bounced
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Player rectangle
    pub player: Player,
    /// Enemies, in draw order
    pub enemies: Vec<Enemy>,
    /// Drawing surface size in pixels
    pub surface: Vec2,
    /// Run start (ms), shifted forward by every pause
    pub start_time: f64,
    /// Instant the run was frozen (pause or game over)
    pub pause_time: Option<f64>,
    /// Time of the previous simulation tick (ms)
    pub last_tick: f64,
    /// Elapsed time of the most recent playing frame (ms)
    pub last_elapsed_time: f64,
    /// Longest run this session (ms)
    pub best_time: f64,
    /// Enemy displacement divisor; lower is faster
    pub speed: f32,
}

impl GameState {
    /// Create a new game state for a drawing surface of the given size
    pub fn new(surface: Vec2) -> Self {
        let mut state = Self {
            phase: GamePhase::Waiting,
            player: Player::new(surface / 2.0),
            enemies: Vec::new(),
            surface,
            start_time: 0.0,
            pause_time: None,
            last_tick: 0.0,
            last_elapsed_time: 0.0,
            best_time: 0.0,
            speed: START_SPEED,
        };

        state.new_game_state();

        state
    }

    /// Restore the starting layout and return to `Waiting`.
    ///
    /// Best time and the last displayed run time survive the reset.
    pub fn new_game_state(&mut self) {
        self.player = Player::new(self.surface / 2.0);
        self.enemies = ENEMY_LAYOUT
            .iter()
            .map(|&(pos, dims, vel)| Enemy::new(pos, dims, vel))
            .collect();
        self.phase = GamePhase::Waiting;
        self.pause_time = None;
        self.speed = START_SPEED;
    }

    /// Milliseconds played in the current run.
    ///
    /// Frozen at the pause/game-over instant outside `Playing`.
    pub fn elapsed_time(&self, now: f64) -> f64 {
        match self.phase {
            GamePhase::Playing => now - self.start_time,
            _ => self
                .pause_time
                .map(|paused| paused - self.start_time)
                .unwrap_or(0.0),
        }
    }

    /// Record a finished playing frame for the HUD and best time
    pub fn record_frame(&mut self, now: f64) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let elapsed = self.elapsed_time(now);
        self.last_elapsed_time = elapsed;
        self.best_time = self.best_time.max(elapsed);
    }
}
