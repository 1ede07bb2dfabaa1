//! Pilotlou - dodge the bouncing blocks
//!
//! Core modules:
//! - `sim`: Simulation (geometry, entities, phase machine, per-frame tick)
//! - `renderer`: Display list builder plus WebGPU/DOM backends
//! - `driver`: Event-to-state glue shared by every platform
//! - `platform`: Browser/native frame scheduling and clocks

pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use driver::{Driver, LoopControl};
pub use error::SetupError;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Inset between the drawing surface edge and the playable arena (pixels)
    pub const ARENA_MARGIN: f32 = 50.0;

    /// Player size (pixels)
    pub const PLAYER_DIMS: Vec2 = Vec2::new(40.0, 40.0);

    /// Enemy layout restored on every reset: (position, dimensions, velocity)
    pub const ENEMY_LAYOUT: [(Vec2, Vec2, Vec2); 4] = [
        (Vec2::new(300.0, 85.0), Vec2::new(60.0, 50.0), Vec2::new(-10.0, 12.0)),
        (Vec2::new(350.0, 340.0), Vec2::new(100.0, 20.0), Vec2::new(-12.0, -20.0)),
        (Vec2::new(85.0, 350.0), Vec2::new(30.0, 60.0), Vec2::new(15.0, -13.0)),
        (Vec2::new(100.0, 100.0), Vec2::new(60.0, 60.0), Vec2::new(17.0, 11.0)),
    ];

    /// Speed divisor at the start of a run
    pub const START_SPEED: f32 = 80.0;

    /// Speed steps: each entry lasts `duration_ms` before the next one applies.
    /// The final step has no end: the divisor stays at its speed forever.
    pub const SPEED_STEPS: [(f64, f32); 5] = [
        (8000.0, 80.0),
        (6000.0, 60.0),
        (4000.0, 40.0),
        (3000.0, 30.0),
        (2000.0, 20.0),
    ];

    /// Default drawing surface size when the host does not provide one
    pub const DEFAULT_SURFACE: Vec2 = Vec2::new(500.0, 500.0);
}

/// Colors for game elements (straight RGBA, matching the CSS named colors)
pub mod colors {
    pub const MARGIN: [f32; 4] = [0.827, 0.827, 0.827, 1.0]; // lightgray
    pub const ARENA: [f32; 4] = [1.0, 1.0, 1.0, 1.0]; // white
    pub const PLAYER: [f32; 4] = [0.545, 0.0, 0.0, 1.0]; // darkred
    pub const ENEMY: [f32; 4] = [0.0, 0.0, 0.545, 1.0]; // darkblue
    pub const GREEN: [f32; 4] = [0.0, 0.502, 0.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const GRAY: [f32; 4] = [0.502, 0.502, 0.502, 1.0];

    /// CSS `rgba()` form of a color, for DOM-rendered text
    pub fn css(color: [f32; 4]) -> String {
        let [r, g, b, a] = color;
        format!(
            "rgba({}, {}, {}, {})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a
        )
    }

}
