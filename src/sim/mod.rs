//! Simulation module
//!
//! All gameplay logic lives here:
//! - Wall-clock times are passed in, never read
//! - No rendering or platform dependencies

pub mod input;
pub mod rect;
pub mod state;
pub mod tick;

pub use input::{ClickOutcome, click, pointer_move};
pub use rect::Rect;
pub use state::{Enemy, GamePhase, GameState, Player};
pub use tick::{check_collisions, speed_for_elapsed, tick};
