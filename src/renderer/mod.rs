//! Rendering module
//!
//! `frame` turns the game state into a display list; `pipeline` draws its
//! rectangles with WebGPU and, in the browser, `hud` lays its text over the
//! canvas.

pub mod frame;
#[cfg(target_arch = "wasm32")]
pub mod hud;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{FillRect, Frame, HudSlot, TextItem, build_frame};
#[cfg(target_arch = "wasm32")]
pub use hud::HudOverlay;
pub use pipeline::RenderState;
