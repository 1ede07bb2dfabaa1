//! Startup errors
//!
//! Gameplay never fails; only acquiring the drawing surface can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("no browser window available")]
    NoWindow,

    #[error("no document attached to the window")]
    NoDocument,

    #[error("no canvas element found (expected #{0})")]
    NoCanvas(&'static str),

    #[error("element #{0} is not a canvas")]
    NotACanvas(&'static str),

    #[error("failed to create GPU surface: {0}")]
    Surface(String),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(String),

    #[error("failed to create GPU device: {0}")]
    Device(String),
}

pub type Result<T> = std::result::Result<T, SetupError>;
