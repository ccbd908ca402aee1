//! Error types

use thiserror::Error;

/// Invalid or unreadable tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("gap width {gap} leaves no room for a gap on a {canvas}px wide canvas")]
    GapTooWide { gap: f32, canvas: f32 },
}

/// Failure while wiring the game into the page
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("page has no document")]
    NoDocument,
    #[error("element `#{0}` not found")]
    MissingElement(&'static str),
    #[error("element `#{0}` has the wrong type")]
    WrongElementType(&'static str),
    #[error("2D canvas context is unavailable")]
    NoContext,
    #[error("image `#{0}` failed to load")]
    ImageLoad(&'static str),
    #[error(transparent)]
    Tuning(#[from] TuningError),
}
