//! Brick Dodge - a falling-brick dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacles, collisions, game state)
//! - `game`: Frame driver and screen flow
//! - `renderer`: Canvas drawing contract
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Ship sprite size (square)
    pub const SHIP_SIZE: f32 = 64.0;

    /// Obstacle row height
    pub const OBSTACLE_HEIGHT: f32 = 40.0;
    /// Horizontal clearance between the left and right bricks
    pub const GAP_WIDTH: f32 = 180.0;
    /// Vertical advance per frame
    pub const OBSTACLE_SPEED: f32 = 3.0;
    /// Milliseconds between obstacle spawns
    pub const OBSTACLE_INTERVAL_MS: f64 = 1200.0;

    /// Nominal frame length used when speed scaling is enabled (60 Hz)
    pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;

    /// Score text anchor (top-left of the canvas)
    pub const SCORE_ANCHOR: (f32, f32) = (20.0, 40.0);
}
