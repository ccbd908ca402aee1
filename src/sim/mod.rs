//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod obstacle;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::steer;
pub use obstacle::{Brick, Obstacle};
pub use rect::{Rect, intersects};
pub use state::{Arena, GameEvent, GamePhase, GameState, Ship};
pub use tick::{frame_advance, tick};
