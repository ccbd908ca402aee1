//! Pointer input mapping

use glam::Vec2;

use crate::sim::{GamePhase, GameState};

/// Convert a client-space pointer position to canvas space
#[inline]
pub fn client_to_canvas(client: Vec2, canvas_origin: Vec2) -> Vec2 {
    client - canvas_origin
}

/// Centre the ship on the pointer
///
/// Ignored unless a run is in progress. Returns whether the ship moved.
pub fn apply_pointer(state: &mut GameState, pointer: Vec2) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    state.ship.center_on(pointer);
    true
}
