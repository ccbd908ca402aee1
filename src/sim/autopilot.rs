//! Idle/demo mode: steers the ship through the next gap

use glam::Vec2;

use super::state::{GamePhase, GameState};

/// Fraction of the canvas height where the autopilot parks the ship
const CRUISE_HEIGHT: f32 = 0.75;

/// Pointer position the autopilot would produce this frame
///
/// Aims at the gap of the lowest obstacle the ship has not yet cleared,
/// moving at most `max_step` pixels per call. Returns `None` outside `Playing`.
pub fn steer(state: &GameState, max_step: f32) -> Option<Vec2> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let current = state.ship.pos + state.ship.size / 2.0;
    let cruise_y = state.arena.height * CRUISE_HEIGHT;

    let target_x = state
        .obstacles
        .iter()
        .filter(|o| !o.passed)
        .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
        .map(|o| o.gap_center())
        .unwrap_or(state.arena.width / 2.0);

    let delta = Vec2::new(target_x, cruise_y) - current;
    Some(current + delta.clamp_length_max(max_step))
}
