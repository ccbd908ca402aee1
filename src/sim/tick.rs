//! Per-frame simulation step
//!
//! Advances obstacles, prunes the ones that left the canvas, then scores
//! and collides the rest against the ship.

use super::rect::intersects;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::NOMINAL_FRAME_MS;
use crate::tuning::Tuning;

/// Longest frame gap honoured when speed scaling is on (avoids teleporting rows)
const MAX_SCALED_FRAME_MS: f64 = 100.0;

/// Vertical distance obstacles travel this frame
pub fn frame_advance(tuning: &Tuning, dt_ms: f64) -> f32 {
    if tuning.scale_speed_with_time {
        let dt = dt_ms.clamp(0.0, MAX_SCALED_FRAME_MS);
        tuning.obstacle_speed * (dt / NOMINAL_FRAME_MS) as f32
    } else {
        tuning.obstacle_speed
    }
}

/// Advance the game state by one frame
///
/// Does nothing outside `Playing`. A collision switches the phase to
/// `GameOver`; scoring for the rest of the frame still completes.
pub fn tick(state: &mut GameState, tuning: &Tuning, dt_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    // Advance
    let advance = frame_advance(tuning, dt_ms);
    for obs in &mut state.obstacles {
        obs.y += advance;
    }

    // Prune
    let canvas_height = state.arena.height;
    state.obstacles.retain(|obs| !obs.is_off_screen(canvas_height));

    // Score and collide
    let ship = state.ship.rect();
    let ship_bottom = state.ship.bottom();
    let mut collided = false;
    for obs in &mut state.obstacles {
        if !obs.passed && obs.bottom() > ship_bottom {
            obs.passed = true;
            state.score += 1;
            events.push(GameEvent::Scored {
                obstacle_id: obs.id,
                score: state.score,
            });
        }

        if intersects(&ship, &obs.left_rect()) || intersects(&ship, &obs.right_rect()) {
            collided = true;
            events.push(GameEvent::Collided {
                obstacle_id: obs.id,
            });
        }
    }

    if collided {
        state.phase = GamePhase::GameOver;
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::Obstacle;
    use crate::sim::state::Arena;
    use glam::Vec2;

    fn playing_state() -> (GameState, Tuning) {
        let tuning = Tuning::default();
        let mut state = GameState::new(12345, Arena::new(480.0, 640.0), &tuning);
        state.begin_run(12345);
        (state, tuning)
    }

    fn push_row(state: &mut GameState, gap_x: f32, y: f32) -> u32 {
        let id = state.next_entity_id();
        let mut obs = Obstacle::with_gap(id, gap_x, 480.0, 180.0, 40.0);
        obs.y = y;
        state.obstacles.push(obs);
        id
    }

    #[test]
    fn test_tick_advances_by_fixed_speed() {
        let (mut state, tuning) = playing_state();
        push_row(&mut state, 100.0, -40.0);
        tick(&mut state, &tuning, 16.7);
        assert_eq!(state.obstacles[0].y, -37.0);
        // Elapsed time is ignored by default
        tick(&mut state, &tuning, 250.0);
        assert_eq!(state.obstacles[0].y, -34.0);
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_scaled_speed_follows_elapsed_time() {
        let (mut state, mut tuning) = playing_state();
        tuning.scale_speed_with_time = true;
        push_row(&mut state, 100.0, 0.0);
        tick(&mut state, &tuning, NOMINAL_FRAME_MS * 2.0);
        assert!((state.obstacles[0].y - 6.0).abs() < 1e-4);
        // Long stalls are capped
        let before = state.obstacles[0].y;
        tick(&mut state, &tuning, 10_000.0);
        let moved = state.obstacles[0].y - before;
        assert!((moved - 3.0 * (MAX_SCALED_FRAME_MS / NOMINAL_FRAME_MS) as f32).abs() < 1e-3);
    }

    #[test]
    fn test_prune_off_screen_rows() {
        let (mut state, tuning) = playing_state();
        state.ship.pos = Vec2::new(208.0, 0.0);
        push_row(&mut state, 100.0, 637.0);
        push_row(&mut state, 100.0, 600.0);
        tick(&mut state, &tuning, 16.7);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.obstacles.iter().all(|o| o.y < 640.0));
    }

    #[test]
    fn test_score_once_when_row_passes_ship() {
        let (mut state, tuning) = playing_state();
        // Ship sits in the gap [100, 280)
        state.ship.pos = Vec2::new(210.0, 600.0);
        push_row(&mut state, 100.0, 557.0);

        tick(&mut state, &tuning, 16.7);
        assert_eq!(state.obstacles[0].y, 560.0);
        assert_eq!(state.score, 0);

        state.obstacles[0].y = 602.0;
        tick(&mut state, &tuning, 16.7);
        assert_eq!(state.obstacles[0].y, 605.0);
        assert_eq!(state.score, 0);

        state.obstacles[0].y = 622.0;
        let events = tick(&mut state, &tuning, 16.7);
        assert_eq!(state.obstacles[0].y, 625.0);
        assert_eq!(state.score, 1);
        assert!(state.obstacles[0].passed);
        assert!(matches!(events[0], GameEvent::Scored { score: 1, .. }));

        tick(&mut state, &tuning, 16.7);
        assert_eq!(state.score, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_collision_ends_run() {
        let (mut state, tuning) = playing_state();
        state.ship.pos = Vec2::ZERO;
        let id = push_row(&mut state, 100.0, -3.0);
        let events = tick(&mut state, &tuning, 16.7);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.contains(&GameEvent::Collided { obstacle_id: id }));
    }

    #[test]
    fn test_right_brick_collision() {
        let (mut state, tuning) = playing_state();
        state.ship.pos = Vec2::new(400.0, 10.0);
        push_row(&mut state, 100.0, 0.0);
        tick(&mut state, &tuning, 16.7);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_ship_inside_gap_is_safe() {
        let (mut state, tuning) = playing_state();
        state.ship.pos = Vec2::new(150.0, 10.0);
        push_row(&mut state, 100.0, 0.0);
        tick(&mut state, &tuning, 16.7);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_empty_brick_never_collides() {
        let (mut state, tuning) = playing_state();
        // Gap flush with the left edge: left brick has zero width
        state.ship.pos = Vec2::new(0.0, 10.0);
        push_row(&mut state, 0.0, 0.0);
        tick(&mut state, &tuning, 16.7);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_no_tick_outside_playing() {
        let (mut state, tuning) = playing_state();
        push_row(&mut state, 100.0, 0.0);
        state.phase = GamePhase::GameOver;
        let events = tick(&mut state, &tuning, 16.7);
        assert!(events.is_empty());
        assert_eq!(state.obstacles[0].y, 0.0);

        state.phase = GamePhase::Title;
        tick(&mut state, &tuning, 16.7);
        assert_eq!(state.obstacles[0].y, 0.0);
    }

    #[test]
    fn test_determinism() {
        let tuning = Tuning::default();
        let arena = Arena::new(480.0, 640.0);
        let mut state1 = GameState::new(99999, arena, &tuning);
        let mut state2 = GameState::new(99999, arena, &tuning);
        state1.begin_run(99999);
        state2.begin_run(99999);

        for frame in 0..200 {
            if frame % 70 == 0 {
                state1.spawn_obstacle(&tuning);
                state2.spawn_obstacle(&tuning);
            }
            tick(&mut state1, &tuning, 16.7);
            tick(&mut state2, &tuning, 16.7);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.obstacles.len(), state2.obstacles.len());
        for (a, b) in state1.obstacles.iter().zip(&state2.obstacles) {
            assert_eq!(a.gap_x(), b.gap_x());
            assert_eq!(a.y, b.y);
        }
    }
}
