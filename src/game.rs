//! Frame driver and screen flow
//!
//! `Game` owns the session and turns host callbacks (animation frames,
//! pointer moves, button clicks) into simulation steps, draw calls and
//! overlay updates. Every callback runs to completion.

use glam::Vec2;

use crate::error::TuningError;
use crate::platform::Overlay;
use crate::platform::input::apply_pointer;
use crate::renderer::{Surface, draw_playfield, score_text};
use crate::sim::{Arena, GameEvent, GamePhase, GameState, steer, tick};
use crate::tuning::Tuning;

/// Autopilot travel per frame, in pixels
const AUTOPILOT_STEP: f32 = 6.0;

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub tuning: Tuning,
    /// Host timestamp of the last spawn (0 at the start of a run)
    last_spawn_ms: f64,
    /// Host timestamp of the previous frame
    last_time_ms: f64,
    /// Idle/demo mode - the autopilot steers the ship
    pub autopilot: bool,
}

impl Game {
    /// Create a game on the title screen
    pub fn new(seed: u64, arena: Arena, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate_for(&arena)?;
        Ok(Self {
            state: GameState::new(seed, arena, &tuning),
            tuning,
            last_spawn_ms: 0.0,
            last_time_ms: 0.0,
            autopilot: false,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    fn start_run(&mut self, seed: u64, overlay: &mut dyn Overlay) {
        self.state.begin_run(seed);
        self.last_spawn_ms = 0.0;
        self.last_time_ms = 0.0;
        overlay.set_title_visible(false);
        overlay.set_game_over_visible(false);
        log::info!("Run started with seed: {}", seed);
    }

    /// Play button on the title screen
    pub fn play(&mut self, seed: u64, overlay: &mut dyn Overlay) -> bool {
        if self.state.phase != GamePhase::Title {
            log::debug!("Ignoring play in {:?}", self.state.phase);
            return false;
        }
        self.start_run(seed, overlay);
        true
    }

    /// Restart button on the game-over screen
    pub fn restart(&mut self, seed: u64, overlay: &mut dyn Overlay) -> bool {
        if self.state.phase != GamePhase::GameOver {
            log::debug!("Ignoring restart in {:?}", self.state.phase);
            return false;
        }
        self.start_run(seed, overlay);
        true
    }

    /// Main menu button on the game-over screen
    pub fn main_menu(&mut self, overlay: &mut dyn Overlay) -> bool {
        if self.state.phase != GamePhase::GameOver {
            log::debug!("Ignoring main menu in {:?}", self.state.phase);
            return false;
        }
        self.state.return_to_title();
        overlay.set_game_over_visible(false);
        overlay.set_title_visible(true);
        log::info!("Back to title (last score {})", self.state.score);
        true
    }

    /// Pointer moved to `pos` in canvas space
    ///
    /// Ignored while the autopilot is flying.
    pub fn pointer_moved(&mut self, pos: Vec2) {
        if !self.autopilot {
            apply_pointer(&mut self.state, pos);
        }
    }

    pub fn toggle_autopilot(&mut self) -> bool {
        self.autopilot = !self.autopilot;
        log::info!("Autopilot: {}", self.autopilot);
        self.autopilot
    }

    /// Run one animation frame at host time `timestamp` (ms)
    ///
    /// Always clears the surface. Steps and spawns only while `Playing`.
    pub fn frame(
        &mut self,
        timestamp: f64,
        surface: &mut dyn Surface,
        overlay: &mut dyn Overlay,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let dt_ms = timestamp - self.last_time_ms;
        surface.clear();

        match self.state.phase {
            GamePhase::Playing => {
                if self.autopilot {
                    if let Some(target) = steer(&self.state, AUTOPILOT_STEP) {
                        apply_pointer(&mut self.state, target);
                    }
                }

                if timestamp - self.last_spawn_ms > self.tuning.obstacle_interval_ms {
                    events.push(self.state.spawn_obstacle(&self.tuning));
                    self.last_spawn_ms = timestamp;
                }

                events.extend(tick(&mut self.state, &self.tuning, dt_ms));
                for event in &events {
                    match event {
                        GameEvent::Spawned { obstacle_id } => {
                            log::debug!("Spawned obstacle {}", obstacle_id)
                        }
                        GameEvent::Scored { obstacle_id, score } => {
                            log::debug!("Cleared obstacle {} (score {})", obstacle_id, score)
                        }
                        GameEvent::Collided { obstacle_id } => {
                            log::debug!("Hit obstacle {}", obstacle_id)
                        }
                    }
                }
                if self.state.phase == GamePhase::GameOver {
                    log::info!(
                        "Game over with score {} after {} frames",
                        self.state.score,
                        self.state.time_ticks
                    );
                }

                draw_playfield(surface, &self.state, &self.tuning);
            }
            GamePhase::GameOver => {
                draw_playfield(surface, &self.state, &self.tuning);
                overlay.set_final_score(&score_text(self.state.score));
                overlay.set_game_over_visible(true);
            }
            GamePhase::Title => {
                overlay.set_game_over_visible(false);
            }
        }

        self.last_time_ms = timestamp;
        events
    }
}
