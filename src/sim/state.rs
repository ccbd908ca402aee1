//! Game state and core simulation types
//!
//! One `GameState` is one play-through: ship, obstacles, score and phase.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Current screen of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for Play
    #[default]
    Title,
    /// Active run
    Playing,
    /// Run ended by a collision; frozen for display
    GameOver,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Obstacle spawned above the canvas
    Spawned { obstacle_id: u32 },
    /// Obstacle cleared; `score` is the new total
    Scored { obstacle_id: u32, score: u32 },
    /// Ship hit a brick of this obstacle
    Collided { obstacle_id: u32 },
}

/// Size of the drawing surface, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Ship {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(size),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Place the ship so its centre sits on `point`
    pub fn center_on(&mut self, point: Vec2) {
        self.pos = point - self.size / 2.0;
    }
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of the current run's obstacle sequence
    pub seed: u64,
    pub arena: Arena,
    pub phase: GamePhase,
    pub score: u32,
    pub ship: Ship,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a session on the title screen
    pub fn new(seed: u64, arena: Arena, tuning: &Tuning) -> Self {
        let mut ship = Ship::new(tuning.ship_size);
        ship.center_on(arena.center());
        Self {
            seed,
            arena,
            phase: GamePhase::Title,
            score: 0,
            ship,
            obstacles: Vec::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Clear the previous run and enter `Playing`
    ///
    /// `seed` reseeds the obstacle sequence for the new run.
    pub fn begin_run(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.obstacles.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.ship.center_on(self.arena.center());
        self.phase = GamePhase::Playing;
    }

    /// Go back to the title screen, keeping the last run's score and obstacles
    pub fn return_to_title(&mut self) {
        self.phase = GamePhase::Title;
    }

    /// Spawn a new obstacle above the canvas
    pub fn spawn_obstacle(&mut self, tuning: &Tuning) -> GameEvent {
        let id = self.next_entity_id();
        let obstacle = Obstacle::spawn(
            &mut self.rng,
            id,
            self.arena.width,
            tuning.gap_width,
            tuning.obstacle_height,
        );
        self.obstacles.push(obstacle);
        GameEvent::Spawned { obstacle_id: id }
    }
}
