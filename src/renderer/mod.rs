//! Canvas rendering
//!
//! Drawing is a pure projection of `GameState` onto a `Surface`. The web
//! build draws with a 2D canvas context; tests record the draw calls.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::sim::{GameState, Rect};
use crate::tuning::Tuning;

/// Image handles the surface knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Ship,
    Brick,
}

/// 2D drawing target with a fixed pixel size
pub trait Surface {
    fn clear(&mut self);
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, width: f32, height: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// Text shown for a score, both in-game and on the game-over panel
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

fn draw_rect<S: Surface + ?Sized>(surface: &mut S, sprite: Sprite, rect: Rect) {
    surface.draw_image(sprite, rect.x, rect.y, rect.width, rect.height);
}

/// Draw every brick that has a positive width
pub fn draw_obstacles<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    for obs in &state.obstacles {
        for rect in obs.solid_rects() {
            draw_rect(surface, Sprite::Brick, rect);
        }
    }
}

/// Draw the ship sprite at its current rect
pub fn draw_ship<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    draw_rect(surface, Sprite::Ship, state.ship.rect());
}

/// Draw the running score at the HUD anchor
pub fn draw_score<S: Surface + ?Sized>(surface: &mut S, state: &GameState, tuning: &Tuning) {
    let (x, y) = tuning.score_anchor;
    surface.fill_text(&score_text(state.score), x, y);
}

/// Draw the playfield: obstacles, then ship, then score
pub fn draw_playfield<S: Surface + ?Sized>(surface: &mut S, state: &GameState, tuning: &Tuning) {
    draw_obstacles(surface, state);
    draw_ship(surface, state);
    draw_score(surface, state, tuning);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Arena, Obstacle};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.calls.push("clear".into());
        }
        fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, width: f32, height: f32) {
            self.calls
                .push(format!("{:?} {} {} {} {}", sprite, x, y, width, height));
        }
        fn fill_text(&mut self, text: &str, x: f32, y: f32) {
            self.calls.push(format!("text {} {} {}", text, x, y));
        }
    }

    #[test]
    fn test_playfield_draw_order() {
        let tuning = Tuning::default();
        let mut state = GameState::new(1, Arena::new(480.0, 640.0), &tuning);
        state.begin_run(1);
        state.score = 4;
        let mut obs = Obstacle::with_gap(1, 100.0, 480.0, 180.0, 40.0);
        obs.y = 50.0;
        state.obstacles.push(obs);

        let mut surface = Recorder::default();
        draw_playfield(&mut surface, &state, &tuning);
        assert_eq!(
            surface.calls,
            vec![
                "Brick 0 50 100 40",
                "Brick 280 50 200 40",
                "Ship 208 288 64 64",
                "text Score: 4 20 40",
            ]
        );
    }

    #[test]
    fn test_skips_empty_bricks() {
        let tuning = Tuning::default();
        let mut state = GameState::new(1, Arena::new(480.0, 640.0), &tuning);
        state
            .obstacles
            .push(Obstacle::with_gap(1, 300.0, 480.0, 180.0, 40.0));

        let mut surface = Recorder::default();
        draw_obstacles(&mut surface, &state);
        assert_eq!(surface.calls, vec!["Brick 0 -40 300 40"]);
    }

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(12), "Score: 12");
    }
}
