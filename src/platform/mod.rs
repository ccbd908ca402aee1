//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (pointer to ship position)
//! - Overlay panels (title and game over screens)
//! - Image loading and DOM lookup (web only)

pub mod input;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Host-provided overlay panels the game toggles
///
/// Implementations should make repeated calls with the same value cheap;
/// the frame driver reasserts visibility every frame.
pub trait Overlay {
    fn set_title_visible(&mut self, visible: bool);
    fn set_game_over_visible(&mut self, visible: bool);
    /// Text shown on the game-over panel
    fn set_final_score(&mut self, text: &str);
}
