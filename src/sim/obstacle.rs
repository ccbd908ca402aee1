//! Brick rows with a single gap
//!
//! An obstacle spans the full canvas width: a left brick from the edge up to
//! the gap, and a right brick from the end of the gap to the other edge.
//! Shape is fixed at spawn; only `y` and `passed` change afterwards.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Horizontal extent of one brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub width: f32,
}

impl Brick {
    /// Bricks with no width are neither drawn nor collided
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.width > 0.0
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// A scrolling row of two bricks separated by a gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top edge in canvas space
    pub y: f32,
    pub height: f32,
    pub left: Brick,
    pub right: Brick,
    /// Already counted toward score
    pub passed: bool,
}

impl Obstacle {
    /// Build an obstacle just above the canvas with its gap starting at `gap_x`
    pub fn with_gap(id: u32, gap_x: f32, canvas_width: f32, gap_width: f32, height: f32) -> Self {
        let right_x = gap_x + gap_width;
        Self {
            id,
            y: -height,
            height,
            left: Brick { x: 0.0, width: gap_x },
            right: Brick {
                x: right_x,
                width: canvas_width - right_x,
            },
            passed: false,
        }
    }

    /// Spawn an obstacle with a uniformly random gap offset in `[0, canvas_width - gap_width)`
    pub fn spawn<R: Rng>(
        rng: &mut R,
        id: u32,
        canvas_width: f32,
        gap_width: f32,
        height: f32,
    ) -> Self {
        let span = canvas_width - gap_width;
        // A gap at least as wide as the canvas leaves no room to move it
        let gap_x = if span > 0.0 {
            rng.random_range(0.0..span)
        } else {
            0.0
        };
        Self::with_gap(id, gap_x, canvas_width, gap_width, height)
    }

    /// Left edge of the gap
    #[inline]
    pub fn gap_x(&self) -> f32 {
        self.left.width
    }

    /// Horizontal centre of the gap
    pub fn gap_center(&self) -> f32 {
        (self.left.right_edge() + self.right.x) / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn left_rect(&self) -> Rect {
        Rect::new(self.left.x, self.y, self.left.width, self.height)
    }

    pub fn right_rect(&self) -> Rect {
        Rect::new(self.right.x, self.y, self.right.width, self.height)
    }

    /// Brick rects that can be drawn and collided with
    pub fn solid_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        [(self.left, self.left_rect()), (self.right, self.right_rect())]
            .into_iter()
            .filter(|(brick, _)| brick.is_solid())
            .map(|(_, rect)| rect)
    }

    /// True once the whole row has scrolled past the bottom of the canvas
    #[inline]
    pub fn is_off_screen(&self, canvas_height: f32) -> bool {
        self.y >= canvas_height
    }
}
