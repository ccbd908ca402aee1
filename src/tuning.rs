//! Data-driven game balance
//!
//! Defaults come from `consts`. A JSON override can be stored in
//! LocalStorage; fields left out keep their default values.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;
use crate::sim::Arena;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ship width and height
    pub ship_size: f32,
    /// Height of each obstacle row
    pub obstacle_height: f32,
    /// Clearance between the two bricks of a row
    pub gap_width: f32,
    /// Rows move this far down per frame
    pub obstacle_speed: f32,
    /// Minimum time between spawns
    pub obstacle_interval_ms: f64,
    /// Where the score text is drawn
    pub score_anchor: (f32, f32),
    /// Scale obstacle speed by frame time instead of moving a fixed step per frame
    pub scale_speed_with_time: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_size: SHIP_SIZE,
            obstacle_height: OBSTACLE_HEIGHT,
            gap_width: GAP_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_interval_ms: OBSTACLE_INTERVAL_MS,
            score_anchor: SCORE_ANCHOR,
            scale_speed_with_time: false,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "brick_dodge_tuning";

    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that every size, speed and interval is usable
    pub fn validate(&self) -> Result<(), TuningError> {
        let checks = [
            ("ship_size", self.ship_size as f64),
            ("obstacle_height", self.obstacle_height as f64),
            ("gap_width", self.gap_width as f64),
            ("obstacle_speed", self.obstacle_speed as f64),
            ("obstacle_interval_ms", self.obstacle_interval_ms),
        ];
        for (field, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        Ok(())
    }

    /// Check that a gap fits inside the arena
    pub fn validate_for(&self, arena: &Arena) -> Result<(), TuningError> {
        self.validate()?;
        if self.gap_width >= arena.width {
            return Err(TuningError::GapTooWide {
                gap: self.gap_width,
                canvas: arena.width,
            });
        }
        Ok(())
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning override from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring tuning override: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tuning = Tuning::default();
        assert_eq!(tuning.ship_size, 64.0);
        assert_eq!(tuning.obstacle_height, 40.0);
        assert_eq!(tuning.gap_width, 180.0);
        assert_eq!(tuning.obstacle_speed, 3.0);
        assert_eq!(tuning.obstacle_interval_ms, 1200.0);
        assert!(!tuning.scale_speed_with_time);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gap_width": 220, "scale_speed_with_time": true }"#)
            .unwrap();
        assert_eq!(tuning.gap_width, 220.0);
        assert!(tuning.scale_speed_with_time);
        assert_eq!(tuning.obstacle_speed, 3.0);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let err = Tuning::from_json(r#"{ "obstacle_speed": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::NotPositive {
                field: "obstacle_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_native_load_uses_defaults() {
        assert_eq!(Tuning::load(), Tuning::default());
    }

    #[test]
    fn test_gap_must_fit_arena() {
        let tuning = Tuning::default();
        assert!(tuning.validate_for(&Arena::new(480.0, 640.0)).is_ok());
        assert!(matches!(
            tuning.validate_for(&Arena::new(180.0, 640.0)),
            Err(TuningError::GapTooWide { .. })
        ));
    }
}
