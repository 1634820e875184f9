//! Data-driven physics tuning
//!
//! All motion is frame-count based: speeds are pixels per tick and
//! accelerations pixels per tick². The simulation never scales by measured
//! wall-clock time, so a given input sequence always replays identically.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration applied to airborne players and the free ball
    pub gravity: f32,
    /// Horizontal/descend displacement per tick while a key is held
    pub player_speed: f32,
    /// Upward speed given on jump
    pub jump_impulse: f32,
    /// Fraction of speed kept (and reversed) on ground/wall bounce
    pub bounce_damping: f32,
    /// Ball speed right after release
    pub launch_speed: f32,
    /// Length of the aim preview line
    pub aim_line_length: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            player_speed: 5.0,
            jump_impulse: 10.0,
            bounce_damping: 0.5,
            launch_speed: 20.0,
            aim_line_length: 150.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        log::debug!("Loaded tuning: {:?}", tuning);
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.launch_speed, 20.0);
        assert_eq!(tuning.player_speed, 5.0);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Tuning::from_json("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Tuning::from_json("{ gravity: }").is_err());
    }
}
