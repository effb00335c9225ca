//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Designer-facing movement tuning. Loaded from `assets/data/movement.ron`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Peak height of a jump arc (world units).
    pub jump_height: f32,
    /// Seconds from launch to apex.
    pub time_to_jump_apex: f32,
    /// Seconds after a jump before a wall jump may fire.
    pub wall_jump_wait: f32,
    /// Horizontal wall jump kick, as a multiple of `move_speed`.
    pub wall_jump_force: f32,
    pub invert_gravity: bool,
    pub invert_horizontal_axis: bool,
    pub move_speed: f32,
    pub acceleration_time_grounded: f32,
    pub acceleration_time_airborne: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            jump_height: 1.5,
            time_to_jump_apex: 0.4,
            wall_jump_wait: 0.2,
            wall_jump_force: 2.0,
            invert_gravity: false,
            invert_horizontal_axis: false,
            move_speed: 6.0,
            acceleration_time_grounded: 0.1,
            acceleration_time_airborne: 0.2,
        }
    }
}

/// Rejected tuning values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("time_to_jump_apex must be positive, got {0}")]
    NonPositiveTimeToApex(f32),
    #[error("jump_height must be positive, got {0}")]
    NonPositiveJumpHeight(f32),
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
}

impl MovementTuning {
    /// Tuning for the pixel-scale world the game renders: a 48 px tall body,
    /// a 96 px jump apex and 320 px/s walking speed. Mirrors the shipped
    /// `assets/data/movement.ron` and is used when that file cannot be loaded.
    pub fn pixel_defaults() -> Self {
        Self {
            jump_height: 96.0,
            move_speed: 320.0,
            ..Self::default()
        }
    }

    /// Check every numeric field. Called once at load time so the per-frame
    /// tick never sees a division by zero.
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("jump_height", self.jump_height),
            ("time_to_jump_apex", self.time_to_jump_apex),
            ("wall_jump_wait", self.wall_jump_wait),
            ("wall_jump_force", self.wall_jump_force),
            ("move_speed", self.move_speed),
            ("acceleration_time_grounded", self.acceleration_time_grounded),
            ("acceleration_time_airborne", self.acceleration_time_airborne),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(TuningError::NonFinite { field });
            }
        }

        if self.time_to_jump_apex <= 0.0 {
            return Err(TuningError::NonPositiveTimeToApex(self.time_to_jump_apex));
        }
        if self.jump_height <= 0.0 {
            return Err(TuningError::NonPositiveJumpHeight(self.jump_height));
        }

        // Everything after the two apex fields only needs to be non-negative.
        for &(field, value) in &fields[2..] {
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        Ok(())
    }

    /// Whether the supporting surface is the one reported by `below`.
    /// Under inverted gravity the ceiling side plays that role.
    pub fn is_grounded(&self, above: bool, below: bool) -> bool {
        if self.invert_gravity { above } else { below }
    }
}

/// Raw input sampled once per frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal and vertical axes, each in [-1, 1].
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub toggle_gravity_just_pressed: bool,
}
