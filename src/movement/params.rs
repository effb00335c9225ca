//! Movement domain: gravity and jump velocity derived from tuning.

use bevy::prelude::*;

use crate::movement::{MovementTuning, TuningError};

/// Signed gravity acceleration and jump launch speed.
///
/// Under normal gravity `gravity < 0` and `jump_velocity > 0`; inverting
/// gravity flips both signs while keeping their magnitudes.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    pub gravity: f32,
    pub jump_velocity: f32,
}

impl MotionParams {
    /// Derive parameters from tuning. `time_to_jump_apex` must be positive;
    /// use [`MotionParams::from_tuning`] when the tuning has not been validated.
    pub fn recompute(tuning: &MovementTuning) -> Self {
        // Kinematics: h = g t^2 / 2 and v = g t at the apex.
        let gravity = -(2.0 * tuning.jump_height) / tuning.time_to_jump_apex.powi(2);
        let jump_velocity = gravity.abs() * tuning.time_to_jump_apex;

        if tuning.invert_gravity {
            Self {
                gravity: -gravity,
                jump_velocity: -jump_velocity,
            }
        } else {
            Self {
                gravity,
                jump_velocity,
            }
        }
    }

    pub fn from_tuning(tuning: &MovementTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::recompute(tuning))
    }
}
