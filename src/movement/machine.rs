//! Movement domain: per-tick motion state machine.
//!
//! One call to [`MotionState::tick`] resolves contacts, jump requests and
//! velocity integration for a single frame, then hands the resulting
//! displacement to a [`CollisionMover`]. Steps run in a fixed order because
//! later steps read the jump phase written by earlier ones.

use bevy::prelude::*;

use crate::movement::{
    CollisionMover, CollisionReport, JumpPhase, MotionParams, MotionState, MovementTuning,
    PlayerState, smooth_damp,
};

/// Raw stick deflection toward a wall needed to trigger a wall jump.
pub const WALL_JUMP_DEFLECTION: f32 = 0.6;

/// Everything the state machine needs from the input source and the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Monotonic elapsed time in seconds.
    pub elapsed: f32,
    pub jump_pressed: bool,
    /// Raw horizontal and vertical axes in [-1, 1].
    pub axis: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub current: PlayerState,
    pub previous: PlayerState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Displacement requested from the mover (before clipping).
    pub displacement: Vec2,
    pub state: PlayerState,
    /// Set when the discrete state differs from its value at tick start.
    pub transition: Option<StateTransition>,
}

impl MotionState {
    pub fn tick<M: CollisionMover>(
        &mut self,
        params: &MotionParams,
        tuning: &MovementTuning,
        frame: &FrameInput,
        mover: &mut M,
    ) -> TickOutcome {
        let start_state = self.state;
        let contact = mover.collisions();

        // Ground and ceiling are treated alike here regardless of gravity.
        if contact.above || contact.below {
            self.phase = JumpPhase::Grounded;
            self.velocity.y = 0.0;
            self.last_jump_time = 0.0;
            self.state = if self.velocity == Vec2::ZERO {
                PlayerState::Idle
            } else {
                PlayerState::Moving
            };
        }

        // Double jump is checked before the initial jump, so a fresh jump
        // can never also consume the double jump on the same tick.
        // Deliberately leaves the discrete state alone.
        if frame.jump_pressed && self.phase.is_jumping() && !self.phase.has_double_jumped() {
            self.phase = self.phase.with_double_jump();
            self.velocity.y = params.jump_velocity;
        }

        let supported = tuning.is_grounded(contact.above, contact.below);

        if frame.jump_pressed && !self.phase.is_jumping() && supported {
            self.last_jump_time = frame.elapsed;
            self.phase = JumpPhase::AirborneFresh;
            self.state = PlayerState::Jumping;
            self.velocity.y = params.jump_velocity;
        }

        let input_x = if tuning.invert_horizontal_axis {
            -frame.axis.x
        } else {
            frame.axis.x
        };
        let target_velocity_x = input_x * tuning.move_speed;

        if let Some(push) = self.wall_jump_push(tuning, frame, contact) {
            self.phase = self.phase.with_wall_jump();
            self.velocity.x = push * tuning.wall_jump_force * tuning.move_speed;
            self.velocity.y = params.jump_velocity;
        }

        // Smoothing runs even right after a wall jump and starts pulling
        // the kick back toward the input target within this same tick.
        let smooth_time = if supported {
            tuning.acceleration_time_grounded
        } else {
            tuning.acceleration_time_airborne
        };
        self.velocity.x = smooth_damp(
            self.velocity.x,
            target_velocity_x,
            &mut self.velocity_x_smoothing,
            smooth_time,
            frame.dt,
        );

        self.velocity.y += params.gravity * frame.dt;

        let displacement = self.velocity * frame.dt;
        mover.move_by(displacement);

        let transition = (self.state != start_state).then(|| {
            self.previous_state = start_state;
            StateTransition {
                current: self.state,
                previous: start_state,
            }
        });

        TickOutcome {
            displacement,
            state: self.state,
            transition,
        }
    }

    /// Horizontal push direction (+1 right, -1 left) if a wall jump fires.
    fn wall_jump_push(
        &self,
        tuning: &MovementTuning,
        frame: &FrameInput,
        contact: CollisionReport,
    ) -> Option<f32> {
        let cooled_down = frame.elapsed > self.last_jump_time + tuning.wall_jump_wait;
        if !frame.jump_pressed
            || !self.phase.is_jumping()
            || self.phase.has_wall_jumped()
            || !cooled_down
        {
            return None;
        }

        // Deflection is measured on the raw axis; with the axis inverted the
        // player has to push away from the wall on the stick.
        let toward = if tuning.invert_horizontal_axis {
            -frame.axis.x
        } else {
            frame.axis.x
        };

        if contact.left && toward < -WALL_JUMP_DEFLECTION {
            Some(1.0)
        } else if contact.right && toward > WALL_JUMP_DEFLECTION {
            Some(-1.0)
        } else {
            None
        }
    }
}
