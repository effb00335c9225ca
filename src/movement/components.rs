//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::CollisionReport;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, ceilings)
    Ground,
    /// Wall surfaces
    Wall,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Discrete movement state exposed to the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum PlayerState {
    #[default]
    Idle,
    Moving,
    Jumping,
}

/// Progress through one airborne episode.
///
/// Only the initial jump leaves `Grounded`, and only a ground or ceiling
/// contact returns to it. The double jump and the wall jump are consumed
/// independently, so `AirborneSpent` holds the case where both are gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum JumpPhase {
    /// No jump in progress. Walking off a ledge stays here.
    #[default]
    Grounded,
    AirborneFresh,
    AirborneDoubleJumped,
    AirborneWallJumped,
    AirborneSpent,
}

impl JumpPhase {
    pub fn is_jumping(self) -> bool {
        self != JumpPhase::Grounded
    }

    pub fn has_double_jumped(self) -> bool {
        matches!(
            self,
            JumpPhase::AirborneDoubleJumped | JumpPhase::AirborneSpent
        )
    }

    pub fn has_wall_jumped(self) -> bool {
        matches!(self, JumpPhase::AirborneWallJumped | JumpPhase::AirborneSpent)
    }

    /// Phase after consuming the double jump. No-op outside a jump.
    pub fn with_double_jump(self) -> Self {
        match self {
            JumpPhase::AirborneFresh => JumpPhase::AirborneDoubleJumped,
            JumpPhase::AirborneWallJumped => JumpPhase::AirborneSpent,
            other => other,
        }
    }

    /// Phase after consuming the wall jump. No-op outside a jump.
    pub fn with_wall_jump(self) -> Self {
        match self {
            JumpPhase::AirborneFresh => JumpPhase::AirborneWallJumped,
            JumpPhase::AirborneDoubleJumped => JumpPhase::AirborneSpent,
            other => other,
        }
    }
}

/// Per-entity runtime state of the motion state machine.
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub struct MotionState {
    pub velocity: Vec2,
    pub state: PlayerState,
    pub previous_state: PlayerState,
    pub phase: JumpPhase,
    /// Accumulator carried between `smooth_damp` calls.
    pub velocity_x_smoothing: f32,
    /// Elapsed time at the last initial jump, 0 after any contact.
    pub last_jump_time: f32,
}

/// Box shape and raycast settings used to move the entity, plus the
/// collision report left behind by the most recent move.
#[derive(Component, Debug, Clone)]
pub struct CollisionBody {
    pub half_extents: Vec2,
    pub skin_width: f32,
    pub horizontal_rays: u32,
    pub vertical_rays: u32,
    pub collisions: CollisionReport,
}

impl CollisionBody {
    pub fn new(size: Vec2) -> Self {
        Self {
            half_extents: size * 0.5,
            ..default()
        }
    }
}

impl Default for CollisionBody {
    fn default() -> Self {
        Self {
            half_extents: Vec2::new(12.0, 24.0),
            skin_width: 0.5,
            horizontal_rays: 4,
            vertical_rays: 4,
            collisions: CollisionReport::default(),
        }
    }
}
