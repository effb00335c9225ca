//! Movement domain: kinematic platformer controller.
//!
//! [`MotionParams`] turns designer tuning into gravity and jump speed,
//! [`MotionState::tick`] advances one entity by one frame, and the systems in
//! this module drive it from bevy input, time and avian2d spatial queries.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod machine;
mod mover;
mod params;
mod resources;
mod smoothing;
mod systems;

pub use components::{
    CollisionBody, GameLayer, Ground, JumpPhase, MotionState, Player, PlayerState, Wall,
};
pub use events::PlayerStateChanged;
pub use machine::{FrameInput, StateTransition, TickOutcome, WALL_JUMP_DEFLECTION};
pub use mover::{CollisionMover, CollisionReport, RayCaster, RaycastMover, SpatialRayCaster};
pub use params::MotionParams;
pub use resources::{MovementInput, MovementTuning, TuningError};
pub use smoothing::smooth_damp;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{drive_controller, log_state_changes, read_input, toggle_gravity};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        // ContentPlugin inserts validated tuning when the RON file loads.
        if !app.world().contains_resource::<MovementTuning>() {
            let tuning = MovementTuning::pixel_defaults();
            warn!("No movement tuning loaded, using built-in pixel-scale tuning");
            app.insert_resource(MotionParams::recompute(&tuning))
                .insert_resource(tuning);
        }

        register_types(app);

        app.init_resource::<MovementInput>()
            .add_message::<PlayerStateChanged>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, toggle_gravity, drive_controller, log_state_changes).chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}

fn register_types(app: &mut App) {
    app.register_type::<PlayerState>()
        .register_type::<JumpPhase>()
        .register_type::<CollisionReport>();
}
