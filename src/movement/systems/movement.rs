//! Movement domain: per-frame controller systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    CollisionBody, FrameInput, GameLayer, MotionParams, MotionState, MovementInput,
    MovementTuning, Player, PlayerStateChanged, RaycastMover, SpatialRayCaster,
};

/// Flip gravity on request. The new parameters apply from the next tick.
pub(crate) fn toggle_gravity(
    input: Res<MovementInput>,
    mut tuning: ResMut<MovementTuning>,
    mut params: ResMut<MotionParams>,
) {
    if !input.toggle_gravity_just_pressed {
        return;
    }

    tuning.invert_gravity = !tuning.invert_gravity;
    *params = MotionParams::recompute(&tuning);

    info!(
        "Gravity inverted={}: gravity={}, jump_velocity={}",
        tuning.invert_gravity, params.gravity, params.jump_velocity
    );
}

pub(crate) fn drive_controller(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    params: Res<MotionParams>,
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &mut MotionState, &mut CollisionBody, &mut Transform), With<Player>>,
    mut state_events: MessageWriter<PlayerStateChanged>,
) {
    let frame = FrameInput {
        dt: time.delta_secs(),
        elapsed: time.elapsed_secs(),
        jump_pressed: input.jump_just_pressed,
        axis: input.axis,
    };

    // Only level geometry blocks the mover
    let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);
    let caster = SpatialRayCaster::new(&spatial_query, filter);

    for (entity, mut motion, mut body, mut transform) in &mut query {
        let start = transform.translation.truncate();
        let mut mover = RaycastMover::new(&caster, &mut body, start);
        let outcome = motion.tick(&params, &tuning, &frame, &mut mover);

        let position = mover.position();
        transform.translation.x = position.x;
        transform.translation.y = position.y;

        if let Some(transition) = outcome.transition {
            info!("Current state: {:?}", transition.current);
            state_events.write(PlayerStateChanged {
                entity,
                current: transition.current,
                previous: transition.previous,
            });
        }
    }
}

pub(crate) fn log_state_changes(mut events: MessageReader<PlayerStateChanged>) {
    for event in events.read() {
        debug!(
            "{:?}: {:?} -> {:?}",
            event.entity, event.previous, event.current
        );
    }
}
