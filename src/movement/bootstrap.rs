//! Movement domain: player bootstrap.

use bevy::prelude::*;

use crate::movement::{CollisionBody, MotionState, Player};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub(crate) fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Player,
        MotionState::default(),
        CollisionBody::new(PLAYER_SIZE),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
    ));

    info!("Spawned player at (0, 100)");
}
