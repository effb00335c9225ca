//! Movement domain: state change notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::PlayerState;

/// Emitted once per tick in which an entity's discrete state changed.
#[derive(Debug)]
pub struct PlayerStateChanged {
    pub entity: Entity,
    pub current: PlayerState,
    pub previous: PlayerState,
}

impl Message for PlayerStateChanged {}
