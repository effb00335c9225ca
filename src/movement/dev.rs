//! Movement domain: debug-only practice room.
//!
//! A closed box with a ceiling to stand on under inverted gravity, a narrow
//! shaft for chaining wall jumps, and one ledge on each side of the gravity.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

pub(crate) const FLOOR_TOP: f32 = -200.0;
pub(crate) const CEILING_BOTTOM: f32 = 240.0;

/// Inner faces of the wall-jump shaft.
pub(crate) const SHAFT_LEFT_FACE: f32 = -245.0;
pub(crate) const SHAFT_RIGHT_FACE: f32 = -155.0;

const SHAFT_WALL_WIDTH: f32 = 30.0;
const SHAFT_HEIGHT: f32 = 300.0;
const SLAB: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Surface {
    Ground,
    Wall,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Block {
    pub surface: Surface,
    pub size: Vec2,
    pub center: Vec2,
}

const fn block(surface: Surface, w: f32, h: f32, x: f32, y: f32) -> Block {
    Block {
        surface,
        size: Vec2::new(w, h),
        center: Vec2::new(x, y),
    }
}

pub(crate) const ROOM: [Block; 8] = [
    // Floor and ceiling
    block(Surface::Ground, 980.0, SLAB, 0.0, FLOOR_TOP - SLAB / 2.0),
    block(Surface::Ground, 980.0, SLAB, 0.0, CEILING_BOTTOM + SLAB / 2.0),
    // Outer walls
    block(Surface::Wall, SLAB, 520.0, -470.0, 20.0),
    block(Surface::Wall, SLAB, 520.0, 470.0, 20.0),
    // Wall-jump shaft, open at the top
    block(
        Surface::Wall,
        SHAFT_WALL_WIDTH,
        SHAFT_HEIGHT,
        SHAFT_LEFT_FACE - SHAFT_WALL_WIDTH / 2.0,
        FLOOR_TOP + SHAFT_HEIGHT / 2.0,
    ),
    block(
        Surface::Wall,
        SHAFT_WALL_WIDTH,
        SHAFT_HEIGHT,
        SHAFT_RIGHT_FACE + SHAFT_WALL_WIDTH / 2.0,
        FLOOR_TOP + SHAFT_HEIGHT / 2.0,
    ),
    // Ledge within one jump of the floor, and its mirror under the ceiling
    block(Surface::Ground, 160.0, 20.0, 220.0, FLOOR_TOP + 80.0),
    block(Surface::Ground, 160.0, 20.0, 220.0, CEILING_BOTTOM - 80.0),
];

fn spawn_block(commands: &mut Commands, block: &Block) {
    let (color, layer) = match block.surface {
        Surface::Ground => (Color::srgb(0.4, 0.5, 0.4), GameLayer::Ground),
        Surface::Wall => (Color::srgb(0.3, 0.3, 0.4), GameLayer::Wall),
    };

    let mut entity = commands.spawn((
        Sprite {
            color,
            custom_size: Some(block.size),
            ..default()
        },
        Transform::from_translation(block.center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(block.size.x, block.size.y),
        // Only the mover's query filter needs to see the membership.
        CollisionLayers::new(layer, LayerMask::NONE),
    ));

    match block.surface {
        Surface::Ground => entity.insert(Ground),
        Surface::Wall => entity.insert(Wall),
    };
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    for block in &ROOM {
        spawn_block(&mut commands, block);
    }

    debug!("Spawned practice room with {} blocks", ROOM.len());
}
