//! Movement domain: collision-aware displacement via skin-width raycasts.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::CollisionBody;

/// Which sides were blocked during the most recent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub struct CollisionReport {
    pub above: bool,
    pub below: bool,
    pub left: bool,
    pub right: bool,
}

/// Applies a requested displacement while respecting obstacles.
///
/// The report returned by `collisions` describes the last `move_by` call and
/// is what the motion state machine reads at the start of the next tick.
pub trait CollisionMover {
    fn collisions(&self) -> CollisionReport;
    fn move_by(&mut self, displacement: Vec2);
}

/// Answers "how far can a ray travel before hitting solid geometry".
pub trait RayCaster {
    fn cast(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<f32>;
}

/// Ray caster backed by avian2d's spatial query pipeline.
pub struct SpatialRayCaster<'a, 'w, 's> {
    query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialRayCaster<'a, 'w, 's> {
    pub fn new(query: &'a SpatialQuery<'w, 's>, filter: SpatialQueryFilter) -> Self {
        Self { query, filter }
    }
}

impl RayCaster for SpatialRayCaster<'_, '_, '_> {
    fn cast(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<f32> {
        self.query
            .cast_ray(origin, direction, max_distance, true, &self.filter)
            .map(|hit| hit.distance)
    }
}

/// Moves an axis-aligned box by casting evenly spaced rays from just inside
/// its edges, horizontal axis first.
pub struct RaycastMover<'a, C: RayCaster> {
    caster: &'a C,
    body: &'a mut CollisionBody,
    position: Vec2,
}

impl<'a, C: RayCaster> RaycastMover<'a, C> {
    pub fn new(caster: &'a C, body: &'a mut CollisionBody, position: Vec2) -> Self {
        Self {
            caster,
            body,
            position,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Ray origins spread along one edge, from `start` to `end`.
    fn ray_offsets(count: u32, start: f32, end: f32) -> impl Iterator<Item = f32> {
        (0..count).map(move |i| {
            if count == 1 {
                (start + end) * 0.5
            } else {
                start + (end - start) * i as f32 / (count - 1) as f32
            }
        })
    }

    fn clip_horizontal(&mut self, displacement: &mut Vec2) {
        let sign = displacement.x.signum();
        let direction = if sign > 0.0 { Dir2::X } else { Dir2::NEG_X };
        let skin = self.body.skin_width;
        let inner = self.body.half_extents - Vec2::splat(skin);
        let mut ray_length = displacement.x.abs() + skin;

        for offset_y in Self::ray_offsets(self.body.horizontal_rays, -inner.y, inner.y) {
            let origin = self.position + Vec2::new(sign * inner.x, offset_y);
            if let Some(distance) = self.caster.cast(origin, direction, ray_length) {
                displacement.x = (distance - skin) * sign;
                // Later rays only need to find something even closer.
                ray_length = distance;

                if sign < 0.0 {
                    self.body.collisions.left = true;
                } else {
                    self.body.collisions.right = true;
                }
            }
        }
    }

    fn clip_vertical(&mut self, displacement: &mut Vec2) {
        let sign = displacement.y.signum();
        let direction = if sign > 0.0 { Dir2::Y } else { Dir2::NEG_Y };
        let skin = self.body.skin_width;
        let inner = self.body.half_extents - Vec2::splat(skin);
        let mut ray_length = displacement.y.abs() + skin;

        // Cast from where the horizontal step already put us.
        let shifted_x = self.position.x + displacement.x;
        for offset_x in Self::ray_offsets(self.body.vertical_rays, -inner.x, inner.x) {
            let origin = Vec2::new(shifted_x + offset_x, self.position.y + sign * inner.y);
            if let Some(distance) = self.caster.cast(origin, direction, ray_length) {
                displacement.y = (distance - skin) * sign;
                ray_length = distance;

                if sign < 0.0 {
                    self.body.collisions.below = true;
                } else {
                    self.body.collisions.above = true;
                }
            }
        }
    }
}

impl<C: RayCaster> CollisionMover for RaycastMover<'_, C> {
    fn collisions(&self) -> CollisionReport {
        self.body.collisions
    }

    fn move_by(&mut self, displacement: Vec2) {
        self.body.collisions = CollisionReport::default();
        let mut clipped = displacement;

        if clipped.x != 0.0 {
            self.clip_horizontal(&mut clipped);
        }
        if clipped.y != 0.0 {
            self.clip_vertical(&mut clipped);
        }

        self.position += clipped;
    }
}
