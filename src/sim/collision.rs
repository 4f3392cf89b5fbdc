//! Obstacle collision for walking bodies
//!
//! Bodies are circles on the ground plane and buildings are axis-aligned
//! boxes. A circle overlaps a box when its centre lies inside the box grown
//! by the radius on both axes (the rounded corners are treated as square).
//! The test only accepts or rejects a move; nothing is pushed out.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::planar;

/// A static axis-aligned box on the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Box centre (x, z)
    pub center: Vec2,
    /// Half of the box size along (x, z)
    pub half_extent: Vec2,
}

impl Obstacle {
    pub fn new(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    /// Build from a 3D box; height is irrelevant to collision
    pub fn from_box(position: Vec3, size: Vec3) -> Self {
        Self::new(planar(position), planar(size) / 2.0)
    }

    /// Strict point-in-box test after growing the box by `radius`
    #[inline]
    pub fn contains_inflated(&self, point: Vec2, radius: f32) -> bool {
        let reach = self.half_extent + Vec2::splat(radius);
        let d = (point - self.center).abs();
        d.x < reach.x && d.y < reach.y
    }
}

/// Check whether a body of `body_radius` may stand at `candidate`
///
/// Returns true on the first obstacle hit, or when the position leaves the
/// square world `[-world_bound, world_bound]` on either axis.
pub fn is_blocked(candidate: Vec3, body_radius: f32, obstacles: &[Obstacle], world_bound: f32) -> bool {
    let point = planar(candidate);

    if point.x.abs() > world_bound || point.y.abs() > world_bound {
        return true;
    }

    obstacles
        .iter()
        .any(|obstacle| obstacle.contains_inflated(point, body_radius))
}
