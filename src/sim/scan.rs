//! Scanner cone geometry
//!
//! Planar test: height differences between scanner and target are ignored.

use glam::{Vec2, Vec3};

use crate::planar;

/// Targets closer than this to the origin count as inside the cone
const COINCIDENT_EPSILON: f32 = 1e-6;

/// Check whether `target` lies inside the detection cone
///
/// `forward` must already be flattened to the ground plane; it need not be
/// normalized. Accepts when the planar distance is below `max_distance` and
/// the angle between `forward` and the to-target direction is strictly less
/// than `half_angle`. A target on top of the origin is accepted.
pub fn in_cone(origin: Vec3, forward: Vec2, target: Vec3, max_distance: f32, half_angle: f32) -> bool {
    let to_target = planar(target) - planar(origin);
    let dist = to_target.length();

    if dist >= max_distance {
        return false;
    }
    if dist < COINCIDENT_EPSILON {
        return true;
    }
    if forward.length_squared() < COINCIDENT_EPSILON * COINCIDENT_EPSILON {
        return false;
    }

    // atan2(|cross|, dot) stays accurate for tiny angles, unlike acos(dot)
    let angle = to_target.perp_dot(forward).abs().atan2(to_target.dot(forward));
    angle < half_angle
}

/// A scanner's reach, bundled for repeated tests against many targets
#[derive(Debug, Clone, Copy)]
pub struct ScanCone {
    pub origin: Vec3,
    pub forward: Vec2,
    pub max_distance: f32,
    pub half_angle: f32,
}

impl ScanCone {
    pub fn new(origin: Vec3, forward: Vec2, max_distance: f32, half_angle: f32) -> Self {
        Self {
            origin,
            forward: forward.normalize_or_zero(),
            max_distance,
            half_angle,
        }
    }

    #[inline]
    pub fn contains(&self, target: Vec3) -> bool {
        in_cone(self.origin, self.forward, target, self.max_distance, self.half_angle)
    }
}
