//! Hypocrite Scanner - a first-person city walk with a truth scanner
//!
//! Core modules:
//! - `sim`: Simulation core (store, collision, scan cone, NPC behavior, player)
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Data-driven game tuning
//! - `error`: Error types for the few fallible operations

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{SimError, SimResult};
pub use settings::Tuning;

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// City dimensions (square, centred on the origin)
    pub const CITY_SIZE: f32 = 100.0;
    pub const STREET_WIDTH: f32 = 4.0;
    pub const BUILDING_SIZE: f32 = 6.0;
    pub const BUILDING_MIN_HEIGHT: f32 = 5.0;
    pub const BUILDING_MAX_HEIGHT: f32 = 15.0;
    /// Hard world edge for |x| and |z|
    pub const WORLD_BOUND: f32 = 50.0;

    /// Movement speeds (units/s)
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const NPC_SPEED_IDLE: f32 = 2.0;
    pub const NPC_SPEED_CHASE: f32 = 4.5;
    /// Shared body radius for player and NPCs
    pub const BODY_RADIUS: f32 = 0.5;

    /// Scanner reach and full cone angle (half of it on each side of the aim)
    pub const SCAN_DISTANCE: f32 = 15.0;
    pub const SCAN_ANGLE: f32 = PI / 4.0;
    /// Scan visual/cooldown window in seconds
    pub const SCAN_COOLDOWN: f32 = 0.3;

    /// Planar distance at which revealed NPCs interact with the player
    pub const INTERACTION_DISTANCE: f32 = 1.2;

    /// NPC wave
    pub const WAVE_SIZE: usize = 20;
    /// Spawn positions are sampled in [-SPAWN_EXTENT, SPAWN_EXTENT) on both axes
    pub const SPAWN_EXTENT: f32 = 40.0;
    /// Half-size of the central square kept free of spawns
    pub const SAFE_ZONE_HALF: f32 = 5.0;
    /// Attempts at finding a spawn spot off the buildings before giving up
    pub const SPAWN_ATTEMPTS: u32 = 32;

    /// Idle wander heading is re-rolled every WANDER_MIN..=WANDER_MAX seconds
    pub const WANDER_MIN: f32 = 1.0;
    pub const WANDER_MAX: f32 = 3.0;

    /// Look control
    pub const LOOK_SENSITIVITY: f32 = 0.002; // radians per pixel
    pub const PITCH_LIMIT: f32 = 0.1; // radians either side of the horizon
    pub const EYE_HEIGHT: f32 = 1.6;

    /// Largest elapsed time a single tick will integrate
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Drop the height component: (x, y, z) -> (x, z)
#[inline]
pub fn planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Horizontal forward direction for a yaw angle.
///
/// Yaw 0 looks down -Z; positive yaw turns toward -X (counter-clockwise seen
/// from above), matching a right-handed Y-up camera.
#[inline]
pub fn yaw_forward(yaw: f32) -> Vec2 {
    Vec2::new(-yaw.sin(), -yaw.cos())
}

/// Yaw that turns a body's +Z axis toward `dir` (planar)
#[inline]
pub fn yaw_toward(dir: Vec2) -> f32 {
    dir.x.atan2(dir.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_normalize_angle() {
        use std::f32::consts::PI;
        assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-5);
        // Either side of the seam is acceptable
        assert!((normalize_angle(3.0 * PI).abs() - PI).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_planar_drops_height() {
        assert_eq!(planar(Vec3::new(1.0, 7.0, -2.0)), Vec2::new(1.0, -2.0));
    }

    #[test]
    fn test_yaw_forward() {
        let f = yaw_forward(0.0);
        assert!((f - Vec2::new(0.0, -1.0)).length() < 1e-6);

        let left = yaw_forward(FRAC_PI_2);
        assert!((left - Vec2::new(-1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_yaw_toward() {
        assert!(yaw_toward(Vec2::new(0.0, 1.0)).abs() < 1e-6);
        assert!((yaw_toward(Vec2::new(1.0, 0.0)) - FRAC_PI_2).abs() < 1e-6);
    }
}
