//! Gameplay tuning
//!
//! Every knob defaults to the matching value in [`crate::consts`]; a JSON
//! document may override any subset of them.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement ===
    /// Player walk speed (units/s)
    pub player_speed: f32,
    /// Unrevealed NPC wander speed (units/s)
    pub npc_idle_speed: f32,
    /// Revealed hypocrite chase speed (units/s)
    pub npc_chase_speed: f32,
    /// Body radius used for obstacle inflation
    pub body_radius: f32,
    /// Hard world edge on both horizontal axes
    pub world_bound: f32,

    // === Scanner ===
    /// Maximum scan reach
    pub scan_distance: f32,
    /// Full cone angle in radians; half of it either side of the aim
    pub scan_angle: f32,
    /// Seconds before another scan may fire
    pub scan_cooldown: f32,

    // === Interaction ===
    /// Planar distance at which revealed NPCs collect or catch
    pub interaction_distance: f32,

    // === Spawning ===
    pub wave_size: usize,
    pub spawn_extent: f32,
    pub safe_zone_half: f32,

    // === Wandering ===
    pub wander_min: f32,
    pub wander_max: f32,

    // === Look ===
    pub look_sensitivity: f32,
    pub pitch_limit: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            npc_idle_speed: NPC_SPEED_IDLE,
            npc_chase_speed: NPC_SPEED_CHASE,
            body_radius: BODY_RADIUS,
            world_bound: WORLD_BOUND,

            scan_distance: SCAN_DISTANCE,
            scan_angle: SCAN_ANGLE,
            scan_cooldown: SCAN_COOLDOWN,

            interaction_distance: INTERACTION_DISTANCE,

            wave_size: WAVE_SIZE,
            spawn_extent: SPAWN_EXTENT,
            safe_zone_half: SAFE_ZONE_HALF,

            wander_min: WANDER_MIN,
            wander_max: WANDER_MAX,

            look_sensitivity: LOOK_SENSITIVITY,
            pitch_limit: PITCH_LIMIT,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> SimResult<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning override");
        Ok(tuning)
    }

    /// Half-angle handed to the cone test
    pub fn scan_half_angle(&self) -> f32 {
        self.scan_angle / 2.0
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> SimResult<()> {
        let all = [
            ("player_speed", self.player_speed),
            ("npc_idle_speed", self.npc_idle_speed),
            ("npc_chase_speed", self.npc_chase_speed),
            ("body_radius", self.body_radius),
            ("world_bound", self.world_bound),
            ("scan_distance", self.scan_distance),
            ("scan_angle", self.scan_angle),
            ("scan_cooldown", self.scan_cooldown),
            ("interaction_distance", self.interaction_distance),
            ("spawn_extent", self.spawn_extent),
            ("safe_zone_half", self.safe_zone_half),
            ("wander_min", self.wander_min),
            ("wander_max", self.wander_max),
            ("look_sensitivity", self.look_sensitivity),
            ("pitch_limit", self.pitch_limit),
        ];
        if let Some((name, value)) = all.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::InvalidTuning(format!("{name} must be finite, got {value}")));
        }

        let positive = [
            ("player_speed", self.player_speed),
            ("npc_idle_speed", self.npc_idle_speed),
            ("npc_chase_speed", self.npc_chase_speed),
            ("world_bound", self.world_bound),
            ("scan_distance", self.scan_distance),
            ("scan_angle", self.scan_angle),
            ("interaction_distance", self.interaction_distance),
            ("spawn_extent", self.spawn_extent),
            ("wander_min", self.wander_min),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(SimError::InvalidTuning(format!("{name} must be positive, got {value}")));
            }
        }

        if self.body_radius < 0.0 || self.scan_cooldown < 0.0 || self.safe_zone_half < 0.0 {
            return Err(SimError::InvalidTuning(
                "body_radius, scan_cooldown and safe_zone_half must not be negative".into(),
            ));
        }
        if self.npc_chase_speed <= self.npc_idle_speed {
            return Err(SimError::InvalidTuning(format!(
                "chase speed {} must exceed idle speed {}",
                self.npc_chase_speed, self.npc_idle_speed
            )));
        }
        if self.wander_max < self.wander_min {
            return Err(SimError::InvalidTuning(format!(
                "wander interval [{}, {}] is empty",
                self.wander_min, self.wander_max
            )));
        }
        if self.safe_zone_half >= self.spawn_extent {
            return Err(SimError::InvalidTuning(format!(
                "safe zone {} leaves no room in spawn area {}",
                self.safe_zone_half, self.spawn_extent
            )));
        }
        Ok(())
    }
}
