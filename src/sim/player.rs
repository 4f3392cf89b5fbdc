//! Player controller
//!
//! Owns look angles, held movement keys and the scanner cooldown. The
//! player's position itself lives in the store so NPCs can chase it.

use glam::{Vec2, Vec3};

use super::collision::{Obstacle, is_blocked};
use super::scan::ScanCone;
use super::state::{RevealState, SimStore};
use super::tick::TickInput;
use crate::settings::Tuning;
use crate::{normalize_angle, yaw_forward};

/// Result of pressing the scan key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Scan fired and revealed this many NPCs
    Fired { revealed: usize },
    /// Ignored: previous scan still in its cooldown window
    CoolingDown,
    /// Ignored: game over
    Frozen,
}

/// First-person walker with a truth scanner
#[derive(Debug, Clone, Default)]
pub struct PlayerController {
    /// Horizontal look angle (radians, 0 looks down -Z)
    pub yaw: f32,
    /// Vertical look angle (radians, clamped near the horizon)
    pub pitch: f32,
    /// Seconds left before another scan may fire
    scan_cooldown: f32,
}

impl PlayerController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply relative pointer movement (pixels)
    pub fn look(&mut self, delta: Vec2, tuning: &Tuning) {
        if !delta.is_finite() {
            return;
        }
        self.yaw = normalize_angle(self.yaw - delta.x * tuning.look_sensitivity);
        self.pitch = (self.pitch - delta.y * tuning.look_sensitivity)
            .clamp(-tuning.pitch_limit, tuning.pitch_limit);
    }

    /// Full look direction including pitch
    pub fn look_direction(&self) -> Vec3 {
        let flat = yaw_forward(self.yaw);
        let (sin_p, cos_p) = self.pitch.sin_cos();
        Vec3::new(flat.x * cos_p, sin_p, flat.y * cos_p)
    }

    /// Look direction flattened onto the ground plane
    pub fn flat_forward(&self) -> Vec2 {
        let dir = self.look_direction();
        Vec2::new(dir.x, dir.z).normalize_or(yaw_forward(self.yaw))
    }

    /// Whether the scan cone is still showing
    pub fn scan_active(&self) -> bool {
        self.scan_cooldown > 0.0
    }

    /// World-space displacement for this tick from the held keys
    ///
    /// Local space: forward is -Z, right is +X. Only yaw rotates the move.
    pub fn movement_step(&self, input: &TickInput, distance: f32) -> Vec3 {
        let front = Vec3::new(0.0, 0.0, (input.back as i8 - input.forward as i8) as f32);
        let side = Vec3::new((input.left as i8 - input.right as i8) as f32, 0.0, 0.0);
        let local = (front - side).normalize_or_zero() * distance;

        let (sin_y, cos_y) = self.yaw.sin_cos();
        Vec3::new(
            local.x * cos_y + local.z * sin_y,
            0.0,
            -local.x * sin_y + local.z * cos_y,
        )
    }

    /// Per-tick update: look, scanner, then walking
    pub fn update(
        &mut self,
        store: &mut SimStore,
        input: &TickInput,
        obstacles: &[Obstacle],
        tuning: &Tuning,
        dt: f32,
    ) {
        if store.is_over() {
            return;
        }

        if input.look != Vec2::ZERO {
            self.look(input.look, tuning);
        }

        self.scan_cooldown = (self.scan_cooldown - dt).max(0.0);
        if input.scan {
            self.trigger_scan(store, tuning);
        }

        let step = self.movement_step(input, tuning.player_speed * dt);
        if step != Vec3::ZERO {
            let candidate = store.player().position + step;
            // No sliding: a blocked move simply doesn't happen this tick
            if !is_blocked(candidate, tuning.body_radius, obstacles, tuning.world_bound) {
                store.set_player_position(candidate);
            }
        }

        store.set_player_facing(self.look_direction());
    }

    /// Fire the scanner: reveal every unknown NPC inside the cone
    pub fn trigger_scan(&mut self, store: &mut SimStore, tuning: &Tuning) -> ScanOutcome {
        if store.is_over() {
            return ScanOutcome::Frozen;
        }
        if self.scan_active() {
            return ScanOutcome::CoolingDown;
        }
        self.scan_cooldown = tuning.scan_cooldown;

        let cone = ScanCone::new(
            store.player().position,
            self.flat_forward(),
            tuning.scan_distance,
            tuning.scan_half_angle(),
        );

        let hits: Vec<_> = store
            .npcs()
            .filter(|npc| npc.reveal_state() == RevealState::Unknown)
            .filter(|npc| cone.contains(npc.position))
            .map(|npc| (npc.id, RevealState::revealing(npc.alignment())))
            .collect();

        let mut revealed = 0;
        for (id, state) in hits {
            if store.update_npc_reveal_state(id, state) {
                revealed += 1;
            }
        }

        log::debug!("Scan revealed {} NPCs", revealed);
        ScanOutcome::Fired { revealed }
    }

    /// Back to a level look at spawn with the scanner ready
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Alignment, NpcId, NpcRecord};
    use std::f32::consts::FRAC_PI_2;
    use uuid::Uuid;

    const DT: f32 = 0.1;

    fn id(n: u128) -> NpcId {
        NpcId::from(Uuid::from_u128(n))
    }

    fn forward() -> TickInput {
        TickInput {
            forward: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_walks_forward_down_neg_z() {
        let tuning = Tuning::default();
        let mut store = SimStore::new();
        let mut player = PlayerController::new();

        player.update(&mut store, &forward(), &[], &tuning, DT);

        let pos = store.player().position;
        assert!((pos - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-5);
    }

    #[test]
    fn test_yaw_rotates_movement() {
        let tuning = Tuning::default();
        let mut store = SimStore::new();
        let mut player = PlayerController::new();
        player.yaw = FRAC_PI_2; // Looking toward -X

        player.update(&mut store, &forward(), &[], &tuning, DT);
        let pos = store.player().position;
        assert!((pos - Vec3::new(-0.5, 0.0, 0.0)).length() < 1e-5);

        // Strafing right from there heads toward -Z
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        player.update(&mut store, &right, &[], &tuning, DT);
        let pos = store.player().position;
        assert!((pos - Vec3::new(-0.5, 0.0, -0.5)).length() < 1e-5);
    }

    #[test]
    fn test_pitch_does_not_change_movement() {
        let tuning = Tuning::default();
        let mut store = SimStore::new();
        let mut player = PlayerController::new();
        player.pitch = tuning.pitch_limit;

        player.update(&mut store, &forward(), &[], &tuning, DT);
        let pos = store.player().position;
        assert_eq!(pos.y, 0.0);
        assert!((pos.z + 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let player = PlayerController::new();
        let input = TickInput {
            forward: true,
            left: true,
            ..Default::default()
        };
        let step = player.movement_step(&input, 1.0);
        assert!((step.length() - 1.0).abs() < 1e-5);
        assert!(step.x < 0.0 && step.z < 0.0);
    }

    #[test]
    fn test_blocked_move_stays_put() {
        let tuning = Tuning::default();
        let mut store = SimStore::new();
        let mut player = PlayerController::new();
        let wall = [Obstacle::new(Vec2::new(0.0, -1.5), Vec2::new(3.0, 1.0))];

        player.update(&mut store, &forward(), &wall, &tuning, DT);
        assert_eq!(store.player().position, Vec3::ZERO);
    }

    #[test]
    fn test_look_clamps_pitch() {
        let tuning = Tuning::default();
        let mut player = PlayerController::new();
        player.look(Vec2::new(0.0, -10_000.0), &tuning);
        assert_eq!(player.pitch, tuning.pitch_limit);
        player.look(Vec2::new(0.0, 10_000.0), &tuning);
        assert_eq!(player.pitch, -tuning.pitch_limit);
    }

    #[test]
    fn test_scan_reveals_unknown_in_cone() {
        let tuning = Tuning::default();
        let mut store = SimStore::new();
        let mut player = PlayerController::new();
        store
            .register_npc(NpcRecord::new(id(1), Alignment::Good, Vec3::new(0.0, 0.0, -10.0)))
            .unwrap();
        store
            .register_npc(NpcRecord::new(id(2), Alignment::Hostile, Vec3::new(1.0, 0.0, -5.0)))
            .unwrap();
        // Behind the player
        store
            .register_npc(NpcRecord::new(id(3), Alignment::Hostile, Vec3::new(0.0, 0.0, 5.0)))
            .unwrap();
        // Too far
        store
            .register_npc(NpcRecord::new(id(4), Alignment::Good, Vec3::new(0.0, 0.0, -20.0)))
            .unwrap();

        let outcome = player.trigger_scan(&mut store, &tuning);
        assert_eq!(outcome, ScanOutcome::Fired { revealed: 2 });
        assert_eq!(store.npc(id(1)).unwrap().reveal_state(), RevealState::RevealedGood);
        assert_eq!(store.npc(id(2)).unwrap().reveal_state(), RevealState::RevealedHostile);
        assert_eq!(store.npc(id(3)).unwrap().reveal_state(), RevealState::Unknown);
        assert_eq!(store.npc(id(4)).unwrap().reveal_state(), RevealState::Unknown);
        assert!(player.scan_active());
    }

    #[test]
    fn test_scan_cooldown() {
        let tuning = Tuning::default();
        let mut store = SimStore::new();
        let mut player = PlayerController::new();
        let scan = TickInput {
            scan: true,
            ..Default::default()
        };

        assert_eq!(player.trigger_scan(&mut store, &tuning), ScanOutcome::Fired { revealed: 0 });
        assert_eq!(player.trigger_scan(&mut store, &tuning), ScanOutcome::CoolingDown);

        // 0.2s later: still cooling down
        player.update(&mut store, &TickInput::default(), &[], &tuning, 0.2);
        assert_eq!(player.trigger_scan(&mut store, &tuning), ScanOutcome::CoolingDown);

        // Another 0.15s: window over, a scan press fires again
        player.update(&mut store, &scan, &[], &tuning, 0.15);
        assert!(player.scan_active());
    }

    #[test]
    fn test_scan_ignored_when_over() {
        let tuning = Tuning::default();
        let mut store = SimStore::new();
        let mut player = PlayerController::new();
        store
            .register_npc(NpcRecord::new(id(1), Alignment::Good, Vec3::new(0.0, 0.0, -3.0)))
            .unwrap();
        store.set_game_over(true);

        assert_eq!(player.trigger_scan(&mut store, &tuning), ScanOutcome::Frozen);
        assert_eq!(store.npc(id(1)).unwrap().reveal_state(), RevealState::Unknown);
        assert!(!player.scan_active());
    }

    #[test]
    fn test_revealed_npcs_immune_to_rescan() {
        let tuning = Tuning::default();
        let mut store = SimStore::new();
        let mut player = PlayerController::new();
        store
            .register_npc(NpcRecord::new(id(1), Alignment::Hostile, Vec3::new(0.0, 0.0, -3.0)))
            .unwrap();

        player.trigger_scan(&mut store, &tuning);
        player.reset();
        let outcome = player.trigger_scan(&mut store, &tuning);
        assert_eq!(outcome, ScanOutcome::Fired { revealed: 0 });
        assert_eq!(store.npc(id(1)).unwrap().reveal_state(), RevealState::RevealedHostile);
    }
}
