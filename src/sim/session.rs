//! Game session controller
//!
//! Owns the city, the store and the player controller, and handles the
//! reset-then-spawn sequence for new sessions and restarts.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::city::{Building, generate_city, obstacles_for};
use super::collision::{Obstacle, is_blocked};
use super::player::PlayerController;
use super::state::{Alignment, NpcId, NpcRecord, SimEvent, SimStore};
use crate::consts::SPAWN_ATTEMPTS;
use crate::error::SimResult;
use crate::settings::Tuning;

/// One running game: city, entities and the seeded RNG driving both
#[derive(Debug, Clone)]
pub struct GameSession {
    seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) tuning: Tuning,
    pub(crate) buildings: Vec<Building>,
    pub(crate) obstacles: Vec<Obstacle>,
    pub(crate) store: SimStore,
    pub(crate) player: PlayerController,
    /// Simulation tick counter (since the last restart)
    pub(crate) time_ticks: u64,
}

impl GameSession {
    /// New session on a freshly generated city
    pub fn new(seed: u64) -> Self {
        Self::generated(seed, Tuning::default())
    }

    /// New session with custom balance; rejects tuning the sim cannot run with
    pub fn with_tuning(seed: u64, tuning: Tuning) -> SimResult<Self> {
        tuning.validate()?;
        Ok(Self::generated(seed, tuning))
    }

    /// New session on a caller-provided city
    pub fn with_buildings(seed: u64, tuning: Tuning, buildings: Vec<Building>) -> SimResult<Self> {
        tuning.validate()?;
        Ok(Self::build(seed, Pcg32::seed_from_u64(seed), tuning, buildings))
    }

    fn generated(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let buildings = generate_city(&mut rng);
        Self::build(seed, rng, tuning, buildings)
    }

    fn build(seed: u64, rng: Pcg32, tuning: Tuning, buildings: Vec<Building>) -> Self {
        let obstacles = obstacles_for(&buildings);
        let mut session = Self {
            seed,
            rng,
            tuning,
            buildings,
            obstacles,
            store: SimStore::new(),
            player: PlayerController::new(),
            time_ticks: 0,
        };
        log::info!("Starting session with seed {}", seed);
        session.restart();
        session
    }

    /// Clear everything and spawn a fresh wave; the city stays
    pub fn restart(&mut self) {
        self.store.reset_session();
        self.player.reset();
        self.store.set_player_position(Vec3::ZERO);
        self.store.set_player_facing(self.player.look_direction());
        self.time_ticks = 0;
        self.spawn_wave();
    }

    /// Register a wave of unknown NPCs; returns how many were registered
    pub fn spawn_wave(&mut self) -> usize {
        let mut spawned = 0;
        for _ in 0..self.tuning.wave_size {
            let id = NpcId::random(&mut self.rng);
            let alignment = if self.rng.random_bool(0.5) {
                Alignment::Good
            } else {
                Alignment::Hostile
            };
            let position = self.spawn_position();

            match self.store.register_npc(NpcRecord::new(id, alignment, position)) {
                Ok(()) => spawned += 1,
                Err(e) => log::error!("Skipping spawn: {e}"),
            }
        }
        log::info!("Spawned wave of {} NPCs", spawned);
        spawned
    }

    /// Random ground spot outside the plaza, preferring streets over rooftops
    fn spawn_position(&mut self) -> Vec3 {
        let t = &self.tuning;
        let mut first = None;
        for _ in 0..SPAWN_ATTEMPTS {
            let p = sample_spawn_point(&mut self.rng, t.spawn_extent, t.safe_zone_half);
            if !is_blocked(p, t.body_radius, &self.obstacles, t.world_bound) {
                return p;
            }
            first.get_or_insert(p);
        }
        log::warn!("No free spawn spot after {} attempts", SPAWN_ATTEMPTS);
        first.unwrap_or(Vec3::new(t.spawn_extent, 0.0, t.spawn_extent))
    }

    // === Accessors ===

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn store(&self) -> &SimStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SimStore {
        &mut self.store
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerController {
        &mut self.player
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn currency(&self) -> u32 {
        self.store.currency()
    }

    pub fn is_over(&self) -> bool {
        self.store.is_over()
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.store.drain_events()
    }
}

/// Uniform point in the spawn square, re-rolled while inside the plaza
///
/// A plaza that covers the whole square leaves nowhere to sample; the
/// corner is returned instead.
pub fn sample_spawn_point<R: Rng + ?Sized>(rng: &mut R, extent: f32, safe_half: f32) -> Vec3 {
    if !(extent > 0.0 && safe_half < extent) {
        log::warn!("Spawn square {} has no room outside plaza {}", extent, safe_half);
        return Vec3::new(extent, 0.0, extent);
    }
    loop {
        let x = rng.random_range(-extent..extent);
        let z = rng.random_range(-extent..extent);
        if x.abs() >= safe_half || z.abs() >= safe_half {
            return Vec3::new(x, 0.0, z);
        }
    }
}
