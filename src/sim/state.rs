//! Simulation state store
//!
//! The single source of truth for the session: currency, the game-over flag,
//! the live NPC registry and the player's position. Everything else reads and
//! writes through the mutation methods here; nothing keeps a private copy
//! across ticks.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SimError, SimResult};

/// Opaque NPC identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NpcId(Uuid);

impl NpcId {
    /// Fresh random id drawn from the simulation RNG (keeps runs reproducible)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes = rng.random::<u128>().to_le_bytes();
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for NpcId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for NpcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Hidden disposition, fixed at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Honest citizen, worth one coin
    Good,
    /// Hypocrite: chases the player once exposed
    Hostile,
}

/// What the player knows about an NPC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    #[default]
    Unknown,
    RevealedGood,
    RevealedHostile,
}

impl RevealState {
    /// The state a scan reveals for a given alignment
    pub fn revealing(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Good => RevealState::RevealedGood,
            Alignment::Hostile => RevealState::RevealedHostile,
        }
    }

    pub fn is_revealed(&self) -> bool {
        *self != RevealState::Unknown
    }
}

/// Idle wander bookkeeping (heading is mutated in place on re-roll)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wander {
    /// Unit heading on the ground plane
    pub heading: Vec2,
    /// Seconds until the heading is re-rolled
    pub retarget_in: f32,
}

impl Default for Wander {
    fn default() -> Self {
        Self {
            heading: Vec2::X,
            retarget_in: 0.0, // First update picks a random heading
        }
    }
}

/// A registered NPC
#[derive(Debug, Clone)]
pub struct NpcRecord {
    pub id: NpcId,
    alignment: Alignment,
    reveal: RevealState,
    /// Live world position
    pub position: Vec3,
    /// Yaw turning the body's +Z toward where it last walked
    pub facing: f32,
    pub wander: Wander,
}

impl NpcRecord {
    pub fn new(id: NpcId, alignment: Alignment, position: Vec3) -> Self {
        Self {
            id,
            alignment,
            reveal: RevealState::Unknown,
            position,
            facing: 0.0,
            wander: Wander::default(),
        }
    }

    /// Fixed at spawn; there is no setter
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal
    }
}

/// The player's live pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    /// Unit look direction
    pub facing: Vec3,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            facing: Vec3::NEG_Z,
        }
    }
}

/// Session-wide flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub currency: u32,
    pub is_over: bool,
}

/// Notifications for presentation layers, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimEvent {
    Spawned { id: NpcId },
    Revealed { id: NpcId, state: RevealState },
    Collected { id: NpcId },
    TollPaid { id: NpcId },
    Caught { id: NpcId },
    SessionReset,
}

/// Authoritative simulation store
#[derive(Debug, Clone, Default)]
pub struct SimStore {
    session: SessionState,
    /// Registry in registration order (stable iteration)
    npcs: Vec<NpcRecord>,
    player: PlayerState,
    events: Vec<SimEvent>,
}

impl SimStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === NPC registry ===

    /// Insert a new NPC; its id must not already be registered
    pub fn register_npc(&mut self, record: NpcRecord) -> SimResult<()> {
        if self.npc(record.id).is_some() {
            return Err(SimError::DuplicateEntity(record.id));
        }
        self.events.push(SimEvent::Spawned { id: record.id });
        self.npcs.push(record);
        Ok(())
    }

    /// Reveal an NPC. Absent ids are ignored (removed earlier this tick).
    ///
    /// Only `Unknown -> Revealed*` is accepted; alignment is never touched.
    /// Returns whether the record changed.
    pub fn update_npc_reveal_state(&mut self, id: NpcId, new_state: RevealState) -> bool {
        let Some(npc) = self.npcs.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        if npc.reveal.is_revealed() || !new_state.is_revealed() {
            log::warn!(
                "Ignoring reveal transition {:?} -> {:?} for {}",
                npc.reveal,
                new_state,
                id
            );
            return false;
        }
        npc.reveal = new_state;
        self.events.push(SimEvent::Revealed {
            id,
            state: new_state,
        });
        true
    }

    /// Remove an NPC; removing an absent id is a silent no-op
    pub fn remove_npc(&mut self, id: NpcId) -> Option<NpcRecord> {
        let idx = self.npcs.iter().position(|n| n.id == id)?;
        Some(self.npcs.remove(idx))
    }

    pub fn npc(&self, id: NpcId) -> Option<&NpcRecord> {
        self.npcs.iter().find(|n| n.id == id)
    }

    /// Mutable access for movement; reveal state and alignment stay guarded
    pub fn npc_mut(&mut self, id: NpcId) -> Option<&mut NpcRecord> {
        self.npcs.iter_mut().find(|n| n.id == id)
    }

    pub fn npcs(&self) -> impl Iterator<Item = &NpcRecord> {
        self.npcs.iter()
    }

    /// Ids in stable processing order
    pub fn npc_ids(&self) -> Vec<NpcId> {
        self.npcs.iter().map(|n| n.id).collect()
    }

    pub fn npc_count(&self) -> usize {
        self.npcs.len()
    }

    // === Currency and flags ===

    pub fn currency(&self) -> u32 {
        self.session.currency
    }

    pub fn add_currency(&mut self) {
        self.session.currency += 1;
    }

    /// Spend one unit, flooring at zero. Callers decide pay-vs-lose themselves.
    pub fn spend_currency(&mut self) {
        self.session.currency = self.session.currency.saturating_sub(1);
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over
    }

    pub fn set_game_over(&mut self, over: bool) {
        if over && !self.session.is_over {
            log::info!("Game over with {} NPCs left", self.npcs.len());
        }
        self.session.is_over = over;
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    /// Clear NPCs and currency, lift game-over. Spawning is the caller's job.
    pub fn reset_session(&mut self) {
        self.session = SessionState::default();
        self.npcs.clear();
        self.events.push(SimEvent::SessionReset);
    }

    // === Player handle ===

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn set_player_position(&mut self, position: Vec3) {
        self.player.position = position;
    }

    pub fn set_player_facing(&mut self, facing: Vec3) {
        self.player.facing = facing.normalize_or(Vec3::NEG_Z);
    }

    // === Events ===

    pub fn push_event(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}
