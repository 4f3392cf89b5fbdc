//! Simulation core
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - Variable timestep, clamped per tick
//! - Seeded RNG only
//! - Stable iteration order (registration order)
//! - Every cross-entity effect goes through the store

pub mod city;
pub mod collision;
pub mod npc;
pub mod player;
pub mod scan;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use city::{Building, generate_city, obstacles_for};
pub use collision::{Obstacle, is_blocked};
pub use npc::{Interaction, update_npc, update_npcs};
pub use player::{PlayerController, ScanOutcome};
pub use scan::{ScanCone, in_cone};
pub use session::{GameSession, sample_spawn_point};
pub use snapshot::{FrameSnapshot, HudView, Marker, NpcView, PlayerView};
pub use state::{
    Alignment, NpcId, NpcRecord, PlayerState, RevealState, SessionState, SimEvent, SimStore,
    Wander,
};
pub use tick::{TickInput, tick};
