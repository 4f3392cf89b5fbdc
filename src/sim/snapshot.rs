//! Read-only view of a session for the scene graph and HUD
//!
//! Alignment never appears here: an unrevealed NPC only ever shows up as
//! [`Marker::Unknown`].

use glam::Vec3;
use serde::Serialize;

use super::session::GameSession;
use super::state::{NpcId, NpcRecord, RevealState, SimEvent};
use crate::consts::EYE_HEIGHT;

/// Colour/marker category the scene draws for an NPC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Unknown,
    Citizen,
    Hypocrite,
}

impl Marker {
    pub fn from_reveal(state: RevealState) -> Self {
        match state {
            RevealState::Unknown => Marker::Unknown,
            RevealState::RevealedGood => Marker::Citizen,
            RevealState::RevealedHostile => Marker::Hypocrite,
        }
    }

    /// Body colour
    pub fn color(&self) -> &'static str {
        match self {
            Marker::Unknown => "#cccccc",
            Marker::Citizen => "#00ff00",
            Marker::Hypocrite => "#ff0000",
        }
    }

    /// Floating indicator above revealed NPCs
    pub fn has_indicator(&self) -> bool {
        *self != Marker::Unknown
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NpcView {
    pub id: NpcId,
    pub position: Vec3,
    pub facing: f32,
    pub marker: Marker,
    pub color: &'static str,
}

impl From<&NpcRecord> for NpcView {
    fn from(npc: &NpcRecord) -> Self {
        let marker = Marker::from_reveal(npc.reveal_state());
        Self {
            id: npc.id,
            position: npc.position,
            facing: npc.facing,
            marker,
            color: marker.color(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub position: Vec3,
    /// Camera position (eye height above the feet)
    pub eye: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub scan_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudView {
    pub currency: u32,
    pub is_over: bool,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub hud: HudView,
    pub player: PlayerView,
    pub npcs: Vec<NpcView>,
    pub events: Vec<SimEvent>,
}

impl FrameSnapshot {
    /// Capture the current frame, handing over the drained event feed
    pub fn capture(session: &GameSession, events: Vec<SimEvent>) -> Self {
        let store = session.store();
        let controller = session.player();
        let position = store.player().position;

        Self {
            hud: HudView {
                currency: store.currency(),
                is_over: store.is_over(),
            },
            player: PlayerView {
                position,
                eye: position + Vec3::Y * EYE_HEIGHT,
                yaw: controller.yaw,
                pitch: controller.pitch,
                scan_active: controller.scan_active(),
            },
            npcs: store.npcs().map(NpcView::from).collect(),
            events,
        }
    }
}
