//! NPC behavior
//!
//! Behavior is a pure function of the record's reveal state:
//! - `Unknown`: wander on a random heading, turn around at walls
//! - `RevealedGood`: stand still and wait to be collected
//! - `RevealedHostile`: walk straight at the player
//!
//! Revealed NPCs then check for contact with the player. All effects go
//! through the store, one NPC at a time, so two hypocrites can never spend
//! the same coin in one tick.

use glam::{Vec2, Vec3};
use rand::Rng;

use super::collision::{Obstacle, is_blocked};
use super::state::{NpcId, NpcRecord, RevealState, SimEvent, SimStore};
use crate::settings::Tuning;
use crate::{planar, yaw_toward};

/// Outcome of an NPC's contact check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// No contact (or not eligible)
    None,
    /// Honest citizen picked up: +1 coin, NPC removed
    Collected,
    /// Hypocrite bribed: -1 coin, NPC removed
    TollPaid,
    /// Hypocrite reached a broke player: game over, NPC stays
    Caught,
}

/// Advance every registered NPC by one tick, in registry order
pub fn update_npcs<R: Rng + ?Sized>(
    store: &mut SimStore,
    obstacles: &[Obstacle],
    tuning: &Tuning,
    rng: &mut R,
    dt: f32,
) {
    for id in store.npc_ids() {
        // A hypocrite earlier in the order may have ended the game
        if store.is_over() {
            break;
        }
        update_npc(store, id, obstacles, tuning, rng, dt);
    }
}

/// Move one NPC, then resolve its contact with the player
pub fn update_npc<R: Rng + ?Sized>(
    store: &mut SimStore,
    id: NpcId,
    obstacles: &[Obstacle],
    tuning: &Tuning,
    rng: &mut R,
    dt: f32,
) -> Interaction {
    if store.is_over() {
        return Interaction::None;
    }

    let player_pos = store.player().position;
    let Some(npc) = store.npc_mut(id) else {
        return Interaction::None;
    };

    match npc.reveal_state() {
        RevealState::Unknown => wander(npc, obstacles, tuning, rng, dt),
        RevealState::RevealedGood => {}
        RevealState::RevealedHostile => chase(npc, player_pos, obstacles, tuning, dt),
    }

    let reveal = npc.reveal_state();
    let dist = planar(npc.position).distance(planar(player_pos));
    if !reveal.is_revealed() || dist >= tuning.interaction_distance {
        return Interaction::None;
    }

    match reveal {
        RevealState::RevealedGood => {
            store.add_currency();
            store.remove_npc(id);
            store.push_event(SimEvent::Collected { id });
            log::debug!("Collected citizen {} (coins: {})", id, store.currency());
            Interaction::Collected
        }
        RevealState::RevealedHostile if store.currency() > 0 => {
            store.spend_currency();
            store.remove_npc(id);
            store.push_event(SimEvent::TollPaid { id });
            log::debug!("Paid toll to {} (coins: {})", id, store.currency());
            Interaction::TollPaid
        }
        RevealState::RevealedHostile => {
            store.set_game_over(true);
            store.push_event(SimEvent::Caught { id });
            Interaction::Caught
        }
        RevealState::Unknown => Interaction::None,
    }
}

/// Random walk; a blocked step reverses the heading without moving
fn wander<R: Rng + ?Sized>(
    npc: &mut NpcRecord,
    obstacles: &[Obstacle],
    tuning: &Tuning,
    rng: &mut R,
    dt: f32,
) {
    let w = &mut npc.wander;
    w.retarget_in -= dt;
    if w.retarget_in <= 0.0 {
        w.heading = Vec2::from_angle(rng.random_range(0.0..std::f32::consts::TAU));
        w.retarget_in = rng.random_range(tuning.wander_min..=tuning.wander_max);
    }

    let step = w.heading * tuning.npc_idle_speed * dt;
    let candidate = npc.position + Vec3::new(step.x, 0.0, step.y);

    if is_blocked(candidate, tuning.body_radius, obstacles, tuning.world_bound) {
        // Turn around; the re-roll timer keeps running
        npc.wander.heading = -npc.wander.heading;
    } else {
        npc.position = candidate;
        if step != Vec2::ZERO {
            npc.facing = yaw_toward(step);
        }
    }
}

/// Straight-line pursuit on the ground plane
fn chase(npc: &mut NpcRecord, target: Vec3, obstacles: &[Obstacle], tuning: &Tuning, dt: f32) {
    let dir = (planar(target) - planar(npc.position)).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }

    let step = dir * tuning.npc_chase_speed * dt;
    let candidate = npc.position + Vec3::new(step.x, 0.0, step.y);

    if !is_blocked(candidate, tuning.body_radius, obstacles, tuning.world_bound) {
        npc.position = candidate;
        npc.facing = yaw_toward(dir);
    }
}
