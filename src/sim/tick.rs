//! Per-frame simulation tick
//!
//! One call advances the player and then every NPC by the frame's elapsed
//! time, synchronously and in a fixed order.

use glam::Vec2;

use super::npc::update_npcs;
use super::session::GameSession;
use crate::consts::MAX_FRAME_DT;

/// Input for a single tick
///
/// Movement flags are held state; `scan`, `any_key` and `look` are one-shots
/// the caller clears after each tick (see [`TickInput::clear_one_shots`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    /// Scan key went down since the last tick
    pub scan: bool,
    /// Any key went down since the last tick (restart after game over)
    pub any_key: bool,
    /// Accumulated pointer movement in pixels
    pub look: Vec2,
}

impl TickInput {
    pub fn clear_one_shots(&mut self) {
        self.scan = false;
        self.any_key = false;
        self.look = Vec2::ZERO;
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    // Frozen until any key restarts
    if session.store.is_over() {
        if input.any_key {
            log::info!("Restarting after game over");
            session.restart();
        }
        return;
    }

    let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
    session.time_ticks += 1;

    let GameSession {
        store,
        player,
        obstacles,
        tuning,
        rng,
        ..
    } = session;

    player.update(store, input, obstacles, tuning, dt);
    update_npcs(store, obstacles, tuning, rng, dt);
}
