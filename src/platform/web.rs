//! Browser facade
//!
//! The JS side owns the scene graph, pointer lock and DOM events; it forwards
//! raw input here, calls `frame` from requestAnimationFrame and draws from
//! the JSON snapshot.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use super::input;
use crate::settings::Tuning;
use crate::sim::{FrameSnapshot, GameSession, TickInput, tick};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("Logger already initialised");
    }
    log::info!("Hypocrite Scanner (wasm) loaded");
}

/// Game instance handed to JS
#[wasm_bindgen]
pub struct WebGame {
    session: GameSession,
    input: TickInput,
}

#[wasm_bindgen]
impl WebGame {
    /// New game; seeds from the clock when no seed is given
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>) -> WebGame {
        let seed = seed.unwrap_or_else(js_sys::Date::now) as u64;
        Self {
            session: GameSession::new(seed),
            input: TickInput::default(),
        }
    }

    /// New game with a JSON tuning override
    pub fn with_tuning(seed: f64, json: &str) -> Result<WebGame, JsValue> {
        let session = Tuning::from_json(json)
            .and_then(|tuning| GameSession::with_tuning(seed as u64, tuning))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            session,
            input: TickInput::default(),
        })
    }

    pub fn key_down(&mut self, code: &str, repeat: bool) {
        input::key_down(&mut self.input, code, repeat);
    }

    pub fn key_up(&mut self, code: &str) {
        input::key_up(&mut self.input, code);
    }

    /// Relative pointer movement (movementX/movementY) while pointer-locked
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.input.look += Vec2::new(dx, dy);
    }

    /// Advance one frame by `dt` seconds
    pub fn frame(&mut self, dt: f32) {
        tick(&mut self.session, &self.input, dt);
        self.input.clear_one_shots();
    }

    /// Current frame plus the events since the last call
    pub fn snapshot_json(&mut self) -> String {
        let events = self.session.drain_events();
        let snapshot = FrameSnapshot::capture(&self.session, events);
        serde_json::to_string(&snapshot).unwrap_or_else(|e| {
            log::error!("Snapshot serialization failed: {e}");
            String::from("{}")
        })
    }

    /// Building boxes, needed once per session
    pub fn buildings_json(&self) -> String {
        serde_json::to_string(self.session.buildings()).unwrap_or_else(|e| {
            log::error!("Building serialization failed: {e}");
            String::from("[]")
        })
    }

    pub fn currency(&self) -> u32 {
        self.session.currency()
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    pub fn scan_active(&self) -> bool {
        self.session.player().scan_active()
    }
}
