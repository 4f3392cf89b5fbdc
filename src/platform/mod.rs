//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key codes to tick input)
//! - The wasm-bindgen facade the JS scene graph drives

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{Key, key_down, key_up};
