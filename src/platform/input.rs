//! Keyboard mapping
//!
//! Keys are identified by `KeyboardEvent.code` so the layout doesn't matter.

use crate::sim::TickInput;

/// Game actions bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Forward,
    Back,
    Left,
    Right,
    Scan,
}

impl Key {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" | "ArrowUp" => Some(Key::Forward),
            "KeyS" | "ArrowDown" => Some(Key::Back),
            "KeyA" | "ArrowLeft" => Some(Key::Left),
            "KeyD" | "ArrowRight" => Some(Key::Right),
            "KeyE" => Some(Key::Scan),
            _ => None,
        }
    }
}

/// Record a key press. Auto-repeat presses never re-fire the scanner.
pub fn key_down(input: &mut TickInput, code: &str, repeat: bool) {
    if !repeat {
        input.any_key = true;
    }
    match Key::from_code(code) {
        Some(Key::Forward) => input.forward = true,
        Some(Key::Back) => input.back = true,
        Some(Key::Left) => input.left = true,
        Some(Key::Right) => input.right = true,
        Some(Key::Scan) if !repeat => input.scan = true,
        _ => {}
    }
}

/// Record a key release (only held movement keys care)
pub fn key_up(input: &mut TickInput, code: &str) {
    match Key::from_code(code) {
        Some(Key::Forward) => input.forward = false,
        Some(Key::Back) => input.back = false,
        Some(Key::Left) => input.left = false,
        Some(Key::Right) => input.right = false,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_hold() {
        let mut input = TickInput::default();
        key_down(&mut input, "KeyW", false);
        key_down(&mut input, "ArrowLeft", false);
        assert!(input.forward && input.left);

        // Held state survives the per-tick clear
        input.clear_one_shots();
        assert!(input.forward && input.left);

        key_up(&mut input, "KeyW");
        assert!(!input.forward && input.left);
    }

    #[test]
    fn test_scan_is_edge_triggered() {
        let mut input = TickInput::default();
        key_down(&mut input, "KeyE", false);
        assert!(input.scan);
        input.clear_one_shots();

        key_down(&mut input, "KeyE", true);
        assert!(!input.scan);

        // Releasing the scan key does nothing
        key_up(&mut input, "KeyE");
        assert!(!input.scan);
    }

    #[test]
    fn test_any_key_flags_restart() {
        let mut input = TickInput::default();
        key_down(&mut input, "Space", false);
        assert!(input.any_key);
        assert!(!input.scan && !input.forward);
        assert_eq!(Key::from_code("Space"), None);
    }
}
