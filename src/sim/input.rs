//! Held-key tracking
//!
//! Four independent flags toggled by key-press/release signals and read
//! once per update step. Last write wins; there is no queue.

/// Logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a DOM `KeyboardEvent::key` value to a direction. Two
    /// interchangeable key sets are honored: arrows and WASD.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" => Some(Self::Up),
            "ArrowDown" | "s" => Some(Self::Down),
            "ArrowLeft" | "a" => Some(Self::Left),
            "ArrowRight" | "d" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Currently-held directional keys
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set_key(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut input = InputState::default();
        input.set_key(Direction::Up, true);
        input.set_key(Direction::Up, true);
        input.set_key(Direction::Up, false);
        assert!(!input.up);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut input = InputState::default();
        input.set_key(Direction::Left, true);
        input.set_key(Direction::Down, true);
        input.set_key(Direction::Left, false);
        assert!(!input.left);
        assert!(input.down);
        assert!(!input.up);
    }

    #[test]
    fn test_both_key_sets_map_to_same_directions() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("a"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("w"), Some(Direction::Up));
        assert_eq!(Direction::from_key("Escape"), None);
    }
}
