//! Live set of held directions.
//!
//! The platform layer translates device key codes and touches into
//! `Direction`s and calls `key_down` / `key_up` / `touch_start` / `touch_end`
//! as events arrive. Entities only ever ask whether a direction is held.
//!
//! A touch stands in for "right + down" held together; releasing the touch
//! releases both, even if one of them was also held on the keyboard.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Directions a touch press holds.
pub const TOUCH_DIRECTIONS: [Direction; 2] = [Direction::Right, Direction::Down];

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Direction>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
        }
    }

    pub fn key_down(&mut self, dir: Direction) {
        self.held.insert(dir);
    }

    pub fn key_up(&mut self, dir: Direction) {
        self.held.remove(&dir);
    }

    pub fn touch_start(&mut self) {
        for dir in TOUCH_DIRECTIONS {
            self.key_down(dir);
        }
    }

    pub fn touch_end(&mut self) {
        for dir in TOUCH_DIRECTIONS {
            self.key_up(dir);
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held.contains(&dir)
    }

    /// True when at least one direction is held.
    pub fn any_held(&self) -> bool {
        !self.held.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_empty() {
        let input = InputState::new();
        for dir in Direction::ALL {
            assert!(!input.is_held(dir));
        }
        assert!(!input.any_held());
    }

    #[test]
    fn test_key_down_then_up() {
        let mut input = InputState::new();
        input.key_down(Direction::Left);
        assert!(input.is_held(Direction::Left));
        assert!(input.any_held());

        input.key_up(Direction::Left);
        assert!(!input.is_held(Direction::Left));
        assert!(!input.any_held());
    }

    #[test]
    fn test_repeat_key_down_is_single_entry() {
        let mut input = InputState::new();
        input.key_down(Direction::Up);
        input.key_down(Direction::Up);
        input.key_up(Direction::Up);
        assert!(!input.any_held());
    }

    #[test]
    fn test_key_up_without_down_is_no_op() {
        let mut input = InputState::new();
        input.key_up(Direction::Down);
        assert!(!input.any_held());
    }

    #[test]
    fn test_multiple_directions_independent() {
        let mut input = InputState::new();
        input.key_down(Direction::Left);
        input.key_down(Direction::Up);
        input.key_up(Direction::Left);
        assert!(!input.is_held(Direction::Left));
        assert!(input.is_held(Direction::Up));
    }

    #[test]
    fn test_touch_holds_right_and_down() {
        let mut input = InputState::new();
        input.touch_start();
        assert!(input.is_held(Direction::Right));
        assert!(input.is_held(Direction::Down));
        assert!(!input.is_held(Direction::Left));
        assert!(!input.is_held(Direction::Up));

        input.touch_end();
        assert!(!input.any_held());
    }

    #[test]
    fn test_touch_end_releases_keyboard_held_right() {
        let mut input = InputState::new();
        input.key_down(Direction::Right);
        input.key_down(Direction::Left);
        input.touch_start();
        input.touch_end();
        assert!(!input.is_held(Direction::Right));
        assert!(input.is_held(Direction::Left));
    }
}
