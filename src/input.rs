use macroquad::input::{KeyCode, is_key_pressed};

use crate::game::{Direction, FrameInput};

/// Arrow keys in the order they are tried each frame
const TURN_KEYS: [KeyCode; 4] = [KeyCode::Up, KeyCode::Down, KeyCode::Right, KeyCode::Left];

pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Build a frame's input from a key-pressed predicate
pub fn frame_input(pressed: impl Fn(KeyCode) -> bool) -> FrameInput {
    FrameInput {
        turns: TURN_KEYS
            .into_iter()
            .filter(|&key| pressed(key))
            .filter_map(direction_for_key)
            .collect(),
        confirm: pressed(KeyCode::Enter),
    }
}

/// Sample this frame's key presses from macroquad
pub fn poll() -> FrameInput {
    frame_input(is_key_pressed)
}

pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(direction_for_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(direction_for_key(KeyCode::Down), Some(Direction::Down));
        assert_eq!(direction_for_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(direction_for_key(KeyCode::Right), Some(Direction::Right));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(direction_for_key(KeyCode::X), None);
        assert_eq!(direction_for_key(KeyCode::Enter), None);
    }

    #[test]
    fn test_frame_input_order() {
        let input = frame_input(|key| matches!(key, KeyCode::Left | KeyCode::Up));
        assert_eq!(input.turns, vec![Direction::Up, Direction::Left]);
        assert!(!input.confirm);
    }

    #[test]
    fn test_frame_input_confirm() {
        let input = frame_input(|key| key == KeyCode::Enter);
        assert!(input.turns.is_empty());
        assert!(input.confirm);
    }
}
