use raylib::prelude::*;

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Tab,
    Backspace,
    Enter,
    Escape,
}

const KEY_MAP: [(KeyboardKey, Key); 10] = [
    (KeyboardKey::KEY_LEFT, Key::Left),
    (KeyboardKey::KEY_RIGHT, Key::Right),
    (KeyboardKey::KEY_UP, Key::Up),
    (KeyboardKey::KEY_DOWN, Key::Down),
    (KeyboardKey::KEY_PAGE_UP, Key::PageUp),
    (KeyboardKey::KEY_PAGE_DOWN, Key::PageDown),
    (KeyboardKey::KEY_TAB, Key::Tab),
    (KeyboardKey::KEY_BACKSPACE, Key::Backspace),
    (KeyboardKey::KEY_ENTER, Key::Enter),
    (KeyboardKey::KEY_ESCAPE, Key::Escape),
];

/// Everything that happened during one frame, captured up front so the page
/// logic never touches the window handle.
#[derive(Debug, Clone)]
pub struct FrameInput {
    pub mouse: Vector2,
    pub clicked: bool,
    pub wheel: f32,
    pub keys: Vec<Key>,
    pub chars: Vec<char>,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl FrameInput {
    pub fn poll(rl: &mut RaylibHandle) -> Self {
        let keys = KEY_MAP
            .iter()
            .filter(|(raw, _)| rl.is_key_pressed(*raw))
            .map(|(_, key)| *key)
            .collect();

        let mut chars = Vec::new();
        while let Some(c) = rl.get_char_pressed() {
            chars.push(c);
        }

        Self {
            mouse: rl.get_mouse_position(),
            clicked: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            wheel: rl.get_mouse_wheel_move(),
            keys,
            chars,
            screen_width: rl.get_screen_width() as f32,
            screen_height: rl.get_screen_height() as f32,
        }
    }

    /// An idle frame, used by tests and the first update.
    pub fn idle(screen_width: f32, screen_height: f32) -> Self {
        Self {
            mouse: Vector2::new(-1.0, -1.0),
            clicked: false,
            wheel: 0.0,
            keys: Vec::new(),
            chars: Vec::new(),
            screen_width,
            screen_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_frame_carries_no_events() {
        let input = FrameInput::idle(800.0, 600.0);
        assert!(!input.clicked);
        assert_eq!(input.wheel, 0.0);
        assert!(input.keys.is_empty() && input.chars.is_empty());
        assert_eq!((input.screen_width, input.screen_height), (800.0, 600.0));
    }
}
