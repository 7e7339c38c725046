use crate::layout::Point;

/// Events that widgets can respond to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePressed {
        button: MouseButton,
        position: Point,
    },
    /// Mouse button released.
    MouseReleased {
        button: MouseButton,
        position: Point,
    },
    /// Mouse moved.
    MouseMoved { position: Point },
    /// Mouse wheel scrolled. Positive `delta` scrolls towards the top of the
    /// content.
    MouseWheel { delta: f32, position: Point },
    /// Keyboard key pressed.
    KeyPressed { key: Key, modifiers: Modifiers },
    /// Keyboard key released.
    KeyReleased { key: Key, modifiers: Modifiers },
}

impl Event {
    /// Key press without modifiers.
    pub fn key_pressed(key: Key) -> Self {
        Event::KeyPressed {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Key release without modifiers.
    pub fn key_released(key: Key) -> Self {
        Event::KeyReleased {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Left button press at a position.
    pub fn left_press(x: f32, y: f32) -> Self {
        Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard keys (simplified set for now).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    /// The character this key types, if any. Space types `' '`.
    pub fn typed_char(&self) -> Option<char> {
        match self {
            Key::Char(c) => Some(*c),
            Key::Space => Some(' '),
            _ => None,
        }
    }
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Whether a command modifier (ctrl, alt or meta) is held. Shift alone
    /// still produces text.
    pub fn has_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}
