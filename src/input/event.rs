/// Platform-agnostic input events.
///
/// The viewer translates window/device events into these before routing
/// them to a [`CubeRenderer`](crate::cube::CubeRenderer).
///
/// # Example
///
/// ```
/// use cubeview::input::{InputEvent, Key};
///
/// let press = InputEvent::KeyDown { key: Key::W };
/// assert_eq!(press.key(), Some(Key::W));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    KeyDown {
        /// Symbolic key code.
        key: Key,
    },
    /// A key was released.
    KeyUp {
        /// Symbolic key code.
        key: Key,
    },
    /// Relative pointer motion.
    PointerMotion {
        /// Horizontal delta in pixels.
        dx: f32,
        /// Vertical delta in pixels.
        dy: f32,
    },
}

impl InputEvent {
    /// The key carried by a key event, if any.
    #[must_use]
    pub fn key(&self) -> Option<Key> {
        match *self {
            Self::KeyDown { key } | Self::KeyUp { key } => Some(key),
            Self::PointerMotion { .. } => None,
        }
    }
}

/// Symbolic key codes the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Toggle between targeting and free-look.
    Tab,
    /// Dolly forward.
    W,
    /// Dolly backward.
    S,
    /// Strafe left.
    Q,
    /// Strafe right.
    E,
    /// Yaw left.
    A,
    /// Yaw right.
    D,
    /// Toggle perspective/orthographic (on release).
    P,
    /// Grow the orthographic scale.
    Minus,
    /// Shrink the orthographic scale.
    Equal,
    /// Toggle cube/scene render mode (on release).
    V,
    /// Swap the controlled camera (on release).
    C,
    /// Quit the viewer.
    Escape,
    /// Any key without a binding.
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::KeyCode> for Key {
    fn from(code: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode;
        match code {
            KeyCode::Tab => Self::Tab,
            KeyCode::KeyW => Self::W,
            KeyCode::KeyS => Self::S,
            KeyCode::KeyQ => Self::Q,
            KeyCode::KeyE => Self::E,
            KeyCode::KeyA => Self::A,
            KeyCode::KeyD => Self::D,
            KeyCode::KeyP => Self::P,
            KeyCode::Minus | KeyCode::NumpadSubtract => Self::Minus,
            KeyCode::Equal | KeyCode::NumpadAdd => Self::Equal,
            KeyCode::KeyV => Self::V,
            KeyCode::KeyC => Self::C,
            KeyCode::Escape => Self::Escape,
            _ => Self::Other,
        }
    }
}
