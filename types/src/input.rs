//! Host input events and listener registrations.

use std::fmt;

use crate::ScrollScope;

/// Logical key as seen by listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    /// Wheel or trackpad movement. Positive `delta_y` scrolls toward the end
    /// of the content.
    Wheel { delta_y: f64 },
    KeyDown(Key),
}

/// An input event dispatched to listeners.
///
/// Listeners may call [`InputEvent::prevent_default`] to suppress the host's
/// native handling (e.g. line scrolling).
#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
    kind: InputKind,
    default_prevented: bool,
}

impl InputEvent {
    #[must_use]
    pub fn wheel(delta_y: f64) -> Self {
        Self {
            kind: InputKind::Wheel { delta_y },
            default_prevented: false,
        }
    }

    #[must_use]
    pub fn key(key: Key) -> Self {
        Self {
            kind: InputKind::KeyDown(key),
            default_prevented: false,
        }
    }

    #[must_use]
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Listener kind that receives this event.
    #[must_use]
    pub fn listener_kind(&self) -> ListenerKind {
        match self.kind {
            InputKind::Wheel { .. } => ListenerKind::Wheel,
            InputKind::KeyDown(_) => ListenerKind::KeyDown,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Wheel,
    KeyDown,
}

/// Element a listener is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Window,
    Scope(ScrollScope),
}

/// Handle returned by a host when a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
