//! Keyboard strokes, the interestingness filter, and listener ownership.
//!
//! While a node's label is being edited the host routes every keydown
//! through the engine, which forwards the ones the editor cares about and
//! lets the rest pass through to the host untouched. At most one node may
//! listen at a time; the [`ListenerSlot`] makes that single-owner rule
//! explicit and fails loudly on double-acquire or release-without-acquire
//! instead of silently rebinding.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::registry::NodeId;

/// The keys the engine distinguishes. Anything it has no opinion about
/// arrives as [`Key::Other`] and passes through uninterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Character(char),
    Escape,
    Backspace,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Tab,
    Home,
    End,
    /// Any key the editor does not handle.
    Other,
}

impl Key {
    /// Check if this is a horizontal arrow key.
    #[inline]
    pub fn is_horizontal_arrow(&self) -> bool {
        matches!(self, Key::ArrowLeft | Key::ArrowRight)
    }
}

/// Modifier keys held during a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
        meta: false,
    };

    /// Meta modifier only.
    pub const META: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: true,
    };

    /// Check that no modifier is held.
    #[inline]
    pub fn none(&self) -> bool {
        !self.shift && !self.control && !self.alt && !self.meta
    }

    /// Check that alt is the only modifier held.
    #[inline]
    pub fn only_alt(&self) -> bool {
        self.alt && !self.shift && !self.control && !self.meta
    }

    /// Check that meta is the only modifier held.
    #[inline]
    pub fn only_meta(&self) -> bool {
        self.meta && !self.shift && !self.control && !self.alt
    }
}

/// A single key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    /// The pressed key.
    pub key: Key,
    /// Modifiers held during the press.
    pub modifiers: KeyboardModifiers,
}

impl KeyStroke {
    /// Create a stroke.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self { key, modifiers }
    }

    /// A printable character with no modifiers.
    pub fn character(ch: char) -> Self {
        Self::new(Key::Character(ch), KeyboardModifiers::NONE)
    }

    /// Whether the editor wants this stroke.
    ///
    /// Interesting strokes are: any printable character, Escape, Backspace,
    /// and horizontal arrows pressed with no modifiers, only alt, or only
    /// meta. Everything else passes through to the host unintercepted.
    pub fn is_interesting(&self) -> bool {
        match self.key {
            Key::Escape | Key::Backspace | Key::Character(_) => true,
            Key::ArrowLeft | Key::ArrowRight => {
                self.modifiers.none() || self.modifiers.only_alt() || self.modifiers.only_meta()
            }
            _ => false,
        }
    }
}

/// The single global keyboard listener, owned by at most one node.
#[derive(Debug, Default)]
pub struct ListenerSlot {
    owner: Option<NodeId>,
}

impl ListenerSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The node currently listening, if any.
    #[inline]
    pub fn owner(&self) -> Option<NodeId> {
        self.owner
    }

    /// Acquire the listener for a node.
    ///
    /// Fails with [`EngineError::ResourceConflict`] if any node (including
    /// the same one) already holds it.
    pub fn acquire(&mut self, node_id: NodeId) -> EngineResult<()> {
        if self.owner.is_some() {
            return Err(EngineError::ResourceConflict(
                "a keyboard listener is already active",
            ));
        }

        debug!(target: "nodecaret::keyboard", node = %node_id, "keyboard listener acquired");
        self.owner = Some(node_id);
        Ok(())
    }

    /// Release the listener, returning the node that held it.
    ///
    /// Fails with [`EngineError::ResourceConflict`] if no listener is
    /// active.
    pub fn release(&mut self) -> EngineResult<NodeId> {
        match self.owner.take() {
            Some(node_id) => {
                debug!(target: "nodecaret::keyboard", node = %node_id, "keyboard listener released");
                Ok(node_id)
            }
            None => Err(EngineError::ResourceConflict(
                "no keyboard listener is active",
            )),
        }
    }
}
