//! Logical key events and keyboard modifier state.

use bitflags::bitflags;

/// A decoded key press, as consumed by the line editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyEvent {
    /// A printable byte.
    Character(u8),
    /// Return.
    Enter,
    /// Backspace.
    Backspace,
    /// Tab.
    Tab,
    /// Cursor up.
    ArrowUp,
    /// Cursor down.
    ArrowDown,
    /// Cursor left.
    ArrowLeft,
    /// Cursor right.
    ArrowRight,
    /// Anything the editor does not react to: unmapped keys, releases and
    /// modifier changes.
    Ignore,
}

bitflags! {
    /// Modifier keys tracked across scancodes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// Either shift key is held.
        const SHIFT     = 1 << 0;
        /// Caps lock is latched on.
        const CAPS_LOCK = 1 << 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_start_clear() {
        let m = Modifiers::default();
        assert!(!m.contains(Modifiers::SHIFT));
        assert!(!m.contains(Modifiers::CAPS_LOCK));
    }

    #[test]
    fn caps_lock_toggles_independently_of_shift() {
        let mut m = Modifiers::SHIFT;
        m.toggle(Modifiers::CAPS_LOCK);
        assert_eq!(m, Modifiers::SHIFT | Modifiers::CAPS_LOCK);
        m.remove(Modifiers::SHIFT);
        assert_eq!(m, Modifiers::CAPS_LOCK);
    }
}
