//! PS/2 scancode set 1 decoding.
//!
//! Translates raw bytes from the keyboard data port into [`KeyEvent`]s,
//! tracking shift and caps lock across calls.

use log::trace;
use mljos_common::{KeyEvent, Modifiers};

/// Scancodes the decoder treats specially.
pub mod scancode {
    /// Set on break (release) codes.
    pub const RELEASE: u8 = 0x80;
    /// Left shift make code.
    pub const LEFT_SHIFT: u8 = 0x2A;
    /// Right shift make code.
    pub const RIGHT_SHIFT: u8 = 0x36;
    /// Left shift break code.
    pub const LEFT_SHIFT_RELEASE: u8 = LEFT_SHIFT | RELEASE;
    /// Right shift break code.
    pub const RIGHT_SHIFT_RELEASE: u8 = RIGHT_SHIFT | RELEASE;
    /// Caps lock make code.
    pub const CAPS_LOCK: u8 = 0x3A;
    /// Cursor up.
    pub const ARROW_UP: u8 = 0x48;
    /// Cursor down.
    pub const ARROW_DOWN: u8 = 0x50;
    /// Cursor left.
    pub const ARROW_LEFT: u8 = 0x4B;
    /// Cursor right.
    pub const ARROW_RIGHT: u8 = 0x4D;
}

const fn table(prefix: &[u8]) -> [u8; 128] {
    let mut table = [0; 128];
    let mut i = 0;
    while i < prefix.len() {
        table[i] = prefix[i];
        i += 1;
    }
    table
}

/// US layout, unshifted. Zero marks keys with no character.
static NORMAL_MAP: [u8; 128] =
    table(b"\0\x1b1234567890-=\x08\tqwertyuiop[]\n\0asdfghjkl;'`\0\\zxcvbnm,./\0*\0 ");

/// US layout, shifted.
static SHIFT_MAP: [u8; 128] =
    table(b"\0\x1b!@#$%^&*()_+\x08\tQWERTYUIOP{}\n\0ASDFGHJKL:\"~\0|ZXCVBNM<>?\0*\0 ");

/// Letter keys, the only ones caps lock affects.
fn is_letter(scancode: u8) -> bool {
    matches!(scancode, 0x10..=0x19 | 0x1E..=0x26 | 0x2C..=0x32)
}

/// Stateful scancode-to-event translator.
#[derive(Debug, Default)]
pub struct ScancodeDecoder {
    modifiers: Modifiers,
}

impl ScancodeDecoder {
    /// A decoder with no modifiers active.
    pub const fn new() -> Self {
        ScancodeDecoder {
            modifiers: Modifiers::empty(),
        }
    }

    /// Currently active modifiers.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Decodes one raw scancode.
    pub fn decode(&mut self, raw: u8) -> KeyEvent {
        use scancode::*;

        let event = match raw {
            LEFT_SHIFT | RIGHT_SHIFT => {
                self.modifiers.insert(Modifiers::SHIFT);
                KeyEvent::Ignore
            }
            LEFT_SHIFT_RELEASE | RIGHT_SHIFT_RELEASE => {
                self.modifiers.remove(Modifiers::SHIFT);
                KeyEvent::Ignore
            }
            CAPS_LOCK => {
                self.modifiers.toggle(Modifiers::CAPS_LOCK);
                KeyEvent::Ignore
            }
            ARROW_UP => KeyEvent::ArrowUp,
            ARROW_DOWN => KeyEvent::ArrowDown,
            ARROW_LEFT => KeyEvent::ArrowLeft,
            ARROW_RIGHT => KeyEvent::ArrowRight,
            raw if raw & RELEASE != 0 => KeyEvent::Ignore,
            raw => self.translate(raw),
        };
        trace!("scancode {:#04x} -> {:?}", raw, event);
        event
    }

    fn translate(&self, raw: u8) -> KeyEvent {
        let mut shifted = self.modifiers.contains(Modifiers::SHIFT);
        if self.modifiers.contains(Modifiers::CAPS_LOCK) && is_letter(raw) {
            shifted = !shifted;
        }
        let map = if shifted { &SHIFT_MAP } else { &NORMAL_MAP };

        match map[usize::from(raw)] {
            0 => KeyEvent::Ignore,
            b'\n' | b'\r' => KeyEvent::Enter,
            0x08 => KeyEvent::Backspace,
            b'\t' => KeyEvent::Tab,
            ch => KeyEvent::Character(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scancode::*;
    use super::*;

    const A: u8 = 0x1E;
    const ONE: u8 = 0x02;
    const SLASH: u8 = 0x35;

    #[test]
    fn plain_keys_use_normal_map() {
        let mut d = ScancodeDecoder::new();
        assert_eq!(d.decode(A), KeyEvent::Character(b'a'));
        assert_eq!(d.decode(ONE), KeyEvent::Character(b'1'));
        assert_eq!(d.decode(0x39), KeyEvent::Character(b' '));
        assert_eq!(d.decode(0x10), KeyEvent::Character(b'q'));
        assert_eq!(d.decode(0x32), KeyEvent::Character(b'm'));
        assert_eq!(d.decode(SLASH), KeyEvent::Character(b'/'));
    }

    #[test]
    fn control_positions_become_events() {
        let mut d = ScancodeDecoder::new();
        assert_eq!(d.decode(0x1C), KeyEvent::Enter);
        assert_eq!(d.decode(0x0E), KeyEvent::Backspace);
        assert_eq!(d.decode(0x0F), KeyEvent::Tab);
    }

    #[test]
    fn unmapped_and_release_codes_are_ignored() {
        let mut d = ScancodeDecoder::new();
        assert_eq!(d.decode(0x00), KeyEvent::Ignore);
        assert_eq!(d.decode(0x1D), KeyEvent::Ignore); // ctrl
        assert_eq!(d.decode(0x3B), KeyEvent::Ignore); // F1
        assert_eq!(d.decode(A | RELEASE), KeyEvent::Ignore);
        assert_eq!(d.decode(0xE0), KeyEvent::Ignore);
        assert_eq!(d.decode(CAPS_LOCK | RELEASE), KeyEvent::Ignore);
        assert_eq!(d.modifiers(), Modifiers::empty());
    }

    #[test]
    fn shift_is_held_until_released() {
        let mut d = ScancodeDecoder::new();
        assert_eq!(d.decode(LEFT_SHIFT), KeyEvent::Ignore);
        assert_eq!(d.decode(A), KeyEvent::Character(b'A'));
        assert_eq!(d.decode(ONE), KeyEvent::Character(b'!'));
        assert_eq!(d.decode(LEFT_SHIFT_RELEASE), KeyEvent::Ignore);
        assert_eq!(d.decode(A), KeyEvent::Character(b'a'));

        d.decode(RIGHT_SHIFT);
        assert_eq!(d.decode(SLASH), KeyEvent::Character(b'?'));
        d.decode(RIGHT_SHIFT_RELEASE);
        assert_eq!(d.decode(SLASH), KeyEvent::Character(b'/'));
    }

    #[test]
    fn caps_lock_only_affects_letters() {
        let mut d = ScancodeDecoder::new();
        assert_eq!(d.decode(CAPS_LOCK), KeyEvent::Ignore);
        assert!(d.modifiers().contains(Modifiers::CAPS_LOCK));
        assert_eq!(d.decode(A), KeyEvent::Character(b'A'));
        assert_eq!(d.decode(ONE), KeyEvent::Character(b'1'));
        assert_eq!(d.decode(0x27), KeyEvent::Character(b';'));
    }

    #[test]
    fn shift_inverts_caps_lock_for_letters() {
        let mut d = ScancodeDecoder::new();
        d.decode(CAPS_LOCK);
        d.decode(LEFT_SHIFT);
        assert_eq!(d.decode(A), KeyEvent::Character(b'a'));
        assert_eq!(d.decode(ONE), KeyEvent::Character(b'!'));
    }

    #[test]
    fn caps_lock_toggles_off_on_second_press() {
        let mut d = ScancodeDecoder::new();
        d.decode(CAPS_LOCK);
        d.decode(CAPS_LOCK);
        assert_eq!(d.decode(A), KeyEvent::Character(b'a'));
    }

    #[test]
    fn arrows_ignore_modifiers() {
        let mut d = ScancodeDecoder::new();
        d.decode(LEFT_SHIFT);
        d.decode(CAPS_LOCK);
        assert_eq!(d.decode(ARROW_UP), KeyEvent::ArrowUp);
        assert_eq!(d.decode(ARROW_DOWN), KeyEvent::ArrowDown);
        assert_eq!(d.decode(ARROW_LEFT), KeyEvent::ArrowLeft);
        assert_eq!(d.decode(ARROW_RIGHT), KeyEvent::ArrowRight);
    }

    #[test]
    fn every_letter_key_is_in_a_caps_range() {
        for raw in 0..0x80u8 {
            let lower = NORMAL_MAP[usize::from(raw)];
            assert_eq!(lower.is_ascii_lowercase(), is_letter(raw), "scancode {raw:#04x}");
            if is_letter(raw) {
                assert_eq!(SHIFT_MAP[usize::from(raw)], lower.to_ascii_uppercase());
            }
        }
    }
}
