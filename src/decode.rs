//! Raw key event decoding.
//!
//! Translates platform key events (browser `keydown`/`keypress` style key
//! and char codes) into the key name and the character it types, for
//! hosts that forward a physical keyboard alongside the on-screen one.

use crate::state::{shifted, unshifted};

/// Which kind of platform event produced the codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    /// Character event; `char_code` is meaningful.
    Press,
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub kind: KeyEventKind,
    pub key_code: Option<u32>,
    pub char_code: u32,
    pub shift: bool,
}

impl RawKeyEvent {
    pub fn press(char_code: u32, shift: bool) -> Self {
        Self {
            kind: KeyEventKind::Press,
            key_code: None,
            char_code,
            shift,
        }
    }

    pub fn down(key_code: u32, shift: bool) -> Self {
        Self {
            kind: KeyEventKind::Down,
            key_code: Some(key_code),
            char_code: 0,
            shift,
        }
    }
}

/// A decoded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The character the key types, or the key name for named keys.
    pub ch: String,
    /// Normalized key name: lowercase character or a name like `left`.
    pub key: String,
}

const KEY_NAMES: [(u32, &str); 74] = [
    (0, "\\"),
    (8, "\u{8}"),
    (9, "\t"),
    (12, "num"),
    (13, "\n"),
    (16, "shift"),
    (17, "meta"),
    (18, "alt"),
    (19, "pause"),
    (20, "caps"),
    (27, "esc"),
    (32, " "),
    (33, "pageup"),
    (34, "pagedown"),
    (35, "end"),
    (36, "home"),
    (37, "left"),
    (38, "up"),
    (39, "right"),
    (40, "down"),
    (44, "print"),
    (45, "insert"),
    (46, "delete"),
    (91, "cmd"),
    (92, "cmd"),
    (93, "cmd"),
    (96, "num0"),
    (97, "num1"),
    (98, "num2"),
    (99, "num3"),
    (100, "num4"),
    (101, "num5"),
    (102, "num6"),
    (103, "num7"),
    (104, "num8"),
    (105, "num9"),
    (106, "*"),
    (107, "+"),
    (108, "num_enter"),
    (109, "num_subtract"),
    (110, "num_decimal"),
    (111, "num_divide"),
    (112, "f1"),
    (113, "f2"),
    (114, "f3"),
    (115, "f4"),
    (116, "f5"),
    (117, "f6"),
    (118, "f7"),
    (119, "f8"),
    (120, "f9"),
    (121, "f10"),
    (122, "f11"),
    (123, "f12"),
    (124, "print"),
    (144, "num"),
    (145, "scroll"),
    (173, "-"),
    (186, ";"),
    (187, "="),
    (188, ","),
    (189, "-"),
    (190, "."),
    (191, "/"),
    (192, "`"),
    (219, "["),
    (220, "\\"),
    (221, "]"),
    (222, "'"),
    (223, "`"),
    (224, "cmd"),
    (225, "alt"),
    (57392, "ctrl"),
    (63289, "num"),
];

const NUMPAD_CHARS: [(&str, &str); 4] = [
    ("num_subtract", "-"),
    ("num_enter", "\n"),
    ("num_decimal", "."),
    ("num_divide", "/"),
];

/// Keys that produce no printable character.
pub const UNPRINTABLE_KEYS: [&str; 34] = [
    "\u{8}", "num", "shift", "meta", "alt", "pause", "caps", "esc", "pageup", "pagedown", "end",
    "home", "left", "up", "right", "down", "print", "insert", "delete", "cmd", "f1", "f2", "f3",
    "f4", "f5", "f6", "f7", "f8", "f9", "f10", "f11", "f12", "scroll", "ctrl",
];

/// Name of a key code, if it has one.
pub fn key_name(code: u32) -> Option<&'static str> {
    KEY_NAMES
        .iter()
        .find_map(|&(c, name)| (c == code).then_some(name))
}

fn is_named_key(key: &str) -> bool {
    KEY_NAMES
        .iter()
        .any(|&(_, name)| name == key)
}

pub fn is_unprintable(key: &str) -> bool {
    UNPRINTABLE_KEYS.contains(&key)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

fn lowercase_of(code: u32) -> Option<String> {
    char::from_u32(code).map(|c| c.to_lowercase().collect())
}

fn key_from_char_code(code: u32) -> Option<String> {
    let c = char::from_u32(code)?;
    if let Some(base) = unshifted(c) {
        return Some(base.to_string());
    }
    if c == '\r' {
        return Some("\n".to_string());
    }
    Some(c.to_lowercase().collect())
}

/// Decode a raw event into its key name and typed character.
///
/// Returns `None` for non-character events without a key code, and for
/// codes that are not valid characters.
pub fn decode(event: &RawKeyEvent) -> Option<Decoded> {
    let key = match (event.kind, event.key_code) {
        (KeyEventKind::Press, _) => key_from_char_code(event.char_code)?,
        (_, Some(code)) => match key_name(code) {
            Some(name) => name.to_string(),
            None => lowercase_of(code)?,
        },
        (_, None) if event.char_code == 0 => "\n".to_string(),
        (_, None) => return None,
    };

    let shifted_glyph = if event.shift {
        single_char(&key).and_then(shifted)
    } else {
        None
    };

    let ch = if let Some(glyph) = shifted_glyph {
        glyph.to_string()
    } else if !event.shift || is_named_key(&key) {
        NUMPAD_CHARS
            .iter()
            .find_map(|&(name, ch)| (name == key).then(|| ch.to_string()))
            .unwrap_or_else(|| key.clone())
    } else {
        key.to_uppercase()
    };

    Some(Decoded { ch, key })
}
