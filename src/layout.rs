//! Keyboard layouts.
//!
//! A layout is an ordered, row-major sequence of keys. Rows end after the
//! keys listed in [`LINE_BREAK_AFTER`]; the order is also the on-screen order
//! and the index space used by [`crate::Keyboard::press`].

use crate::key::{Arrow, Icon, Key, KeyRole, KeyStyle, Modifier};

/// Labels that close a row.
pub const LINE_BREAK_AFTER: [&str; 5] = ["Delete", "Backspace", "\\", "Enter", "done"];

const QWERTY: [&str; 78] = [
    "Esc", "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12", "PrtSrc",
    "Insert", "Delete", //
    "`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=", "Backspace", //
    "Tab", "q", "w", "e", "r", "t", "y", "u", "i", "o", "p", "[", "]", "\\", //
    "Caps Lock", "a", "s", "d", "f", "g", "h", "j", "k", "l", ";", "'", "Enter", //
    "Shift", "z", "x", "c", "v", "b", "n", "m", ",", ".", "/", "done", //
    "Ctrl", "Alt", "Space", "Alt", "Ctrl", "Left", "Right", "Up", "Down",
];

/// Build a key from its layout label, assigning role, icon and sizing.
pub fn key_for_label(label: &str) -> Key {
    let tiny = KeyStyle::TINY;
    let wide = KeyStyle::WIDE;
    match label {
        "Left" => Key::new(label, KeyRole::Arrow(Arrow::Left))
            .with_style(tiny)
            .with_icon(Icon::ArrowBack),
        "Right" => Key::new(label, KeyRole::Arrow(Arrow::Right))
            .with_style(tiny)
            .with_icon(Icon::ArrowForward),
        "Up" => Key::new(label, KeyRole::Arrow(Arrow::Up))
            .with_style(tiny)
            .with_icon(Icon::ArrowUpward),
        "Down" => Key::new(label, KeyRole::Arrow(Arrow::Down))
            .with_style(tiny)
            .with_icon(Icon::ArrowDownward),
        "Backspace" => Key::new(label, KeyRole::Backspace)
            .with_style(wide)
            .with_icon(Icon::Backspace),
        "Caps Lock" => Key::new(label, KeyRole::CapsLock)
            .with_style(wide | KeyStyle::ACTIVATABLE)
            .with_icon(Icon::CapsLock),
        "Enter" => Key::new(label, KeyRole::Enter)
            .with_style(wide)
            .with_icon(Icon::Return),
        "Space" => Key::new(label, KeyRole::Space)
            .with_style(KeyStyle::EXTRA_WIDE)
            .with_icon(Icon::SpaceBar),
        "done" => Key::new(label, KeyRole::Done)
            .with_style(wide | KeyStyle::DARK)
            .with_icon(Icon::KeyboardHide),
        "Tab" => Key::new(label, KeyRole::Tab).with_style(tiny),
        "Shift" => Key::new(label, KeyRole::Modifier(Modifier::Shift)).with_style(tiny),
        "Ctrl" => Key::new(label, KeyRole::Modifier(Modifier::Ctrl)).with_style(tiny),
        "Alt" => Key::new(label, KeyRole::Modifier(Modifier::Alt)).with_style(tiny),
        _ => Key::literal(label),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    keys: Vec<Key>,
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::qwerty()
    }
}

impl KeyboardLayout {
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Build a layout from labels, resolving each through [`key_for_label`].
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(labels.into_iter().map(key_for_label).collect())
    }

    /// The console's six-row QWERTY layout.
    pub fn qwerty() -> Self {
        Self::from_labels(QWERTY)
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn get(&self, index: usize) -> Option<&Key> {
        self.keys.get(index)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Index of the first key carrying `label`.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.keys.iter().position(|k| k.label == label)
    }

    /// Whether a row ends after the key at `index`.
    pub fn breaks_after(&self, index: usize) -> bool {
        self.keys
            .get(index)
            .is_some_and(|k| LINE_BREAK_AFTER.contains(&k.label.as_str()))
    }

    /// Index ranges of each visual row.
    pub fn rows(&self) -> Vec<std::ops::Range<usize>> {
        let mut rows = Vec::new();
        let mut start = 0;
        for index in 0..self.keys.len() {
            if self.breaks_after(index) {
                rows.push(start..index + 1);
                start = index + 1;
            }
        }
        if start < self.keys.len() {
            rows.push(start..self.keys.len());
        }
        rows
    }
}
