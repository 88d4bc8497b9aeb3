use unicode_segmentation::UnicodeSegmentation;

/// Unshifted/shifted punctuation pairs of a US keyboard.
pub const SHIFT_PAIRS: [(char, char); 21] = [
    ('`', '~'),
    ('1', '!'),
    ('2', '@'),
    ('3', '#'),
    ('4', '$'),
    ('5', '%'),
    ('6', '^'),
    ('7', '&'),
    ('8', '*'),
    ('9', '('),
    ('0', ')'),
    ('-', '_'),
    ('=', '+'),
    ('[', '{'),
    (']', '}'),
    ('\\', '|'),
    (';', ':'),
    ('\'', '"'),
    (',', '<'),
    ('.', '>'),
    ('/', '?'),
];

/// The partner of `c` in [`SHIFT_PAIRS`], in either direction.
///
/// Applying it twice returns the original character.
pub fn shift_pair(c: char) -> Option<char> {
    SHIFT_PAIRS.iter().find_map(|&(base, shifted)| {
        if c == base {
            Some(shifted)
        } else if c == shifted {
            Some(base)
        } else {
            None
        }
    })
}

/// The shifted form of an unshifted punctuation character.
pub fn shifted(c: char) -> Option<char> {
    SHIFT_PAIRS
        .iter()
        .find_map(|&(base, shifted)| (c == base).then_some(shifted))
}

/// The unshifted form of a shifted punctuation character.
pub fn unshifted(c: char) -> Option<char> {
    SHIFT_PAIRS
        .iter()
        .find_map(|&(base, shifted)| (c == shifted).then_some(base))
}

/// Re-render a plain-text key face after caps-lock changed to `engaged`.
///
/// Returns `None` when the face is not a single grapheme or has no caps
/// counterpart; such keys keep their face.
pub fn relabel(face: &str, engaged: bool) -> Option<String> {
    let mut graphemes = face.graphemes(true);
    let only = graphemes.next()?;
    if graphemes.next().is_some() {
        return None;
    }
    let mut chars = only.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_alphabetic() {
        let cased = if engaged {
            c.to_ascii_uppercase()
        } else {
            c.to_ascii_lowercase()
        };
        return Some(cased.to_string());
    }
    shift_pair(c).map(String::from)
}

/// Mutable state of the keyboard surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    /// What the last actuated key contributed. Not an accumulated buffer.
    pub value: String,
    pub caps_lock: bool,
    pub visible: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn open(&mut self, initial: &str) {
        self.value.clear();
        self.value.push_str(initial);
        self.visible = true;
    }

    /// Caps-lock is left alone.
    pub(crate) fn close(&mut self) {
        self.value.clear();
        self.visible = false;
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }

    /// Flip caps-lock and return the new engagement.
    pub(crate) fn toggle_caps_lock(&mut self) -> bool {
        self.caps_lock = !self.caps_lock;
        self.caps_lock
    }
}

