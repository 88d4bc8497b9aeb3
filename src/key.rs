/// Arrow keys on the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    Left,
    Right,
    Up,
    Down,
}

/// Modifier keys present on the layout.
///
/// None of them latch; they emit their label like any literal key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Shift,
    Ctrl,
    Alt,
}

/// What a key does when actuated.
///
/// The keyboard dispatches on this tag, never on the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Emits its (possibly caps-transformed) label as text.
    Literal,
    /// Emits a single space.
    Space,
    /// Emits the `Backspace` sentinel.
    Backspace,
    /// Emits the `Enter` sentinel.
    Enter,
    /// Emits the `Tab` sentinel.
    Tab,
    /// Emits its sentinel and toggles caps-lock.
    CapsLock,
    /// Rendered for completeness; behaves as a literal key.
    Modifier(Modifier),
    /// Emits the arrow's name as a sentinel.
    Arrow(Arrow),
    /// Hides the keyboard and notifies the close handler.
    Done,
}

/// Icon glyphs drawn in place of text.
///
/// The names follow the Material icon set used by the web console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Backspace,
    CapsLock,
    Return,
    SpaceBar,
    KeyboardHide,
    ArrowBack,
    ArrowForward,
    ArrowUpward,
    ArrowDownward,
}

impl Icon {
    /// Icon identifier as understood by the Material icon font.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Backspace => "backspace",
            Icon::CapsLock => "keyboard_capslock",
            Icon::Return => "keyboard_return",
            Icon::SpaceBar => "space_bar",
            Icon::KeyboardHide => "keyboard_hide",
            Icon::ArrowBack => "arrow_back",
            Icon::ArrowForward => "arrow_forward",
            Icon::ArrowUpward => "arrow_upward",
            Icon::ArrowDownward => "arrow_downward",
        }
    }

    /// A single-codepoint stand-in for hosts without the icon font.
    pub fn symbol(self) -> &'static str {
        match self {
            Icon::Backspace => "⌫",
            Icon::CapsLock => "⇪",
            Icon::Return => "⏎",
            Icon::SpaceBar => "␣",
            Icon::KeyboardHide => "⌨",
            Icon::ArrowBack => "←",
            Icon::ArrowForward => "→",
            Icon::ArrowUpward => "↑",
            Icon::ArrowDownward => "↓",
        }
    }
}

bitflags::bitflags! {
    /// Sizing and styling hints for the rendering adapter.
    ///
    /// These never change behavior.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyStyle: u8 {
        const WIDE        = 0b0_0001;
        const EXTRA_WIDE  = 0b0_0010;
        const TINY        = 0b0_0100;
        const DARK        = 0b0_1000;
        const ACTIVATABLE = 0b1_0000;
    }
}

/// A single actuator on the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// The layout label. Also the sentinel for named keys.
    pub label: String,
    pub role: KeyRole,
    pub style: KeyStyle,
    /// Drawn instead of the label when present.
    pub icon: Option<Icon>,
}

impl Key {
    pub fn new(label: impl Into<String>, role: KeyRole) -> Self {
        Self {
            label: label.into(),
            role,
            style: KeyStyle::empty(),
            icon: None,
        }
    }

    /// A literal key; multi-character labels are drawn tiny.
    pub fn literal(label: impl Into<String>) -> Self {
        let label = label.into();
        let style = if label.chars().count() > 1 {
            KeyStyle::TINY
        } else {
            KeyStyle::empty()
        };
        Self::new(label, KeyRole::Literal).with_style(style)
    }

    pub fn with_style(mut self, style: KeyStyle) -> Self {
        self.style |= style;
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Only caps-lock keeps a pressed state.
    pub fn is_toggle(&self) -> bool {
        self.role == KeyRole::CapsLock
    }

    pub fn is_wide(&self) -> bool {
        self.style.intersects(KeyStyle::WIDE | KeyStyle::EXTRA_WIDE)
    }

    pub fn is_tiny(&self) -> bool {
        self.style.contains(KeyStyle::TINY)
    }

    /// Text shown on the key before any caps-lock toggle.
    pub fn face(&self) -> &str {
        match self.icon {
            Some(icon) => icon.name(),
            None => &self.label,
        }
    }
}
