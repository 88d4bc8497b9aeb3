pub mod config;
pub mod decode;
pub mod key;
pub mod keyboard;
pub mod layout;
pub mod state;
pub mod traits;
pub mod viewer;

pub use crate::config::{Config, ConfigError, KeyboardConfig};
pub use crate::decode::{Decoded, KeyEventKind, RawKeyEvent, decode};
pub use crate::key::{Arrow, Icon, Key, KeyRole, KeyStyle, Modifier};
pub use crate::keyboard::{
    CloseHandler, FieldId, InputHandler, Keyboard, KeyboardBuilder, KeyboardError,
    KeyboardSnapshot, Signal,
};
pub use crate::layout::KeyboardLayout;
pub use crate::state::KeyboardState;
pub use crate::traits::{HostField, NullSurface, Surface};
pub use crate::viewer::{
    ConnectOptions, ConnectionStatus, FramebufferClient, PageContext, StatusLine, Viewer,
    ViewerConfig, ViewerError, ViewerEvent,
};
