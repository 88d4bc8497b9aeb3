use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace};
use thiserror::Error;

use crate::config::KeyboardConfig;
use crate::key::KeyRole;
use crate::layout::KeyboardLayout;
use crate::state::{self, KeyboardState};
use crate::traits::{HostField, Surface};

/// Receives the text contributed by each actuation.
pub type InputHandler = Box<dyn FnMut(&str)>;
/// Runs after the `done` key has hidden the keyboard.
pub type CloseHandler = Box<dyn FnMut()>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyboardError {
    #[error("no key at index {0}")]
    NoSuchKey(usize),
    #[error("no key labelled {0:?}")]
    NoSuchLabel(String),
    #[error("no bound field {0:?}")]
    NoSuchField(FieldId),
}

/// What an actuation reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// The input handler was given this value.
    Input(String),
    /// The keyboard was dismissed.
    Close,
}

/// Handle to a host field registered with [`Keyboard::bind_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

#[derive(Default)]
struct Handlers {
    on_input: Option<InputHandler>,
    on_close: Option<CloseHandler>,
}

type Action<S> = fn(&mut Keyboard<S>, usize) -> Signal;

/// The on-screen keyboard.
///
/// Build one per page and hand it to every field that wants it. Only one
/// caller owns the keyboard at a time: a new [`open`](Keyboard::open)
/// replaces the previous caller's handlers without telling it.
pub struct Keyboard<S: Surface> {
    layout: KeyboardLayout,
    faces: Vec<String>,
    state: KeyboardState,
    handlers: Handlers,
    fields: Vec<Rc<RefCell<dyn HostField>>>,
    surface: S,
    release_handlers_on_close: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    pub value: String,
    pub caps_lock: bool,
    pub visible: bool,
    pub has_input_handler: bool,
    pub has_close_handler: bool,
}

pub struct KeyboardBuilder {
    layout: KeyboardLayout,
    release_handlers_on_close: bool,
}

impl Default for KeyboardBuilder {
    fn default() -> Self {
        Self {
            layout: KeyboardLayout::qwerty(),
            release_handlers_on_close: false,
        }
    }
}

impl KeyboardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, layout: KeyboardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Drop the installed handlers when the keyboard closes.
    ///
    /// Off by default: handlers stay installed across `close` until the
    /// next `open` replaces them.
    pub fn release_handlers_on_close(mut self, release: bool) -> Self {
        self.release_handlers_on_close = release;
        self
    }

    pub fn config(self, config: &KeyboardConfig) -> Self {
        self.release_handlers_on_close(config.release_handlers_on_close)
    }

    pub fn build<S: Surface>(self, mut surface: S) -> Keyboard<S> {
        surface.mount(&self.layout);
        let faces = self
            .layout
            .keys()
            .iter()
            .map(|k| k.face().to_string())
            .collect();
        debug!("keyboard mounted with {} keys", self.layout.len());
        Keyboard {
            layout: self.layout,
            faces,
            state: KeyboardState::new(),
            handlers: Handlers::default(),
            fields: Vec::new(),
            surface,
            release_handlers_on_close: self.release_handlers_on_close,
        }
    }
}

impl<S: Surface> Keyboard<S> {
    pub fn new(surface: S) -> Self {
        KeyboardBuilder::default().build(surface)
    }

    /// Show the keyboard for a new caller.
    ///
    /// Replaces any previously installed handlers; either may be `None`.
    pub fn open(
        &mut self,
        initial_value: &str,
        on_input: Option<InputHandler>,
        on_close: Option<CloseHandler>,
    ) {
        if self.state.visible {
            debug!("keyboard reopened; previous handlers replaced");
        }
        self.state.open(initial_value);
        self.handlers = Handlers { on_input, on_close };
        self.surface.show();
        debug!("keyboard opened ({} chars preset)", initial_value.chars().count());
    }

    /// `open` with only an input handler.
    pub fn open_with(&mut self, initial_value: &str, on_input: impl FnMut(&str) + 'static) {
        self.open(initial_value, Some(Box::new(on_input)), None);
    }

    /// Hide the keyboard and clear the current value.
    ///
    /// Caps-lock is kept. Handlers are kept unless the keyboard was built
    /// with `release_handlers_on_close`.
    pub fn close(&mut self) {
        drop(self.close_inner());
    }

    fn close_inner(&mut self) -> Option<Handlers> {
        self.state.close();
        self.surface.hide();
        debug!("keyboard closed");
        self.release_handlers_on_close
            .then(|| std::mem::take(&mut self.handlers))
    }

    /// Actuate the key at `index`.
    pub fn press(&mut self, index: usize) -> Result<Signal, KeyboardError> {
        let role = self
            .layout
            .get(index)
            .map(|k| k.role)
            .ok_or(KeyboardError::NoSuchKey(index))?;
        trace!("key {index} ({role:?}) actuated");
        Ok(Self::action(role)(self, index))
    }

    /// Actuate the first key whose layout label is `label`.
    pub fn press_label(&mut self, label: &str) -> Result<Signal, KeyboardError> {
        let index = self
            .layout
            .position(label)
            .ok_or_else(|| KeyboardError::NoSuchLabel(label.to_string()))?;
        self.press(index)
    }

    fn action(role: KeyRole) -> Action<S> {
        match role {
            KeyRole::Literal | KeyRole::Modifier(_) => Self::emit_face,
            KeyRole::Space => Self::emit_space,
            KeyRole::Backspace | KeyRole::Enter | KeyRole::Tab | KeyRole::Arrow(_) => {
                Self::emit_sentinel
            }
            KeyRole::CapsLock => Self::toggle_caps_lock,
            KeyRole::Done => Self::dismiss,
        }
    }

    fn emit(&mut self, value: &str) -> Signal {
        self.state.set_value(value);
        if let Some(on_input) = self.handlers.on_input.as_mut() {
            on_input(&self.state.value);
        }
        Signal::Input(self.state.value.clone())
    }

    fn emit_face(&mut self, index: usize) -> Signal {
        let key = &self.layout.keys()[index];
        let text = if key.icon.is_some() {
            key.label.clone()
        } else {
            self.faces[index].clone()
        };
        self.emit(&text)
    }

    fn emit_space(&mut self, _index: usize) -> Signal {
        self.emit(" ")
    }

    fn emit_sentinel(&mut self, index: usize) -> Signal {
        let sentinel = self.layout.keys()[index].label.clone();
        self.emit(&sentinel)
    }

    fn toggle_caps_lock(&mut self, index: usize) -> Signal {
        let signal = self.emit_sentinel(index);
        let engaged = self.state.toggle_caps_lock();
        for (i, key) in self.layout.keys().iter().enumerate() {
            if key.icon.is_some() {
                continue;
            }
            if let Some(face) = state::relabel(&self.faces[i], engaged) {
                self.surface.relabel(i, &face);
                self.faces[i] = face;
            }
        }
        self.surface.set_active(index, engaged);
        debug!("caps lock {}", if engaged { "engaged" } else { "released" });
        signal
    }

    fn dismiss(&mut self, _index: usize) -> Signal {
        let mut handlers = self.close_inner();
        let on_close = match handlers.as_mut() {
            Some(released) => released.on_close.as_mut(),
            None => self.handlers.on_close.as_mut(),
        };
        if let Some(on_close) = on_close {
            on_close();
        }
        Signal::Close
    }

    /// Register a host field for focus-driven input.
    ///
    /// Fields that do not opt in through [`HostField::uses_keyboard`] are
    /// skipped and yield `None`.
    pub fn bind_field<F: HostField + 'static>(&mut self, field: Rc<RefCell<F>>) -> Option<FieldId> {
        if !field.borrow().uses_keyboard() {
            return None;
        }
        let id = FieldId(self.fields.len());
        self.fields.push(field);
        Some(id)
    }

    /// Register every opted-in field in `fields`.
    pub fn bind<F, I>(&mut self, fields: I) -> Vec<FieldId>
    where
        F: HostField + 'static,
        I: IntoIterator<Item = Rc<RefCell<F>>>,
    {
        fields
            .into_iter()
            .filter_map(|field| self.bind_field(field))
            .collect()
    }

    /// Focus listener for a bound field.
    ///
    /// Opens the keyboard with the field's text and writes every reported
    /// value straight into the field, replacing its contents.
    pub fn focus(&mut self, id: FieldId) -> Result<(), KeyboardError> {
        let field = self
            .fields
            .get(id.0)
            .cloned()
            .ok_or(KeyboardError::NoSuchField(id))?;
        let initial = field.borrow().value();
        self.open_with(&initial, move |value| field.borrow_mut().set_value(value));
        Ok(())
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn caps_lock(&self) -> bool {
        self.state.caps_lock
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn state(&self) -> &KeyboardState {
        &self.state
    }

    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    /// Text currently drawn on the key at `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.faces.get(index).map(String::as_str)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn has_input_handler(&self) -> bool {
        self.handlers.on_input.is_some()
    }

    pub fn has_close_handler(&self) -> bool {
        self.handlers.on_close.is_some()
    }

    pub fn snapshot(&self) -> KeyboardSnapshot {
        KeyboardSnapshot {
            value: self.state.value.clone(),
            caps_lock: self.state.caps_lock,
            visible: self.state.visible,
            has_input_handler: self.has_input_handler(),
            has_close_handler: self.has_close_handler(),
        }
    }
}
