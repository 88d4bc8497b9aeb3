use crate::layout::KeyboardLayout;

/// Rendering adapter supplied by the host platform.
///
/// The keyboard owns no UI; it tells the surface what changed and the
/// surface draws it. Indices refer to positions in the mounted layout.
pub trait Surface {
    /// Build the key tree once. The surface starts hidden.
    fn mount(&mut self, layout: &KeyboardLayout);

    fn show(&mut self);
    fn hide(&mut self);

    /// Replace the text drawn on a plain-text key.
    fn relabel(&mut self, index: usize, label: &str);

    /// Pressed/active appearance of a toggle key.
    fn set_active(&mut self, index: usize, active: bool);
}

/// A host input element that delegates text entry to the keyboard.
pub trait HostField {
    fn value(&self) -> String;

    /// Overwrite the whole field.
    fn set_value(&mut self, value: &str);

    /// Whether the element is tagged for on-screen keyboard input.
    fn uses_keyboard(&self) -> bool {
        true
    }
}

/// A surface that draws nothing. Useful for headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn mount(&mut self, _layout: &KeyboardLayout) {}
    fn show(&mut self) {}
    fn hide(&mut self) {}
    fn relabel(&mut self, _index: usize, _label: &str) {}
    fn set_active(&mut self, _index: usize, _active: bool) {}
}
