//! GUI demo using eframe/egui.
//!
//! Two text fields are bound to the keyboard; focusing one opens the
//! keyboard for it and every key overwrites the field, as the web console
//! does. Run with: cargo run --example egui_keyboard

use eframe::egui;
use softboard::{FieldId, HostField, Keyboard, KeyboardLayout, Signal, Surface};
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

/// Key faces as egui buttons
#[derive(Default)]
struct ButtonSurface {
    faces: Vec<String>,
    wide: Vec<bool>,
    active: Vec<bool>,
    rows: Vec<Range<usize>>,
    visible: bool,
}

impl Surface for ButtonSurface {
    fn mount(&mut self, layout: &KeyboardLayout) {
        self.faces = layout
            .keys()
            .iter()
            .map(|k| match k.icon {
                Some(icon) => icon.symbol().to_string(),
                None => k.label.clone(),
            })
            .collect();
        self.wide = layout.keys().iter().map(|k| k.is_wide()).collect();
        self.active = vec![false; layout.len()];
        self.rows = layout.rows();
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn relabel(&mut self, index: usize, label: &str) {
        self.faces[index] = label.to_string();
    }

    fn set_active(&mut self, index: usize, active: bool) {
        self.active[index] = active;
    }
}

/// A text field tagged for keyboard input
struct TextField {
    text: String,
}

impl HostField for TextField {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.text = value.to_string();
    }
}

struct KeyboardApp {
    keyboard: Keyboard<ButtonSurface>,
    fields: Vec<(&'static str, Rc<RefCell<TextField>>, FieldId)>,
    last: String,
}

impl Default for KeyboardApp {
    fn default() -> Self {
        let mut keyboard = Keyboard::new(ButtonSurface::default());
        let named = [("hostname", "target"), ("command", "")];
        let fields: Vec<_> = named
            .iter()
            .map(|(name, text)| {
                let field = Rc::new(RefCell::new(TextField {
                    text: text.to_string(),
                }));
                (*name, field)
            })
            .collect();
        let ids = keyboard.bind(fields.iter().map(|(_, f)| Rc::clone(f)));
        let fields = fields
            .into_iter()
            .zip(ids)
            .map(|((name, field), id)| (name, field, id))
            .collect();
        Self {
            keyboard,
            fields,
            last: String::new(),
        }
    }
}

impl eframe::App for KeyboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("softboard demo");

            let mut focused = None;
            for (name, field, id) in &self.fields {
                ui.horizontal(|ui| {
                    ui.label(*name);
                    let mut field = field.borrow_mut();
                    if ui.text_edit_singleline(&mut field.text).gained_focus() {
                        focused = Some(*id);
                    }
                });
            }
            if let Some(id) = focused {
                let _ = self.keyboard.focus(id);
            }

            ui.label(format!("last key: {:?}", self.last));
            ui.separator();

            let surface = self.keyboard.surface();
            if !surface.visible {
                return;
            }
            let mut pressed = None;
            for row in surface.rows.clone() {
                ui.horizontal(|ui| {
                    for index in row {
                        let width = if surface.wide[index] { 72.0 } else { 36.0 };
                        let button = egui::Button::new(surface.faces[index].as_str())
                            .selected(surface.active[index])
                            .min_size(egui::vec2(width, 28.0));
                        if ui.add(button).clicked() {
                            pressed = Some(index);
                        }
                    }
                });
            }
            if let Some(index) = pressed {
                match self.keyboard.press(index) {
                    Ok(Signal::Input(v)) => self.last = v,
                    Ok(Signal::Close) => self.last = "done".to_string(),
                    Err(e) => self.last = e.to_string(),
                }
            }
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "softboard GUI Demo",
        options,
        Box::new(|_cc| Box::<KeyboardApp>::default()),
    )
}
