use std::cell::RefCell;
use std::rc::Rc;

use softboard::{KeyboardLayout, Surface};

/// Shared, ordered record of what happened, for ordering assertions.
pub type EventLog = Rc<RefCell<Vec<String>>>;

#[derive(Debug, Default, Clone)]
pub struct MockSurface {
    pub labels: Vec<String>,
    pub active: Vec<bool>,
    pub visible: bool,
    pub mounts: usize,
    pub relabels: usize,
    log: EventLog,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: EventLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn log(&self) -> EventLog {
        Rc::clone(&self.log)
    }

    fn record(&self, entry: impl Into<String>) {
        self.log.borrow_mut().push(entry.into());
    }
}

impl Surface for MockSurface {
    fn mount(&mut self, layout: &KeyboardLayout) {
        self.mounts += 1;
        self.labels = layout.keys().iter().map(|k| k.face().to_string()).collect();
        self.active = vec![false; layout.len()];
        self.record("mount");
    }

    fn show(&mut self) {
        self.visible = true;
        self.record("show");
    }

    fn hide(&mut self) {
        self.visible = false;
        self.record("hide");
    }

    fn relabel(&mut self, index: usize, label: &str) {
        self.relabels += 1;
        self.labels[index] = label.to_string();
    }

    fn set_active(&mut self, index: usize, active: bool) {
        self.active[index] = active;
        self.record(format!("active {index} {active}"));
    }
}
