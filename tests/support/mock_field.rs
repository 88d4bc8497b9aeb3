use std::cell::RefCell;
use std::rc::Rc;

use softboard::HostField;

#[derive(Debug, Default, Clone)]
pub struct MockField {
    pub text: String,
    pub tagged: bool,
    pub writes: usize,
}

impl MockField {
    pub fn tagged(text: &str) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            text: text.to_string(),
            tagged: true,
            writes: 0,
        }))
    }

    pub fn untagged(text: &str) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            text: text.to_string(),
            tagged: false,
            writes: 0,
        }))
    }
}

impl HostField for MockField {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.text = value.to_string();
        self.writes += 1;
    }

    fn uses_keyboard(&self) -> bool {
        self.tagged
    }
}
