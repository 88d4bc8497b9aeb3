use std::cell::{Cell, RefCell};
use std::rc::Rc;

use softboard::{Keyboard, KeyboardBuilder, Signal};

mod support;
use support::mock_surface::MockSurface;

#[test]
fn starts_hidden_and_mounted_once() {
    let kb = Keyboard::new(MockSurface::new());
    assert!(!kb.is_visible());
    assert!(!kb.surface().visible);
    assert_eq!(kb.surface().mounts, 1);
    assert_eq!(kb.surface().labels.len(), kb.layout().len());
}

#[test]
fn open_seeds_value_and_shows() {
    let mut kb = Keyboard::new(MockSurface::new());
    kb.open("hello", None, None);
    assert_eq!(kb.value(), "hello");
    assert!(kb.is_visible());
    assert!(kb.surface().visible);
}

#[test]
fn open_then_close_clears_value() {
    let mut kb = Keyboard::new(MockSurface::new());
    kb.open("some text", None, None);
    kb.close();
    assert_eq!(kb.value(), "");
    assert!(!kb.surface().visible);
}

#[test]
fn close_keeps_handlers() {
    let mut kb = Keyboard::new(MockSurface::new());
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    kb.open(
        "",
        Some(Box::new(move |_| counter.set(counter.get() + 1))),
        Some(Box::new(|| {})),
    );
    kb.close();

    assert!(kb.has_input_handler());
    assert!(kb.has_close_handler());

    // Keys still reach the old handler even while hidden
    kb.press_label("x").unwrap();
    assert_eq!(hits.get(), 1);
}

#[test]
fn release_handlers_on_close_drops_them() {
    let mut kb = KeyboardBuilder::new()
        .release_handlers_on_close(true)
        .build(MockSurface::new());
    kb.open("", Some(Box::new(|_| {})), Some(Box::new(|| {})));
    kb.close();
    assert!(!kb.has_input_handler());
    assert!(!kb.has_close_handler());
}

#[test]
fn done_closes_before_notifying() {
    let surface = MockSurface::new();
    let log = surface.log();
    let mut kb = Keyboard::new(surface);

    let close_log = Rc::clone(&log);
    kb.open(
        "abc",
        None,
        Some(Box::new(move || close_log.borrow_mut().push("on_close".to_string()))),
    );

    assert_eq!(kb.press_label("done").unwrap(), Signal::Close);
    assert_eq!(kb.value(), "");
    assert!(!kb.is_visible());

    let log = log.borrow();
    let tail: Vec<&str> = log.iter().rev().take(2).rev().map(String::as_str).collect();
    assert_eq!(tail, vec!["hide", "on_close"]);
}

#[test]
fn done_still_notifies_when_releasing_handlers() {
    let mut kb = KeyboardBuilder::new()
        .release_handlers_on_close(true)
        .build(MockSurface::new());
    let closed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&closed);
    kb.open("", None, Some(Box::new(move || flag.set(true))));

    kb.press_label("done").unwrap();
    assert!(closed.get());
    assert!(!kb.has_close_handler());
}

#[test]
fn done_does_not_call_input_handler() {
    let mut kb = Keyboard::new(MockSurface::new());
    let inputs = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&inputs);
    kb.open_with("", move |v| sink.borrow_mut().push(v.to_string()));
    kb.press_label("done").unwrap();
    assert!(inputs.borrow().is_empty());
}

#[test]
fn reopen_replaces_previous_caller() {
    let mut kb = Keyboard::new(MockSurface::new());
    let first = Rc::new(RefCell::new(Vec::<String>::new()));
    let second = Rc::new(RefCell::new(Vec::<String>::new()));

    let sink = Rc::clone(&first);
    kb.open_with("one", move |v| sink.borrow_mut().push(v.to_string()));
    let sink = Rc::clone(&second);
    kb.open_with("two", move |v| sink.borrow_mut().push(v.to_string()));

    assert_eq!(kb.value(), "two");
    kb.press_label("k").unwrap();
    assert!(first.borrow().is_empty());
    assert_eq!(*second.borrow(), vec!["k"]);
}

#[test]
fn reopen_without_close_handler_clears_old_one() {
    let mut kb = Keyboard::new(MockSurface::new());
    kb.open("", None, Some(Box::new(|| {})));
    kb.open("", None, None);
    assert!(!kb.has_close_handler());
}

#[test]
fn snapshot_reflects_state() {
    let mut kb = Keyboard::new(MockSurface::new());
    kb.open("v", Some(Box::new(|_| {})), None);
    kb.press_label("Caps Lock").unwrap();
    let snap = kb.snapshot();
    assert_eq!(snap.value, "Caps Lock");
    assert!(snap.caps_lock);
    assert!(snap.visible);
    assert!(snap.has_input_handler);
    assert!(!snap.has_close_handler);
}
