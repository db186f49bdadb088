use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn observe_layout_installs_nothing_outside_browser() {
    let calls = Rc::new(Cell::new(0));
    let calls_for_cb = Rc::clone(&calls);
    let watch = observe_layout(768, move |_| calls_for_cb.set(calls_for_cb.get() + 1));
    assert!(watch.is_none());
    assert_eq!(calls.get(), 0);
}
