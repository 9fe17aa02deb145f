use crate::dom;
use crate::events::nav::NavElements;
use crate::input;
use crate::nav::NavDrawer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Escape closes the mobile drawer when it is open.
pub fn wire_escape_closes_nav(
    document: &web::Document,
    state: Rc<RefCell<NavDrawer>>,
    elements: Rc<NavElements>,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if !input::is_escape_key(&ev.key()) {
            return;
        }
        if state.borrow_mut().close() {
            elements.apply(&state.borrow());
            _ = elements.toggle.focus();
        }
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    dom::listen(document.as_ref(), "keydown", closure);
}
