use crate::constants::{
    BODY_NAV_OPEN_CLASS, NAV_BACKDROP_SELECTOR, NAV_DRAWER_SELECTOR, NAV_TOGGLE_SELECTOR, OPEN_CLASS,
};
use crate::dom;
use crate::nav::NavDrawer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Elements that make up the mobile navigation. The backdrop is optional.
#[derive(Clone)]
pub struct NavElements {
    pub toggle: web::HtmlElement,
    pub drawer: web::HtmlElement,
    pub backdrop: Option<web::HtmlElement>,
    pub body: Option<web::HtmlElement>,
}

impl NavElements {
    pub fn find(document: &web::Document) -> Option<Self> {
        Some(Self {
            toggle: dom::query_one(document, NAV_TOGGLE_SELECTOR)?,
            drawer: dom::query_one(document, NAV_DRAWER_SELECTOR)?,
            backdrop: dom::query_one(document, NAV_BACKDROP_SELECTOR),
            body: document.body(),
        })
    }

    /// Reflect `state` onto the DOM.
    pub fn apply(&self, state: &NavDrawer) {
        let open = state.is_open();
        dom::set_class(&self.drawer, OPEN_CLASS, open);
        if let Some(backdrop) = &self.backdrop {
            dom::set_class(backdrop, OPEN_CLASS, open);
        }
        if let Some(body) = &self.body {
            dom::set_class(body, BODY_NAV_OPEN_CLASS, open);
        }
        _ = self.toggle.set_attribute("aria-expanded", state.aria_expanded());
    }
}

/// Wire the toggle, backdrop and drawer links. Returns the shared drawer
/// state so other handlers (Escape) can close it, or `None` when the page has
/// no mobile navigation.
pub fn wire_nav_drawer(document: &web::Document) -> Option<(Rc<RefCell<NavDrawer>>, Rc<NavElements>)> {
    let Some(elements) = NavElements::find(document) else {
        log::debug!("[nav] no toggle/drawer on page");
        return None;
    };
    let elements = Rc::new(elements);
    let state = Rc::new(RefCell::new(NavDrawer::default()));
    elements.apply(&state.borrow());

    {
        let state = state.clone();
        let els = elements.clone();
        let on_toggle = Closure::wrap(Box::new(move || {
            state.borrow_mut().toggle();
            els.apply(&state.borrow());
        }) as Box<dyn FnMut()>);
        dom::listen(elements.toggle.as_ref(), "click", on_toggle);
    }

    let mut closers: Vec<web::HtmlElement> = dom::query_all_within(&elements.drawer, "a");
    if let Some(backdrop) = &elements.backdrop {
        closers.push(backdrop.clone());
    }
    for el in closers {
        let state = state.clone();
        let els = elements.clone();
        let on_close = Closure::wrap(Box::new(move || {
            if state.borrow_mut().close() {
                els.apply(&state.borrow());
            }
        }) as Box<dyn FnMut()>);
        dom::listen(el.as_ref(), "click", on_close);
    }

    Some((state, elements))
}
