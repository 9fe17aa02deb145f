use crate::config::{ParallaxConfig, ParallaxParams};
use crate::constants::{
    HEADER_SELECTOR, PARALLAX_SELECTOR, PARALLAX_STRENGTH_ATTR, PARALLAX_ZOOM_CLASS, SCROLLED_CLASS,
};
use crate::dom::{self, ElementSurface, RafScheduler, WindowViewport};
use crate::nav;
use crate::parallax::{ParallaxLayer, ScrollScheduler};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Toggle the condensed header style on scroll. Returns `false` if the page
/// has no header.
pub fn wire_sticky_header(window: &web::Window, document: &web::Document, threshold_px: f64) -> bool {
    let Some(header) = dom::query_one(document, HEADER_SELECTOR) else {
        log::debug!("[header] no {} on page", HEADER_SELECTOR);
        return false;
    };
    let sync = move |w: &web::Window| {
        let y = w.scroll_y().unwrap_or(0.0);
        dom::set_class(&header, SCROLLED_CLASS, nav::header_is_scrolled(y, threshold_px));
    };
    sync(window);

    let window_cb = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || sync(&window_cb)) as Box<dyn FnMut()>);
    dom::listen(window.as_ref(), "scroll", on_scroll);
    true
}

/// Register every `[data-parallax]` element and drive them from scroll and
/// resize. Returns the number of layers; zero means nothing was attached.
pub fn wire_parallax(
    window: &web::Window,
    document: &web::Document,
    params: ParallaxParams,
    reduced_motion: bool,
) -> usize {
    let layers: Vec<ParallaxLayer<ElementSurface>> = dom::query_all(document, PARALLAX_SELECTOR)
        .into_iter()
        .map(|el| {
            let config = ParallaxConfig::from_attributes(
                el.get_attribute(PARALLAX_STRENGTH_ATTR).as_deref(),
                el.class_list().contains(PARALLAX_ZOOM_CLASS),
            );
            ParallaxLayer {
                surface: ElementSurface(el),
                config,
            }
        })
        .collect();

    let Some(scheduler) =
        ScrollScheduler::activate(layers, RafScheduler, WindowViewport, params, reduced_motion)
    else {
        return 0;
    };

    for event in ["scroll", "resize"] {
        let s = Rc::clone(&scheduler);
        let cb = Closure::wrap(Box::new(move || s.request_update()) as Box<dyn FnMut()>);
        dom::listen(window.as_ref(), event, cb);
    }
    scheduler.layers().len()
}
