use crate::constants::{ACTIVE_CLASS, REVEAL_SELECTOR, STAGGER_SELECTOR};
use crate::dom;
use crate::reveal::{reveal_mode, stagger_delay_ms, RevealMode, STAGGER_VISIBLE_STYLE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn show_stagger_item(item: &web::HtmlElement) {
    let style = item.style();
    for (prop, value) in STAGGER_VISIBLE_STYLE {
        _ = style.set_property(prop, value);
    }
}

/// Mark a section revealed and schedule its staggered children.
fn reveal(window: &web::Window, section: &web::Element, stagger_ms: i32, reduced_motion: bool) {
    dom::set_class(section, ACTIVE_CLASS, true);
    for (i, item) in dom::query_all_within(section, STAGGER_SELECTOR)
        .into_iter()
        .enumerate()
    {
        let delay = stagger_delay_ms(i, stagger_ms, reduced_motion);
        if delay == 0 {
            show_stagger_item(&item);
            continue;
        }
        let cb = Closure::once_into_js(move || show_stagger_item(&item));
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay);
    }
}

fn reveal_all(window: &web::Window, sections: &[web::HtmlElement], stagger_ms: i32) {
    for section in sections {
        reveal(window, section, stagger_ms, true);
    }
}

/// Observe `sections` and reveal each one the first time it scrolls into view.
fn observe_sections(
    window: &web::Window,
    sections: &[web::HtmlElement],
    threshold: f64,
    stagger_ms: i32,
) -> anyhow::Result<()> {
    let window_cb = window.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                reveal(&window_cb, &target, stagger_ms, false);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for section in sections {
        observer.observe(section);
    }
    Ok(())
}

/// Reveal `.reveal` sections the first time they scroll into view. Under
/// reduced motion, or if no observer can be created, every section is
/// revealed at once so content never stays hidden.
pub fn wire_reveals(
    window: &web::Window,
    document: &web::Document,
    threshold: f64,
    stagger_ms: i32,
    reduced_motion: bool,
) -> usize {
    let sections = dom::query_all(document, REVEAL_SELECTOR);
    if sections.is_empty() {
        return 0;
    }
    let observed = !reduced_motion
        && match observe_sections(window, &sections, threshold, stagger_ms) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[reveal] observer unavailable, revealing now: {:?}", e);
                false
            }
        };
    if reveal_mode(reduced_motion, observed) == RevealMode::Immediate {
        reveal_all(window, &sections, stagger_ms);
    }
    sections.len()
}
