use crate::constants::REDUCED_MOTION_QUERY;
use crate::frame::{FrameCallback, FrameHandle, FrameScheduler};
use crate::surface::{Bounds, Surface, Viewport};
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector` that are `HtmlElement`s; an invalid
/// selector yields nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_all_within(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Attach `closure` for the lifetime of the page.
pub fn listen<T>(target: &web::EventTarget, event: &str, closure: Closure<T>)
where
    T: ?Sized + WasmClosure,
{
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Frame scheduler backed by `requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        let Some(window) = web::window() else {
            log::warn!("[frame] no window; frame dropped");
            return None;
        };
        let cb = Closure::once_into_js(move || callback());
        match window.request_animation_frame(cb.unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }
}

/// An element whose inline `transform` we drive.
#[derive(Clone)]
pub struct ElementSurface(pub web::HtmlElement);

impl Surface for ElementSurface {
    fn bounds(&self) -> Bounds {
        let rect = self.0.get_bounding_client_rect();
        Bounds {
            left: rect.left() as f32,
            top: rect.top() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        }
    }

    fn set_transform(&self, css: &str) {
        _ = self.0.style().set_property("transform", css);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn height(&self) -> f32 {
        web::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
    }
}
