#![cfg(target_arch = "wasm32")]
use crate::config::PageConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod nav;
mod parallax;
mod reveal;
mod surface;
mod tilt;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-motion starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(run_init);
        _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init(PageConfig::default()) {
        log::error!("init error: {:?}", e);
    }
}

fn init(config: PageConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduced_motion = dom::prefers_reduced_motion(&window);
    if reduced_motion {
        log::debug!("[motion] reduced motion requested; tilt and parallax disabled");
    }

    // Header and navigation are state, not animation: always wired.
    events::wire_sticky_header(&window, &document, config.header_threshold_px);
    if let Some((state, elements)) = events::wire_nav_drawer(&document) {
        events::wire_escape_closes_nav(&document, state, elements);
    }

    let reveals = events::wire_reveals(
        &window,
        &document,
        config.reveal_threshold,
        config.reveal_stagger_ms,
        reduced_motion,
    );
    let cards = events::wire_tilt_cards(&document, config.tilt, reduced_motion);
    let layers = events::wire_parallax(&window, &document, config.parallax, reduced_motion);

    log::info!(
        "[motion] reveals={} tilt_cards={} parallax_layers={} reduced_motion={}",
        reveals,
        cards,
        layers,
        reduced_motion
    );
    Ok(())
}
