use crate::config::TiltParams;
use crate::constants::CARD_SELECTOR;
use crate::dom::{self, ElementSurface, RafScheduler};
use crate::input;
use crate::surface::Surface;
use crate::tilt::{self, TiltCard};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

type Card = TiltCard<RafScheduler, ElementSurface>;

/// Attach the damped tilt to every card. Returns how many cards were wired;
/// zero under reduced motion.
pub fn wire_tilt_cards(document: &web::Document, params: TiltParams, reduced_motion: bool) -> usize {
    let surfaces: Vec<ElementSurface> = dom::query_all(document, CARD_SELECTOR)
        .into_iter()
        .map(ElementSurface)
        .collect();
    let cards = tilt::tilt_cards(surfaces, &RafScheduler, params, reduced_motion);
    for card in &cards {
        wire_card(card);
    }
    cards.len()
}

fn wire_card(card: &Rc<Card>) {
    let target: &web::EventTarget = card.surface().0.as_ref();

    let card_move = Rc::clone(card);
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let uv = input::normalized_pointer(
            ev.client_x() as f32,
            ev.client_y() as f32,
            card_move.surface().bounds(),
        );
        card_move.pointer_move(uv);
    }) as Box<dyn FnMut(web::PointerEvent)>);
    dom::listen(target, "pointermove", on_move);

    let card_leave = Rc::clone(card);
    let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        card_leave.pointer_leave();
    }) as Box<dyn FnMut(web::PointerEvent)>);
    dom::listen(target, "pointerleave", on_leave);
}
