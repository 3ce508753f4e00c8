use crate::core::{activation_prevents_default, is_activation_key, CardState};
use crate::dom::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn handle_card_keydown(ev: &web::KeyboardEvent, state: &Rc<RefCell<CardState>>) {
    let key = ev.key();
    if !is_activation_key(&key) {
        return;
    }
    if activation_prevents_default(&key) {
        ev.prevent_default();
    }
    let flipped = state.borrow_mut().on_activate();
    log::info!("[card] key {:?} flipped={}", key, flipped);
}

/// Keyboard activation for the focused card.
pub fn wire_card_keydown(
    surface: &web::HtmlElement,
    state: &Rc<RefCell<CardState>>,
) -> anyhow::Result<EventListener> {
    let state = state.clone();
    EventListener::new(surface, "keydown", move |ev: web::KeyboardEvent| {
        handle_card_keydown(&ev, &state);
    })
}
