use crate::core::{CardState, SurfaceBounds};
use crate::dom::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Bounds of the card in client space, `None` once it has left the document.
#[inline]
pub fn surface_bounds(surface: &web::HtmlElement) -> Option<SurfaceBounds> {
    if !surface.is_connected() {
        return None;
    }
    let rect = surface.get_bounding_client_rect();
    Some(SurfaceBounds::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    ))
}

/// Tilt follows the pointer while it is over the card; a click flips it.
pub fn wire_card_pointer(
    surface: &web::HtmlElement,
    state: &Rc<RefCell<CardState>>,
) -> anyhow::Result<Vec<EventListener>> {
    let move_state = state.clone();
    let move_surface = surface.clone();
    let on_move = EventListener::new(surface, "pointermove", move |ev: web::PointerEvent| {
        let bounds = surface_bounds(&move_surface);
        move_state
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32, bounds);
    })?;

    let leave_state = state.clone();
    let on_leave = EventListener::new(surface, "pointerleave", move |_: web::PointerEvent| {
        leave_state.borrow_mut().on_pointer_leave();
    })?;

    let click_state = state.clone();
    let on_click = EventListener::new(surface, "click", move |_: web::MouseEvent| {
        let flipped = click_state.borrow_mut().on_activate();
        log::info!("[card] click flipped={}", flipped);
    })?;

    Ok(vec![on_move, on_leave, on_click])
}
