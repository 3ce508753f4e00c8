use crate::core::CardState;
use crate::dom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Writes the card's transforms to the DOM, at most once per animation frame.
pub struct CardFrame {
    pub state: Rc<RefCell<CardState>>,
    pub surface: web::HtmlElement,
    pub tilt_layer: web::HtmlElement,
    pub flip_layer: web::HtmlElement,
    pub last_instant: Instant,
}

impl CardFrame {
    /// Always asks for another frame; the card keeps floating while mounted.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut state = self.state.borrow_mut();
        if let Some(face) = state.advance(dt) {
            log::debug!("[card] flip settled showing {:?}", face);
        }
        if !state.take_dirty() {
            return true;
        }

        dom::set_style(&self.tilt_layer, "transform", &state.outer_transform());
        dom::set_style(&self.flip_layer, "transform", &state.inner_transform());
        let pressed = if state.flip.is_flipped { "true" } else { "false" };
        _ = self.surface.set_attribute("aria-pressed", pressed);
        true
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that stops when dropped, or once the
/// callback returns `false`.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

pub fn start_loop(mut on_frame: impl FnMut() -> bool + 'static) -> anyhow::Result<FrameLoop> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None::<i32>));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !on_frame() {
            return;
        }
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                pending_tick.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }
    }) as Box<dyn FnMut()>));

    let first = match tick.borrow().as_ref() {
        Some(cb) => window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?,
        None => return Err(anyhow::anyhow!("frame callback missing")),
    };
    pending.set(Some(first));
    Ok(FrameLoop { tick, pending })
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(handle), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
        // releases the closure and the Rc cycle through `tick_clone`
        self.tick.borrow_mut().take();
    }
}
