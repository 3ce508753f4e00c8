use crate::constants::{CARD_FLIP_CLASS, CARD_SURFACE_CLASS, CARD_TILT_CLASS};
use crate::content;
use crate::core::{CardParams, CardState};
use crate::dom::{self, EventListener};
use crate::events;
use crate::frame::{self, CardFrame, FrameLoop};
use crate::timer::Interval;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The interactive flip card while it is in the document.
///
/// Listeners, the float sampler and the frame loop are owned here and are
/// released together with the element when the surface is dropped.
pub struct CardSurface {
    surface: web::HtmlElement,
    _listeners: Vec<EventListener>,
    _float: Interval,
    _frame: FrameLoop,
}

impl CardSurface {
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        params: CardParams,
    ) -> anyhow::Result<Self> {
        let surface = build_layers(document)?;
        dom::append(parent, &surface)?;
        let tilt_layer = dom::query_html(&surface, &format!(".{}", CARD_TILT_CLASS))?;
        let flip_layer = dom::query_html(&surface, &format!(".{}", CARD_FLIP_CLASS))?;

        let state = Rc::new(RefCell::new(CardState::new(params)));

        let mut listeners = events::wire_card_pointer(&surface, &state)?;
        listeners.push(events::wire_card_keydown(&surface, &state)?);

        let float_state = state.clone();
        let float = Interval::new(params.float_interval_ms, move || {
            let now_sec = js_sys::Date::now() / 1000.0;
            float_state.borrow_mut().sample_float(now_sec);
        })?;

        let mut card_frame = CardFrame {
            state,
            surface: surface.clone(),
            tilt_layer,
            flip_layer,
            last_instant: Instant::now(),
        };
        let frame_loop = frame::start_loop(move || card_frame.frame())?;

        log::info!("[card] mounted");
        Ok(Self {
            surface,
            _listeners: listeners,
            _float: float,
            _frame: frame_loop,
        })
    }
}

impl Drop for CardSurface {
    fn drop(&mut self) {
        self.surface.remove();
        log::info!("[card] unmounted");
    }
}

fn build_layers(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let markup = content::card_layers_html();
    let surface = dom::create_html(document, "div", CARD_SURFACE_CLASS, &markup)?;
    _ = surface.set_attribute("role", "button");
    _ = surface.set_attribute("aria-pressed", "false");
    surface.set_tab_index(0);
    Ok(surface)
}
