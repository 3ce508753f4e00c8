use crate::card::CardSurface;
use crate::content::{self, HERO_SUBTITLE, HERO_TITLE};
use crate::core::grid::{cell_count, cell_pulse_duration};
use crate::core::CardParams;
use crate::dom;
use web_sys as web;

pub struct AboutPage {
    _card: CardSurface,
    root: web::HtmlElement,
}

impl AboutPage {
    pub fn mount(document: &web::Document, parent: &web::Element) -> anyhow::Result<Self> {
        let markup = format!(
            "<div class='grid-bg'>{grid}</div>\
             <div class='vignette'></div>\
             <section class='stage'>\
               <div class='hero'><h1>{title}</h1><p>{subtitle}</p></div>\
               <div class='card-slot'></div>\
             </section>\
             <footer>{footer}</footer>",
            grid = background_cells(),
            title = HERO_TITLE,
            subtitle = HERO_SUBTITLE,
            footer = content::footer_text(current_year()),
        );
        let root = dom::create_html(document, "main", "page about", &markup)?;
        dom::append(parent, &root)?;

        let slot = dom::query_html(&root, ".card-slot")?;
        let card = CardSurface::mount(document, &slot, CardParams::default())?;
        Ok(Self { _card: card, root })
    }
}

impl Drop for AboutPage {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn background_cells() -> String {
    (0..cell_count())
        .map(|i| {
            format!(
                "<div class='grid-cell' style='animation-duration: {:.2}s'></div>",
                cell_pulse_duration(i)
            )
        })
        .collect()
}

#[inline]
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
