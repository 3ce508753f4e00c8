use crate::content::LOADING_TEXT;
use crate::dom;
use web_sys as web;

pub struct LoadingPage {
    root: web::HtmlElement,
}

impl LoadingPage {
    pub fn mount(document: &web::Document, parent: &web::Element) -> anyhow::Result<Self> {
        let root = dom::create_html(document, "main", "page loading", LOADING_TEXT)?;
        dom::append(parent, &root)?;
        Ok(Self { root })
    }
}

impl Drop for LoadingPage {
    fn drop(&mut self) {
        self.root.remove();
    }
}
