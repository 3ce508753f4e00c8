use crate::core::Route;
use web_sys as web;

mod about;
mod loading;
mod welcome;

pub use about::AboutPage;
pub use loading::LoadingPage;
pub use welcome::WelcomePage;

/// Whichever view is currently in the document. Dropping it tears the view
/// down along with its timers and listeners.
pub enum Page {
    Loading(LoadingPage),
    Welcome(WelcomePage),
    About(AboutPage),
}

impl Page {
    pub fn mount(route: Route, document: &web::Document, root: &web::Element) -> anyhow::Result<Self> {
        Ok(match route {
            Route::Loading => Page::Loading(LoadingPage::mount(document, root)?),
            Route::Welcome => Page::Welcome(WelcomePage::mount(document, root)?),
            Route::About => Page::About(AboutPage::mount(document, root)?),
        })
    }
}
