use crate::core::{base_for, AutoNav, Route, WELCOME_TOTAL_MS};
use crate::pages::Page;
use crate::timer::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type SharedRouter = Rc<RefCell<Router>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum History {
    Push,
    Replace,
    /// The browser already moved (back/forward).
    Keep,
}

struct Mounted {
    route: Route,
    // cancelled with the page
    _auto_nav: Option<Timeout>,
    _page: Page,
}

pub struct Router {
    document: web::Document,
    root: web::Element,
    base: &'static str,
    current: Option<Mounted>,
    this: Weak<RefCell<Router>>,
}

impl Router {
    pub fn new(document: web::Document, root: web::Element, pathname: &str) -> SharedRouter {
        let router = Rc::new(RefCell::new(Router {
            document,
            root,
            base: base_for(pathname),
            current: None,
            this: Weak::new(),
        }));
        router.borrow_mut().this = Rc::downgrade(&router);
        router
    }

    pub fn current_route(&self) -> Option<Route> {
        self.current.as_ref().map(|m| m.route)
    }

    /// Replace the mounted view with `route`.
    pub fn show(&mut self, route: Route) -> anyhow::Result<()> {
        if let Some(old) = self.current.take() {
            log::info!("[router] leaving {:?}", old.route);
        }
        let page = Page::mount(route, &self.document, &self.root)?;
        let auto_nav = match route.auto_next() {
            Some((next, AutoNav::Replace)) => {
                request(&self.this, next, History::Replace);
                None
            }
            Some((next, AutoNav::PushAfterSplash)) => {
                let this = self.this.clone();
                Some(Timeout::new(WELCOME_TOTAL_MS, move || {
                    request(&this, next, History::Push);
                })?)
            }
            None => None,
        };
        log::info!("[router] showing {:?}", route);
        self.current = Some(Mounted {
            route,
            _auto_nav: auto_nav,
            _page: page,
        });
        Ok(())
    }

    fn go(&mut self, route: Route, history: History) -> anyhow::Result<()> {
        if self.current_route() == Some(route) {
            return Ok(());
        }
        let href = route.href(self.base);
        if let Some(window) = web::window() {
            let h = window
                .history()
                .map_err(|e| anyhow::anyhow!("history: {:?}", e))?;
            let res = match history {
                History::Push => h.push_state_with_url(&JsValue::NULL, "", Some(&href)),
                History::Replace => h.replace_state_with_url(&JsValue::NULL, "", Some(&href)),
                History::Keep => Ok(()),
            };
            res.map_err(|e| anyhow::anyhow!("history update {}: {:?}", href, e))?;
        }
        self.show(route)
    }
}

/// Navigate after the current event handler returns, so a page is never torn
/// down from inside one of its own callbacks.
pub fn request(router: &Weak<RefCell<Router>>, route: Route, history: History) {
    let router = router.clone();
    spawn_local(async move {
        let Some(router) = router.upgrade() else {
            return;
        };
        if let Err(e) = router.borrow_mut().go(route, history) {
            log::error!("[router] navigation to {:?} failed: {:?}", route, e);
        }
    });
}

/// Follow back/forward for the rest of the session.
pub fn wire_popstate(router: &SharedRouter) {
    if let Some(window) = web::window() {
        let weak = Rc::downgrade(router);
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            let path = web::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();
            request(&weak, Route::from_path(&path), History::Keep);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
