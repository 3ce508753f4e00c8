#![cfg(target_arch = "wasm32")]
use crate::core::Route;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod card;
mod constants;
mod content;
mod core;
mod dom;
mod events;
mod frame;
mod pages;
mod router;
mod style;
mod timer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let root: web::Element = match document.get_element_by_id(constants::APP_ROOT_ID) {
        Some(el) => el,
        None => document
            .body()
            .ok_or_else(|| anyhow::anyhow!("missing #{} and <body>", constants::APP_ROOT_ID))?
            .into(),
    };

    style::install(&document)?;

    let pathname = window
        .location()
        .pathname()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let router = router::Router::new(document, root, &pathname);
    router::wire_popstate(&router);

    let route = Route::from_path(&pathname);
    log::info!("[router] initial path {} -> {:?}", pathname, route);
    router.borrow_mut().show(route)?;
    Ok(())
}
