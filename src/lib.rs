#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod cards;
mod clock;
mod constants;
mod countdown;
mod dom;
mod gallery;
mod hearts;
mod lightbox;
mod links;
mod music;
mod nav;
mod particle;
mod timeline;
mod transition;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heartpages-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Wire every widget. Global widgets run on all pages; page-specific ones
/// are gated on their DOM hooks so each widget degrades to a no-op where
/// its markup is absent.
fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    nav::init(&document);
    let hearts = hearts::init(&document);
    music::init(&document);
    transition::init(&document, hearts);

    if has(&document, ".gallery-grid") {
        lightbox::init(&document);
    }
    if has(&document, ".timeline") {
        timeline::init(&document);
    }
    if has(&document, ".message-cards") {
        cards::init(&document);
    }
    if has(&document, ".countdown-container") {
        countdown::init(&document);
    }

    Ok(())
}

#[inline]
fn has(document: &web::Document, selector: &str) -> bool {
    document.query_selector(selector).ok().flatten().is_some()
}
