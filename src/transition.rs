use crate::constants::TRANSITION_NAV_DELAY_MS;
use crate::hearts::FieldHandle;
use crate::links;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Faux page transitions: intercept internal link activation, fade the
/// `#page-transition` overlay in, and navigate after a short delay. The
/// hearts loop is stopped before leaving so no orphaned frames run during
/// the fade.
pub fn init(document: &web::Document, hearts: Option<FieldHandle>) {
    let overlay = match document
        .get_element_by_id("page-transition")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        Some(el) => el,
        None => return,
    };

    // The module loads after the page has rendered; start hidden.
    set_overlay_visible(&overlay, false);

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let link = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("a").ok().flatten());
        let href = match link.and_then(|a| a.get_attribute("href")) {
            Some(h) => h,
            None => return,
        };
        if !links::is_internal_href(&href) {
            return;
        }

        ev.prevent_default();
        set_overlay_visible(&overlay, true);
        if let Some(h) = &hearts {
            h.stop();
        }
        schedule_navigation(href);
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn set_overlay_visible(overlay: &web::HtmlElement, visible: bool) {
    let style = overlay.style();
    let _ = style.set_property("opacity", if visible { "1" } else { "0" });
    let _ = style.set_property("pointer-events", if visible { "auto" } else { "none" });
}

fn schedule_navigation(href: String) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            if let Err(e) = window.location().set_href(&href) {
                log::error!("[transition] navigation failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TRANSITION_NAV_DELAY_MS,
        );
    }
    closure.forget();
}
