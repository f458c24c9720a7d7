use crate::constants::TIMELINE_REVEAL_THRESHOLD;
use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Reveal `.timeline-item` entries as they scroll into view. Each item is
/// revealed at most once; after tagging it the observer lets go of it.
pub fn init(document: &web::Document) {
    let items = match dom::query_all(document, ".timeline-item") {
        Some(list) if list.length() > 0 => list,
        _ => return,
    };

    let callback = wasm_bindgen::closure::Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("animate");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(TIMELINE_REVEAL_THRESHOLD));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[timeline] IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();

    dom::for_each_element(&items, |el| observer.observe(&el));
}
