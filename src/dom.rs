use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Run `f` over every Element in a NodeList, skipping non-element nodes.
pub fn for_each_element(list: &web::NodeList, mut f: impl FnMut(web::Element)) {
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<web::Element>() {
                f(el);
            }
        }
    }
}

pub fn query_all(document: &web::Document, selector: &str) -> Option<web::NodeList> {
    document.query_selector_all(selector).ok()
}

#[inline]
pub fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Lock or restore body scrolling while the lightbox is open.
pub fn set_body_scroll_locked(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}
