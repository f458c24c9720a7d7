use crate::dom;
use crate::links;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) {
    wire_menu_toggle(document);
    highlight_current_link(document);
}

/// `#nav-toggle` flips the `active` class on itself and the menu; the
/// stylesheet owns what that looks like.
fn wire_menu_toggle(document: &web::Document) {
    let toggle = document.get_element_by_id("nav-toggle");
    let menu = document.get_element_by_id("nav-menu");
    if let (Some(toggle), Some(menu)) = (toggle, menu) {
        let toggle_c = toggle.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let _ = menu.class_list().toggle("active");
            let _ = toggle_c.class_list().toggle("active");
        }) as Box<dyn FnMut()>);
        let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Mark the nav link whose href names the current page; clear the mark on
/// the rest so stale server-rendered state cannot linger.
fn highlight_current_link(document: &web::Document) {
    let pathname = web::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let page = links::page_name(&pathname).to_owned();

    if let Some(nav_links) = dom::query_all(document, ".nav-link") {
        dom::for_each_element(&nav_links, |link| {
            let href = link.get_attribute("href").unwrap_or_default();
            if links::link_is_current(&href, &page) {
                let _ = link.class_list().add_1("active");
            } else {
                let _ = link.class_list().remove_1("active");
            }
        });
    }
}
