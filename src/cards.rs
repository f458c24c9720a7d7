use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Flip-card messages: toggle on click, and on Enter/Space for keyboard
/// users (the markup is expected to make the cards focusable).
pub fn init(document: &web::Document) {
    let cards = match dom::query_all(document, ".message-card") {
        Some(list) => list,
        None => return,
    };

    dom::for_each_element(&cards, |card| {
        {
            let card_click = card.clone();
            let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
                let _ = card_click.class_list().toggle("flipped");
            }) as Box<dyn FnMut()>);
            let _ =
                card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let card_key = card.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let key = ev.key();
                if key == "Enter" || key == " " {
                    ev.prevent_default();
                    let _ = card_key.class_list().toggle("flipped");
                }
            }) as Box<dyn FnMut(_)>);
        let _ = card.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    });
}
