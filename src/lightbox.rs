use crate::dom;
use crate::gallery::{action_for_key, GalleryItem, LightboxState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// The overlay elements the controller repaints on every transition.
#[derive(Clone)]
struct View {
    root: web::Element,
    image: web::HtmlImageElement,
    caption: web::Element,
}

#[derive(Clone)]
struct Wiring {
    document: web::Document,
    view: View,
    items: Rc<Vec<GalleryItem>>,
    state: Rc<RefCell<LightboxState>>,
}

/// Wire the gallery lightbox. An empty `.gallery-item` collection attaches
/// no behavior and builds no overlay.
pub fn init(document: &web::Document) {
    let nodes = match dom::query_all(document, ".gallery-item") {
        Some(n) => n,
        None => return,
    };

    // Snapshot the fixed gallery sequence: image URL plus optional caption.
    let mut sources: Vec<web::Element> = Vec::new();
    let mut items: Vec<GalleryItem> = Vec::new();
    dom::for_each_element(&nodes, |el| {
        let img = el
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|n| n.dyn_into::<web::HtmlImageElement>().ok());
        if let Some(img) = img {
            items.push(GalleryItem {
                src: img.src(),
                caption: el.get_attribute("data-caption").unwrap_or_default(),
            });
            sources.push(el);
        }
    });
    if items.is_empty() {
        return;
    }

    let (view, close_el, prev_el, next_el) = match build_overlay(document) {
        Some(parts) => parts,
        None => return,
    };
    log::info!("[lightbox] wired for {} gallery items", items.len());

    let w = Wiring {
        document: document.clone(),
        view,
        items: Rc::new(items),
        state: Rc::new(RefCell::new(LightboxState::new(sources.len()))),
    };

    wire_item_clicks(&w, &sources);
    wire_control(&w, &close_el, |s| s.close());
    wire_control(&w, &prev_el, |s| s.prev());
    wire_control(&w, &next_el, |s| s.next());
    wire_backdrop(&w);
    wire_keyboard(&w);
}

/// Build the singleton overlay and append it to the body. Structure mirrors
/// the page stylesheet's `.lightbox*` hooks.
fn build_overlay(
    document: &web::Document,
) -> Option<(View, web::Element, web::Element, web::Element)> {
    let make = |tag: &str, class: &str| -> Option<web::Element> {
        let el = document.create_element(tag).ok()?;
        el.set_class_name(class);
        Some(el)
    };

    let root = make("div", "lightbox")?;
    let content = make("div", "lightbox-content")?;
    let image = make("img", "lightbox-img")?
        .dyn_into::<web::HtmlImageElement>()
        .ok()?;
    let caption = make("p", "lightbox-caption")?;
    let close_el = make("span", "lightbox-close")?;
    let prev_el = make("span", "lightbox-prev")?;
    let next_el = make("span", "lightbox-next")?;
    close_el.set_text_content(Some("\u{d7}"));
    prev_el.set_text_content(Some("\u{276e}"));
    next_el.set_text_content(Some("\u{276f}"));

    content.append_child(&prev_el).ok()?;
    content.append_child(&image).ok()?;
    content.append_child(&caption).ok()?;
    content.append_child(&next_el).ok()?;
    content.append_child(&close_el).ok()?;
    root.append_child(&content).ok()?;
    document.body()?.append_child(&root).ok()?;

    Some((
        View {
            root,
            image,
            caption,
        },
        close_el,
        prev_el,
        next_el,
    ))
}

/// Mirror the state machine into the overlay: exact item content while
/// open, `active` class, and the body scroll lock.
fn sync(w: &Wiring) {
    match w.state.borrow().current() {
        Some(i) => {
            let item = &w.items[i];
            w.view.image.set_src(&item.src);
            w.view.caption.set_text_content(Some(&item.caption));
            let _ = w.view.root.class_list().add_1("active");
            dom::set_body_scroll_locked(&w.document, true);
        }
        None => {
            let _ = w.view.root.class_list().remove_1("active");
            dom::set_body_scroll_locked(&w.document, false);
        }
    }
}

fn wire_item_clicks(w: &Wiring, sources: &[web::Element]) {
    for (i, el) in sources.iter().enumerate() {
        let w = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if w.state.borrow_mut().open(i) {
                sync(&w);
            }
        }) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_control(w: &Wiring, el: &web::Element, apply: impl Fn(&mut LightboxState) + 'static) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        apply(&mut w.state.borrow_mut());
        sync(&w);
    }) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Clicking the dimmed backdrop (the root itself, not the content panel)
/// closes the overlay.
fn wire_backdrop(w: &Wiring) {
    let w = w.clone();
    let root = w.view.root.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let on_backdrop = ev
            .target()
            .map(|t| {
                let target: &JsValue = t.as_ref();
                let root: &JsValue = w.view.root.as_ref();
                target == root
            })
            .unwrap_or(false);
        if on_backdrop {
            w.state.borrow_mut().close();
            sync(&w);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Global keydown, honored only while the overlay is open so page keyboard
/// handling is untouched otherwise.
fn wire_keyboard(w: &Wiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if !w.state.borrow().is_open() {
            return;
        }
        if let Some(action) = action_for_key(&ev.key()) {
            w.state.borrow_mut().apply(action);
            sync(&w);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
