use crate::clock::{self, pad2};
use crate::constants::{COUNTDOWN_DONE_MESSAGE, DEFAULT_COUNTDOWN_TARGET};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone)]
struct Fields {
    days: web::Element,
    hours: web::Element,
    minutes: web::Element,
    seconds: web::Element,
    message: Option<web::Element>,
}

/// Live countdown to `data-target-date` on `.countdown-container`, updated
/// once per frame. The loop stops re-arming itself once the target passes.
pub fn init(document: &web::Document) {
    let container = match document.query_selector(".countdown-container").ok().flatten() {
        Some(el) => el,
        None => return,
    };

    let target = container
        .get_attribute("data-target-date")
        .unwrap_or_else(|| DEFAULT_COUNTDOWN_TARGET.to_owned());
    let target_ms = js_sys::Date::new(&JsValue::from_str(&target)).get_time();
    if target_ms.is_nan() {
        log::warn!("[countdown] unparseable target date {target:?}; widget disabled");
        return;
    }

    let fields = match Fields::lookup(document) {
        Some(f) => f,
        None => return,
    };

    start_loop(fields, target_ms);
}

impl Fields {
    fn lookup(document: &web::Document) -> Option<Fields> {
        Some(Fields {
            days: document.get_element_by_id("days")?,
            hours: document.get_element_by_id("hours")?,
            minutes: document.get_element_by_id("minutes")?,
            seconds: document.get_element_by_id("seconds")?,
            message: document.get_element_by_id("countdown-message"),
        })
    }

    fn show(&self, parts: clock::CountdownParts) {
        self.days.set_text_content(Some(&pad2(parts.days)));
        self.hours.set_text_content(Some(&pad2(parts.hours)));
        self.minutes.set_text_content(Some(&pad2(parts.minutes)));
        self.seconds.set_text_content(Some(&pad2(parts.seconds)));
    }

    fn show_finished(&self) {
        for el in [&self.days, &self.hours, &self.minutes, &self.seconds] {
            el.set_text_content(Some("0"));
        }
        if let Some(msg) = &self.message {
            msg.set_text_content(Some(COUNTDOWN_DONE_MESSAGE));
        }
    }
}

fn start_loop(fields: Fields, target_ms: f64) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let remaining = target_ms - js_sys::Date::now();
        match clock::countdown_parts(remaining) {
            Some(parts) => {
                fields.show(parts);
                if let Some(w) = web::window() {
                    let _ = w.request_animation_frame(
                        tick_clone
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    );
                }
            }
            None => fields.show_finished(),
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
