use crate::constants::{MUSIC_BLOCKED_PROMPT, MUSIC_PREF_KEY};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Clone)]
struct Player {
    audio: web::HtmlAudioElement,
    toggle: web::Element,
    prompted: Rc<Cell<bool>>,
}

/// Background-music toggle with a single persisted preference flag.
pub fn init(document: &web::Document) {
    let toggle = match document.get_element_by_id("music-toggle") {
        Some(el) => el,
        None => return,
    };
    let audio = match document
        .get_element_by_id("bg-music")
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
    {
        Some(a) => a,
        None => return,
    };

    let player = Player {
        audio,
        toggle,
        prompted: Rc::new(Cell::new(false)),
    };

    // Resume a previously enabled preference; the autoplay policy may still
    // veto this, in which case the first-interaction retry picks it up.
    if preference_is_playing() {
        attempt_play(player.clone(), false, false);
    }

    wire_toggle(document, &player);
    wire_first_interaction_retry(document, &player, "click");
    wire_first_interaction_retry(document, &player, "touchstart");
}

fn wire_toggle(document: &web::Document, player: &Player) {
    let player = player.clone();
    dom::add_click_listener(document, "music-toggle", move || {
        if player.audio.paused() {
            attempt_play(player.clone(), true, true);
        } else {
            let _ = player.audio.pause();
            let _ = player.toggle.class_list().remove_1("playing");
            store_preference(false);
        }
    });
}

/// Autoplay blocks lift after a user gesture; a once-only listener
/// re-attempts a stored preference on the first qualifying interaction.
fn wire_first_interaction_retry(document: &web::Document, player: &Player, event: &str) {
    let player = player.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if preference_is_playing() && player.audio.paused() {
            attempt_play(player.clone(), false, false);
        }
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Best-effort playback: the play promise is the success/failure result, and
/// the blocked branch is the only fallback path.
fn attempt_play(player: Player, persist: bool, prompt_on_block: bool) {
    match player.audio.play() {
        Ok(promise) => {
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        let _ = player.toggle.class_list().add_1("playing");
                        if persist {
                            store_preference(true);
                        }
                    }
                    Err(e) => blocked(&player, prompt_on_block, e),
                }
            });
        }
        Err(e) => blocked(&player, prompt_on_block, e),
    }
}

fn blocked(player: &Player, prompt: bool, err: wasm_bindgen::JsValue) {
    log::warn!("[music] playback blocked: {:?}", err);
    if prompt && !player.prompted.replace(true) {
        if let Some(window) = web::window() {
            let _ = window.alert_with_message(MUSIC_BLOCKED_PROMPT);
        }
    }
}

fn preference_is_playing() -> bool {
    dom::local_storage()
        .and_then(|s| s.get_item(MUSIC_PREF_KEY).ok().flatten())
        .as_deref()
        == Some("true")
}

fn store_preference(playing: bool) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(MUSIC_PREF_KEY, if playing { "true" } else { "false" });
    }
}
