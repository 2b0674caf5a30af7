use super::keys::{command_for_key, KeyCommand};
use crate::app::SharedApp;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, app: &SharedApp) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(command) = command_for_key(&ev.key()) else {
        return;
    };
    ev.prevent_default();
    let Ok(mut app) = app.try_borrow_mut() else {
        return;
    };
    match command {
        KeyCommand::TogglePlay => app.toggle_play(),
        KeyCommand::ToggleLayout => app.toggle_layout(),
    }
}

pub fn wire_keydown(app: &SharedApp) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &app);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
