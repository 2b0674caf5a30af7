#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod canvas;
mod constants;
mod dom;
mod envelope;
mod events;
mod timer;

use app::App;
use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("musictoy starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, CANVAS_ID)?;

    // Audio waits for the first Play so the context starts from a user gesture.
    let app = App::create(&window, canvas.clone())?;

    events::wire_click(&app, &canvas);
    events::wire_keydown(&app);
    events::wire_resize(&app);
    Ok(())
}
