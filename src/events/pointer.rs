use crate::app::SharedApp;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas clicks go to the sequencer in canvas pixel coordinates.
pub fn wire_click(app: &SharedApp, canvas: &web::HtmlCanvasElement) {
    let app = app.clone();
    let canvas_for_click = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let p = dom::pointer_canvas_px(&ev, &canvas_for_click);
        match app.try_borrow_mut() {
            Ok(mut app) => app.click(p),
            Err(_) => log::warn!("[input] click dropped while busy"),
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the backing store in step with the window and rescale the grid.
pub fn wire_resize(app: &SharedApp) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Ok(mut app) = app.try_borrow_mut() {
            app.resize();
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
