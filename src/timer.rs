use musictoy_core::{Timer, TimerError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setInterval` with a callback bound once at construction. The closure is
/// owned here and dropped with the timer.
pub struct IntervalTimer {
    callback: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    pub fn new(callback: impl FnMut() + 'static) -> Self {
        Self {
            callback: Closure::wrap(Box::new(callback) as Box<dyn FnMut()>),
        }
    }
}

impl Timer for IntervalTimer {
    type Handle = i32;

    fn start(&mut self, period_ms: u32) -> Result<i32, TimerError> {
        let window = web::window().ok_or_else(|| TimerError("no window".into()))?;
        window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .map_err(|e| TimerError(format!("{:?}", e)))
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(handle);
        }
    }
}
