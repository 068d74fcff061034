use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use crate::controller::Timer;

pub struct WindowTimer {
    window: web_sys::Window,
}

impl WindowTimer {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl Timer for WindowTimer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            millis
        ) {
            log::warn!("Failed to schedule timer: {:?}", e);
        }
    }
}
