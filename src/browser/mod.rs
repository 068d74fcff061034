mod document;
mod media;
mod storage;
mod timer;

use std::rc::Rc;
use std::sync::Once;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use crate::configs::ThemeConfig;
use crate::controller::{ ThemeController, ThemeHost };
use crate::error::ThemeError;

pub use document::{ WebDocument, WebToggleButton };
pub use media::MediaQueryPreference;
pub use storage::LocalPreferenceStore;
pub use timer::WindowTimer;

static LOGGER: Once = Once::new();

fn init_logging() {
    LOGGER.call_once(|| {
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
    });
}

/// Builds a host from the browser globals.
pub fn browser_host(config: &ThemeConfig) -> Result<ThemeHost, ThemeError> {
    let window = web_sys::window().ok_or_else(|| ThemeError::Environment("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ThemeError::Environment("no document".to_string()))?;

    Ok(ThemeHost {
        document: Rc::new(WebDocument::new(document)?),
        store: Rc::new(LocalPreferenceStore::new(&window)),
        system: Rc::new(MediaQueryPreference::new(&window, &config.color_scheme_query)),
        timer: Rc::new(WindowTimer::new(window)),
    })
}

/// Attaches the theme controller to the current page. Failures are logged,
/// never raised.
pub fn start(config: ThemeConfig) -> Option<Rc<ThemeController>> {
    let result = browser_host(&config).and_then(|host| ThemeController::attach(host, config));
    match result {
        Ok(controller) => {
            log::info!("Theme toggle ready ({})", controller.applied_theme());
            Some(controller)
        }
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}

fn start_when_ready(config: ThemeConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("{}", ThemeError::Environment("no document".to_string()));
        return;
    };

    if document.ready_state() != "loading" {
        start(config);
        return;
    }

    let closure = Closure::once_into_js(move || {
        start(config);
    });
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref()) {
        log::error!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
}

/// Script entry point for pages that embed the toggle without Dioxus.
#[wasm_bindgen]
pub fn init_theme_toggle() {
    init_logging();
    start_when_ready(ThemeConfig::default());
}

#[wasm_bindgen]
pub fn init_theme_toggle_with_config(json: &str) {
    init_logging();
    let config = ThemeConfig::from_json(json).unwrap_or_else(|e| {
        log::warn!("{}, using default theme config", e);
        ThemeConfig::default()
    });
    start_when_ready(config);
}
