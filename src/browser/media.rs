use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ MediaQueryList, MediaQueryListEvent };
use crate::controller::SystemPreference;

pub struct MediaQueryPreference {
    query: Option<MediaQueryList>,
}

impl MediaQueryPreference {
    pub fn new(window: &web_sys::Window, query: &str) -> Self {
        Self {
            query: window.match_media(query).ok().flatten(),
        }
    }
}

impl SystemPreference for MediaQueryPreference {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().map(|q| q.matches()).unwrap_or(false)
    }

    fn subscribe(&self, mut callback: Box<dyn FnMut(bool)>) -> bool {
        let Some(query) = &self.query else {
            return false;
        };

        let closure = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            callback(event.matches());
        }) as Box<dyn FnMut(_)>);

        let added = query
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("Failed to watch color scheme: {:?}", e))
            .is_ok();
        // Listener lives as long as the page.
        closure.forget();
        added
    }
}
