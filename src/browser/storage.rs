use web_sys::Storage;
use crate::controller::PreferenceStore;

/// `localStorage`, or nothing when the browser denies access to it.
pub struct LocalPreferenceStore {
    storage: Option<Storage>,
}

impl LocalPreferenceStore {
    pub fn new(window: &web_sys::Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable, theme choice will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Failed to save theme preference: {:?}", e);
            }
        }
    }
}
