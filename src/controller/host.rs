use std::rc::Rc;
use std::time::Duration;

/// Synchronous string key-value storage (`localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// The host's ambient color-scheme setting.
pub trait SystemPreference {
    fn prefers_dark(&self) -> bool;

    /// Registers `callback` for change notifications, called with the new
    /// "prefers dark" value. Returns false when the host cannot report changes.
    fn subscribe(&self, callback: Box<dyn FnMut(bool)>) -> bool;
}

/// Page-level operations: root/body marker classes and style variables.
pub trait ThemeDocument {
    fn toggle_button(&self, id: &str, indicator_selector: &str) -> Option<Rc<dyn ToggleButton>>;

    /// Adds or removes `class` on both the root element and the body.
    fn set_marker_class(&self, class: &str, present: bool);

    fn has_marker_class(&self, class: &str) -> bool;

    fn set_style_variable(&self, name: &str, value: &str);
}

pub trait ToggleButton {
    fn set_class(&self, class: &str, present: bool);

    /// Returns false if the button has no indicator element.
    fn set_indicator_class(&self, class: &str, present: bool) -> bool;

    fn on_click(&self, callback: Box<dyn FnMut()>);
}

/// Fire-and-forget delayed tasks.
pub trait Timer {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Everything the controller needs from its environment.
#[derive(Clone)]
pub struct ThemeHost {
    pub document: Rc<dyn ThemeDocument>,
    pub store: Rc<dyn PreferenceStore>,
    pub system: Rc<dyn SystemPreference>,
    pub timer: Rc<dyn Timer>,
}
