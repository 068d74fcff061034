pub mod host;
mod theme_controller;

// Re-export commonly used items
pub use host::{ PreferenceStore, SystemPreference, ThemeDocument, ThemeHost, Timer, ToggleButton };
pub use theme_controller::ThemeController;
