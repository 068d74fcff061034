use std::time::Duration;
use serde::Deserialize;
use crate::error::ThemeError;

const STORAGE_KEY_VAR: &str = "THEME_STORAGE_KEY";
const BUTTON_ID_VAR: &str = "THEME_TOGGLE_BUTTON_ID";
const ANIMATION_MS_VAR: &str = "THEME_ANIMATION_MS";

/// Names and values the controller reads from and writes to the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub button_id: String,
    pub indicator_selector: String,
    pub button_dark_class: String,
    pub dark_theme_class: String,
    pub animating_class: String,
    pub animation_ms: u64,
    pub background_variable: String,
    pub dark_background: String,
    pub light_background: String,
    pub color_scheme_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "redis-om-theme".to_string(),
            button_id: "theme-toggle-button".to_string(),
            indicator_selector: ".toggle-thumb".to_string(),
            button_dark_class: "dark".to_string(),
            dark_theme_class: "dark-theme".to_string(),
            animating_class: "animating".to_string(),
            animation_ms: 300,
            background_variable: "--page-background-color".to_string(),
            dark_background: "var(--redis-dark-theme-bg)".to_string(),
            light_background: "white".to_string(),
            color_scheme_query: "(prefers-color-scheme: dark)".to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn background_for(&self, is_dark: bool) -> &str {
        if is_dark { &self.dark_background } else { &self.light_background }
    }

    /// Parses a JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_env() -> Result<Self, ThemeError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ThemeError> where F: Fn(&str) -> Option<String> {
        let mut config = Self::default();

        if let Some(key) = lookup(STORAGE_KEY_VAR) {
            config.storage_key = key;
        }
        if let Some(id) = lookup(BUTTON_ID_VAR) {
            config.button_id = id;
        }
        if let Some(ms) = lookup(ANIMATION_MS_VAR) {
            config.animation_ms = ms
                .trim()
                .parse()
                .map_err(|e| ThemeError::Config(format!("{} must be a number of milliseconds: {}", ANIMATION_MS_VAR, e)))?;
        }

        log::info!(
            "Theme config: key={}, button=#{}, animation={}ms",
            config.storage_key,
            config.button_id,
            config.animation_ms
        );
        Ok(config)
    }
}
