use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// No element with the configured id exists on the page.
    ToggleButtonMissing(String),
    /// The host lacks a window, document or root element.
    Environment(String),
    Config(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::ToggleButtonMissing(id) =>
                write!(f, "Theme toggle button not found in DOM (id: {})", id),
            ThemeError::Environment(msg) => write!(f, "Environment Error: {}", msg),
            ThemeError::Config(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        ThemeError::Config(error.to_string())
    }
}
