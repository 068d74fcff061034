use std::fmt::{ Display, Formatter };
use serde::{ Serialize, Deserialize };

/// The theme currently rendered on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn inverted(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the preference store says about the user's choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Explicit(Theme),
    Unset,
}

impl ThemePreference {
    /// Interprets a raw stored value. Anything other than `dark`/`light` counts as unset.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Explicit(Theme::Dark),
            Some("light") => ThemePreference::Explicit(Theme::Light),
            None => ThemePreference::Unset,
            Some(other) => {
                log::warn!("Ignoring unrecognized saved theme: {:?}", other);
                ThemePreference::Unset
            }
        }
    }

    pub fn is_unset(self) -> bool {
        self == ThemePreference::Unset
    }
}
