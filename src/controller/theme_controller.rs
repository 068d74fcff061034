use std::rc::Rc;
use crate::configs::ThemeConfig;
use crate::error::ThemeError;
use crate::utils::{ Theme, ThemePreference };
use super::host::{ PreferenceStore, SystemPreference, ThemeDocument, ThemeHost, Timer, ToggleButton };

pub struct ThemeController {
    config: ThemeConfig,
    document: Rc<dyn ThemeDocument>,
    button: Rc<dyn ToggleButton>,
    store: Rc<dyn PreferenceStore>,
    system: Rc<dyn SystemPreference>,
    timer: Rc<dyn Timer>,
}

impl ThemeController {
    /// Finds the toggle button, applies the initial theme and wires the click
    /// and system-preference listeners.
    ///
    /// Without a toggle button nothing is touched and
    /// `ThemeError::ToggleButtonMissing` is returned.
    pub fn attach(host: ThemeHost, config: ThemeConfig) -> Result<Rc<Self>, ThemeError> {
        let button = host.document
            .toggle_button(&config.button_id, &config.indicator_selector)
            .ok_or_else(|| ThemeError::ToggleButtonMissing(config.button_id.clone()))?;
        log::debug!("Theme toggle button found: #{}", config.button_id);

        let controller = Rc::new(Self {
            config,
            document: host.document,
            button,
            store: host.store,
            system: host.system,
            timer: host.timer,
        });

        controller.initialize_theme();
        Self::listen_for_clicks(&controller);
        Self::listen_for_system_changes(&controller);

        Ok(controller)
    }

    pub fn stored_preference(&self) -> ThemePreference {
        ThemePreference::from_stored(self.store.get(&self.config.storage_key).as_deref())
    }

    /// The theme the document currently shows, judged by the marker class.
    pub fn applied_theme(&self) -> Theme {
        Theme::from_dark(self.document.has_marker_class(&self.config.dark_theme_class))
    }

    /// Updates the button, background variable and marker classes, then saves
    /// `theme` under the preference key.
    pub fn set_theme(&self, theme: Theme) {
        let is_dark = theme.is_dark();
        log::debug!("Setting theme: {}", theme);

        self.button.set_class(&self.config.button_dark_class, is_dark);

        if self.button.set_indicator_class(&self.config.animating_class, true) {
            let button = Rc::clone(&self.button);
            let class = self.config.animating_class.clone();
            self.timer.schedule(
                self.config.animation_duration(),
                Box::new(move || {
                    button.set_indicator_class(&class, false);
                })
            );
        }

        // Background before marker classes so the old color never flashes.
        self.document.set_style_variable(&self.config.background_variable, self.config.background_for(is_dark));
        self.document.set_marker_class(&self.config.dark_theme_class, is_dark);
        self.store.set(&self.config.storage_key, theme.as_str());

        log::debug!("Theme set: {}", theme);
    }

    /// Applies the saved preference, else the system preference, else light.
    pub fn initialize_theme(&self) -> Theme {
        let preference = self.stored_preference();
        log::debug!("Saved theme: {:?}", preference);

        let theme = match preference {
            ThemePreference::Explicit(theme) => theme,
            ThemePreference::Unset if self.system.prefers_dark() => {
                log::info!("Using system dark mode preference");
                Theme::Dark
            }
            ThemePreference::Unset => {
                log::info!("Defaulting to light theme");
                Theme::Light
            }
        };

        self.set_theme(theme);
        theme
    }

    pub fn toggle(&self) -> Theme {
        let theme = self.applied_theme().inverted();
        self.set_theme(theme);
        theme
    }

    /// Follows the system preference only while nothing at all is stored
    /// under the preference key. Returns the applied theme, or `None` if the
    /// change was ignored.
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<Theme> {
        if self.store.get(&self.config.storage_key).is_some() {
            log::debug!("System theme changed, keeping saved preference");
            return None;
        }

        let theme = Theme::from_dark(prefers_dark);
        log::info!("System theme changed, applying: {}", theme);
        self.set_theme(theme);
        Some(theme)
    }

    fn listen_for_clicks(controller: &Rc<Self>) {
        let handle = Rc::clone(controller);
        controller.button.on_click(
            Box::new(move || {
                log::debug!("Toggle button clicked");
                handle.toggle();
            })
        );
    }

    fn listen_for_system_changes(controller: &Rc<Self>) {
        let handle = Rc::clone(controller);
        let subscribed = controller.system.subscribe(
            Box::new(move |prefers_dark| {
                handle.on_system_change(prefers_dark);
            })
        );
        if !subscribed {
            log::debug!("System color scheme changes are not observable");
        }
    }
}
