mod theme_config;

pub use theme_config::ThemeConfig;
