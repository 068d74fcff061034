use dioxus::prelude::*;
use docs_theme_toggle::{ DocsHeader, ThemeConfig };

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&e.to_string().into());
        }
    }

    dioxus::launch(App);
}

fn load_config() -> ThemeConfig {
    ThemeConfig::from_env().unwrap_or_else(|e| {
        log::warn!("{}, using default theme config", e);
        ThemeConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);

    // Runs once the header, and with it the toggle button, is mounted.
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            docs_theme_toggle::browser::start(config.clone());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            log::debug!("Theme controller needs a browser, skipping #{}", config.button_id);
        }
    });

    rsx! {
        DocsHeader { title: "Redis OM Spring" }
        main {
            class: "doc",
            h1 { "Documentation" }
            p { "Use the toggle in the header to switch between light and dark themes." }
        }
    }
}
