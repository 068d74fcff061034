use dioxus::prelude::*;
use crate::configs::ThemeConfig;
use super::ThemeToggle;

#[component]
pub fn DocsHeader(title: String) -> Element {
    let config = use_context::<ThemeConfig>();

    rsx! {
        header {
            class: "header",
            nav {
                class: "navbar",
                div {
                    class: "navbar-brand",
                    a { class: "navbar-item", href: "/", "{title}" }
                }
                div {
                    class: "navbar-end",
                    ThemeToggle { button_id: config.button_id.clone() }
                }
            }
        }
    }
}
