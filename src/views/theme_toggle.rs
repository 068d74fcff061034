use dioxus::prelude::*;

/// Markup the theme controller attaches to: a button carrying `button_id`
/// with a `.toggle-thumb` indicator inside.
#[component]
pub fn ThemeToggle(button_id: String) -> Element {
    rsx! {
        button {
            id: "{button_id}",
            class: "theme-toggle",
            r#type: "button",
            title: "Toggle dark theme",
            aria_label: "Toggle dark theme",
            span {
                class: "toggle-track",
                span { class: "toggle-icon toggle-icon-light", "🌞" }
                span { class: "toggle-thumb" }
                span { class: "toggle-icon toggle-icon-dark", "🌙" }
            }
        }
    }
}
