//! Dark-mode switch persisted through `localStorage`.

use gpro_app::services::theme_service::ThemeService;
use leptos::prelude::*;

use crate::storage::LocalStorage;

/// Class set on `<body>` while dark mode is on.
const DARK_CLASS: &str = "dark";

/// Apply the theme by toggling the dark class on `<body>`.
fn apply_theme(dark: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.body())
    {
        let _ = body.class_list().toggle_with_force(DARK_CLASS, dark);
    }
}

/// A checkbox that switches between light and dark themes.
///
/// Reads the stored preference and applies it on mount. Each change
/// toggles the theme and persists the new value.
#[component]
pub fn ThemeToggle(
    /// `localStorage` key of the preference.
    #[prop(into)]
    storage_key: String,
) -> impl IntoView {
    let theme = ThemeService::new(LocalStorage, storage_key);
    let initial = theme.is_dark();
    apply_theme(initial);

    let (is_dark, set_is_dark) = signal(initial);

    let on_change = move |ev: leptos::ev::Event| {
        let dark = event_target_checked(&ev);
        apply_theme(dark);
        theme.set_dark(dark);
        set_is_dark.set(dark);
    };

    view! {
        <label class="theme-toggle" title="Toggle dark mode">
            <input type="checkbox" id="darkSwitch" prop:checked=is_dark on:change=on_change/>
            <span>"Dark mode"</span>
        </label>
    }
}
