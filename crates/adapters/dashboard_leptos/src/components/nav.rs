use gpro_app::config::DashboardConfig;
use leptos::prelude::*;

use super::ThemeToggle;

#[component]
pub fn Nav() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();

    view! {
        <nav>
            <ul>
                <li><a href="/">"Home"</a></li>
                <li><a href="/hardness">"Hardness"</a></li>
                <li><a href="/fruit">"Fruit"</a></li>
                <li><a href="/download">"Download"</a></li>
            </ul>
            <ThemeToggle storage_key=config.theme.storage_key/>
        </nav>
    }
}
