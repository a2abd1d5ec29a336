use gpro_dashboard::App;
use leptos::prelude::*;

fn main() {
    let config = gpro_dashboard::config::load();
    gpro_dashboard::logging::init(&config.logging);
    leptos::mount::mount_to_body(move || view! { <App config/> });
}
