use leptos::prelude::*;

/// Fallback for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>
                "Pick a test from the "
                <a href="/">"dashboard home"</a>
                "."
            </p>
        </div>
    }
}
