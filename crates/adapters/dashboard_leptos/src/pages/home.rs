use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div>
            <h1>"Test Dashboard"</h1>
            <ul class="test-links">
                <li><a href="/hardness">"Hardness test"</a><span class="hint">"Classify a sample as soft or hard"</span></li>
                <li><a href="/fruit">"Freshness test"</a><span class="hint">"Classify fruit as fresh or rotten"</span></li>
                <li><a href="/download">"Download sensor data"</a></li>
            </ul>
        </div>
    }
}
