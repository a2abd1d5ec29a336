//! Status box of a test page.

use gpro_domain::panel::StatusPanel;
use leptos::prelude::*;

/// Renders the current [`StatusPanel`]; hidden lines are left out.
#[component]
pub fn StatusBox(panel: ReadSignal<StatusPanel>) -> impl IntoView {
    view! {
        <div id="status" class=move || panel.with(StatusPanel::css_class)>
            <p>{move || panel.with(StatusPanel::status_line)}</p>
            {move || panel.with(StatusPanel::elapsed_line).map(|line| view! { <p id="timer">{line}</p> })}
            {move || panel.with(StatusPanel::average_line).map(|line| view! { <p id="average">{line}</p> })}
            {move || panel.with(StatusPanel::result_line).map(|line| view! { <p id="result">{line}</p> })}
        </div>
    }
}
