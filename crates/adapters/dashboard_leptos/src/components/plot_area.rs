//! Result plot of a finished run.

use gpro_domain::plot::{PLOT_ERROR_MESSAGE, PlotState};
use leptos::prelude::*;

/// Plot image, shown once a run finishes.
///
/// The `<img>` element is created once; only its `src` follows the signal,
/// so each completion triggers exactly one image load.
#[component]
pub fn PlotArea<L, E>(
    plot: ReadSignal<PlotState>,
    /// Called when the image loaded.
    on_load: L,
    /// Called when the image failed to load.
    on_error: E,
) -> impl IntoView
where
    L: Fn() + 'static,
    E: Fn() + 'static,
{
    let failed = move || plot.with(|p| matches!(p, PlotState::Failed));

    view! {
        <div
            id="plotArea"
            class="plot-area"
            style:display=move || if plot.with(PlotState::is_visible) { "block" } else { "none" }
        >
            <img
                id="plotImg"
                alt="Sensor data plot"
                src=move || plot.with(|p| p.src().map(str::to_string))
                style:display=move || if failed() { "none" } else { "block" }
                on:load=move |_| on_load()
                on:error=move |_| on_error()
            />
            <Show when=failed>
                <p class="error">{PLOT_ERROR_MESSAGE}</p>
            </Show>
        </div>
    }
}
