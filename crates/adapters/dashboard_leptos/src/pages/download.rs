use gpro_app::config::DashboardConfig;
use leptos::prelude::*;

/// Link to the raw sensor readings of the last run, as CSV.
#[component]
pub fn Download() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();

    view! {
        <div>
            <h1>"Download Sensor Data"</h1>
            <p>"Every reading collected during the last run, one row per sample."</p>
            <a class="button" href=config.api.download download="sensor_data.csv">
                "Download CSV"
            </a>
        </div>
    }
}
