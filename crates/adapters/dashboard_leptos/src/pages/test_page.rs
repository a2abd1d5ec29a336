//! Test page — form, stop control, status box, and result plot for one
//! classification mode.

use std::rc::Rc;

use gpro_app::config::DashboardConfig;
use gpro_app::services::dashboard_controller::DashboardController;
use gpro_domain::classification::{ClassificationType, ThresholdField};
use gpro_domain::panel::StatusPanel;
use gpro_domain::plot::PlotState;
use gpro_domain::run::StartForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpRunApi;
use crate::components::{PlotArea, StatusBox};
use crate::runtime::BrowserRuntime;
use crate::view::SignalView;

/// A test page. Polling starts on mount, so reloading onto a running test
/// resumes it, and stops when the page is left.
#[component]
pub fn TestPage(classification: ClassificationType) -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();

    let (panel, set_panel) = signal(StatusPanel::default());
    let (start_enabled, set_start_enabled) = signal(true);
    let (plot, set_plot) = signal(PlotState::Hidden);

    let (cycles, set_cycles) = signal("3".to_string());
    let (duration, set_duration) = signal("5".to_string());
    let (threshold, set_threshold) = signal(String::new());

    let threshold_field = classification.threshold_field();
    let (threshold_id, threshold_label, threshold_default) = match threshold_field {
        ThresholdField::Soft => ("softThreshold", "Soft threshold", config.thresholds.soft),
        ThresholdField::Fresh => ("freshThreshold", "Fresh threshold", config.thresholds.fresh),
    };

    let controller = DashboardController::new(
        classification,
        config.clone(),
        HttpRunApi::new(config.api.clone()),
        SignalView::new(set_panel, set_start_enabled, set_plot),
        BrowserRuntime,
    );

    controller.begin_polling();
    let poller = controller.poller().clone();
    on_cleanup(move || poller.stop());

    let on_submit = {
        let controller = Rc::clone(&controller);
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let threshold = Some(threshold.get_untracked());
            let form = match threshold_field {
                ThresholdField::Soft => StartForm {
                    cycles: cycles.get_untracked(),
                    duration: duration.get_untracked(),
                    soft_threshold: threshold,
                    fresh_threshold: None,
                },
                ThresholdField::Fresh => StartForm {
                    cycles: cycles.get_untracked(),
                    duration: duration.get_untracked(),
                    soft_threshold: None,
                    fresh_threshold: threshold,
                },
            };
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                let _ = controller.start(&form).await;
            });
        }
    };

    let on_stop = {
        let controller = Rc::clone(&controller);
        move |_: leptos::ev::MouseEvent| {
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                let _ = controller.stop().await;
            });
        }
    };

    let on_plot_load = {
        let controller = Rc::clone(&controller);
        move || controller.plot_loaded()
    };
    let on_plot_error = move || controller.plot_failed();

    view! {
        <div class="test-page">
            <h1>{format!("{} Test", classification.label())}</h1>
            <form id="testForm" on:submit=on_submit>
                <label>
                    "Cycles"
                    <input
                        type="number"
                        id="cycles"
                        min="1"
                        required
                        prop:value=cycles
                        on:input=move |ev: leptos::ev::Event| set_cycles.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Phase duration (s)"
                    <input
                        type="number"
                        id="duration"
                        min="1"
                        required
                        prop:value=duration
                        on:input=move |ev: leptos::ev::Event| set_duration.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    {threshold_label}
                    <input
                        type="number"
                        id=threshold_id
                        min="0"
                        placeholder=threshold_default.to_string()
                        prop:value=threshold
                        on:input=move |ev: leptos::ev::Event| set_threshold.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" id="startBtn" disabled=move || !start_enabled.get()>
                    "Start Test"
                </button>
            </form>
            <button type="button" id="stopBtn" class="danger" on:click=on_stop>
                "Stop Test"
            </button>
            <StatusBox panel/>
            <PlotArea plot on_load=on_plot_load on_error=on_plot_error/>
        </div>
    }
}
