//! Signal-backed implementation of the dashboard view port.

use gpro_app::ports::DashboardView;
use gpro_domain::panel::StatusPanel;
use gpro_domain::plot::PlotState;
use leptos::prelude::*;

/// Writes controller output into the signals a test page renders from.
#[derive(Debug, Clone, Copy)]
pub struct SignalView {
    panel: WriteSignal<StatusPanel>,
    start_enabled: WriteSignal<bool>,
    plot: WriteSignal<PlotState>,
}

impl SignalView {
    #[must_use]
    pub fn new(
        panel: WriteSignal<StatusPanel>,
        start_enabled: WriteSignal<bool>,
        plot: WriteSignal<PlotState>,
    ) -> Self {
        Self {
            panel,
            start_enabled,
            plot,
        }
    }
}

impl DashboardView for SignalView {
    fn render_panel(&self, panel: StatusPanel) {
        self.panel.set(panel);
    }

    fn set_start_enabled(&self, enabled: bool) {
        self.start_enabled.set(enabled);
    }

    fn render_plot(&self, plot: PlotState) {
        self.plot.set(plot);
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
