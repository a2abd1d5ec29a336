//! View port — what the controller can change on screen.

use std::rc::Rc;

use gpro_domain::panel::StatusPanel;
use gpro_domain::plot::PlotState;

/// Rendering surface of a test page.
pub trait DashboardView {
    /// Replace the status box content.
    fn render_panel(&self, panel: StatusPanel);

    /// Enable or disable the start control.
    fn set_start_enabled(&self, enabled: bool);

    /// Replace the plot area content.
    fn render_plot(&self, plot: PlotState);

    /// Ask the user a yes/no question, blocking until answered.
    fn confirm(&self, message: &str) -> bool;
}

impl<T: DashboardView> DashboardView for Rc<T> {
    fn render_panel(&self, panel: StatusPanel) {
        (**self).render_panel(panel);
    }

    fn set_start_enabled(&self, enabled: bool) {
        (**self).set_start_enabled(enabled);
    }

    fn render_plot(&self, plot: PlotState) {
        (**self).render_plot(plot);
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}
