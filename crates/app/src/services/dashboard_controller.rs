//! Dashboard controller — starts, stops, and polls a test run and keeps the
//! status panel in step with the backend.

use std::cell::Cell;
use std::rc::Rc;

use gpro_domain::classification::ClassificationType;
use gpro_domain::error::ValidationError;
use gpro_domain::panel::StatusPanel;
use gpro_domain::plot::{CacheBuster, PlotState, plot_url};
use gpro_domain::run::StartForm;

use crate::config::DashboardConfig;
use crate::poller::{PollTicket, Poller};
use crate::ports::{ApiError, DashboardView, RunApi, Runtime};
use crate::sequence::RequestSequence;

/// Question asked before a stop request is sent.
pub const STOP_CONFIRMATION: &str = "Are you sure you want to stop the test?";

/// Result of a successful [`DashboardController::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The backend accepted the run and polling began.
    Started(PollTicket),
    /// The backend accepted the run, but a newer start or stop was issued
    /// meanwhile, so this one did not take over the page.
    Superseded,
}

/// Why a start did not begin polling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    #[error("invalid start form")]
    Invalid(#[from] ValidationError),

    #[error("start request failed")]
    Api(#[from] ApiError),
}

/// Result of a successful [`DashboardController::stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// The backend stopped the run and polling was cancelled.
    Stopped,
    /// The backend stopped the run, but a newer start or stop was issued
    /// meanwhile.
    Superseded,
}

/// Result of one status fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The panel was refreshed; the run continues.
    Running,
    /// The run finished: polling stopped and the plot was requested.
    Finished { plot_src: String },
    /// The response arrived after newer state and was discarded.
    Stale,
}

/// Drives one test page.
///
/// The controller lives on the page's event loop behind an [`Rc`]; poll
/// loops it spawns hold a clone and exit once their [`PollTicket`] is
/// superseded.
pub struct DashboardController<A, V, R> {
    classification: ClassificationType,
    config: DashboardConfig,
    api: A,
    view: V,
    runtime: R,
    poller: Poller,
    sequence: RequestSequence,
    cache_buster: Cell<CacheBuster>,
}

impl<A, V, R> DashboardController<A, V, R>
where
    A: RunApi + 'static,
    V: DashboardView + 'static,
    R: Runtime + 'static,
{
    /// Create a controller for a page running `classification` tests.
    pub fn new(
        classification: ClassificationType,
        config: DashboardConfig,
        api: A,
        view: V,
        runtime: R,
    ) -> Rc<Self> {
        Rc::new(Self {
            classification,
            config,
            api,
            view,
            runtime,
            poller: Poller::new(),
            sequence: RequestSequence::new(),
            cache_buster: Cell::new(CacheBuster::default()),
        })
    }

    #[must_use]
    pub fn classification(&self) -> ClassificationType {
        self.classification
    }

    /// Handle on the status poll, e.g. to cancel it when the page goes away.
    #[must_use]
    pub fn poller(&self) -> &Poller {
        &self.poller
    }

    /// Start polling the status endpoint, replacing any running poll.
    ///
    /// Called on page load so a reload onto a running test picks it up.
    pub fn begin_polling(self: &Rc<Self>) -> PollTicket {
        let ticket = self.poller.start();
        tracing::debug!(?ticket, "status polling started");
        let this = Rc::clone(self);
        self.runtime
            .spawn_local(async move { this.poll_loop(ticket).await });
        ticket
    }

    async fn poll_loop(&self, ticket: PollTicket) {
        let interval = self.config.polling.interval();
        loop {
            self.runtime.sleep(interval).await;
            if !self.poller.is_current(ticket) {
                tracing::debug!(?ticket, "status polling superseded");
                break;
            }
            if let Ok(TickOutcome::Finished { .. }) = self.poll_once(ticket).await {
                break;
            }
        }
    }

    /// Submit the test form and, once the backend accepts it, poll the run.
    ///
    /// The start control is disabled only for the request round-trip. A
    /// running poll is only replaced once the backend accepted the run, so a
    /// rejected start leaves the page tracking the current one.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::Invalid`] if the form does not parse (nothing is
    /// sent), or [`StartError::Api`] if the backend rejected the request or
    /// could not be reached. Both are also rendered in the status panel.
    pub async fn start(self: &Rc<Self>, form: &StartForm) -> Result<StartOutcome, StartError> {
        let request = match form.parse(self.classification, self.config.thresholds.defaults()) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(error = %err, "rejected start form");
                self.view
                    .render_panel(StatusPanel::failure(format!("Invalid input: {err}")));
                return Err(err.into());
            }
        };

        let seq = self.sequence.issue_barrier();
        self.view.render_panel(StatusPanel::starting());
        self.view.render_plot(PlotState::Hidden);
        self.view.set_start_enabled(false);

        let result = self.api.start(&request).await;
        self.view.set_start_enabled(true);

        if let Err(err) = result {
            let message = match &err {
                ApiError::Http { status, body } => {
                    tracing::error!(status = *status, body = %body, "start test failed");
                    "Failed to start test"
                }
                ApiError::Transport(_) | ApiError::Decode(_) => {
                    tracing::error!(error = %err, "error starting test");
                    "Error starting test"
                }
            };
            if self.sequence.is_latest_barrier(seq) {
                self.view.render_panel(StatusPanel::failure(message));
            }
            return Err(err.into());
        }

        if !self.sequence.is_latest_barrier(seq) {
            tracing::debug!(seq = seq.get(), "start acknowledged after a newer request");
            return Ok(StartOutcome::Superseded);
        }

        tracing::info!(
            classification = %request.classification_type,
            cycles = request.cycles,
            duration = request.duration,
            "test started"
        );
        self.poller.stop();
        Ok(StartOutcome::Started(self.begin_polling()))
    }

    /// Ask for confirmation, then stop the current run.
    ///
    /// The "stopped" panel is only rendered once the backend acknowledged
    /// the stop; a failed stop is logged and polling carries on.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] of a failed stop request.
    pub async fn stop(&self) -> Result<StopOutcome, ApiError> {
        if !self.view.confirm(STOP_CONFIRMATION) {
            tracing::debug!("stop declined");
            return Ok(StopOutcome::Declined);
        }

        let seq = self.sequence.issue_barrier();
        if let Err(err) = self.api.stop().await {
            match &err {
                ApiError::Http { status, body } => {
                    tracing::error!(status = *status, body = %body, "stop test failed");
                }
                ApiError::Transport(_) | ApiError::Decode(_) => {
                    tracing::error!(error = %err, "error stopping test");
                }
            }
            return Err(err);
        }

        if !self.sequence.is_latest_barrier(seq) {
            tracing::debug!(seq = seq.get(), "stop acknowledged after a newer request");
            return Ok(StopOutcome::Superseded);
        }

        self.poller.stop();
        self.view.render_panel(StatusPanel::stopped_by_user());
        tracing::info!("test stopped by user");
        Ok(StopOutcome::Stopped)
    }

    /// Fetch the status once on behalf of the poll identified by `ticket`.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] of a failed fetch. The panel is left as is
    /// and the poll keeps running.
    pub async fn poll_once(&self, ticket: PollTicket) -> Result<TickOutcome, ApiError> {
        let seq = self.sequence.issue();
        let status = match self.api.status().await {
            Ok(status) => status,
            Err(err) => {
                match &err {
                    ApiError::Http { status, body } => {
                        tracing::error!(status = *status, body = %body, "status fetch failed");
                    }
                    ApiError::Transport(_) | ApiError::Decode(_) => {
                        tracing::error!(error = %err, "error fetching status");
                    }
                }
                return Err(err);
            }
        };

        if !self.poller.is_current(ticket) || !self.sequence.accept(seq) {
            tracing::debug!(seq = seq.get(), "discarding stale status");
            return Ok(TickOutcome::Stale);
        }

        self.view.render_panel(StatusPanel::from_status(&status));
        if !status.finished {
            return Ok(TickOutcome::Running);
        }

        self.poller.stop();
        let plot_src = plot_url(&self.config.api.plot, self.next_cache_token());
        tracing::info!(status = %status.status, result = ?status.result, "test finished");
        self.view.render_plot(PlotState::Showing {
            src: plot_src.clone(),
        });
        Ok(TickOutcome::Finished { plot_src })
    }

    fn next_cache_token(&self) -> i64 {
        let mut buster = self.cache_buster.get();
        let token = buster.next(self.runtime.now_millis());
        self.cache_buster.set(buster);
        token
    }

    /// The plot image finished loading.
    pub fn plot_loaded(&self) {
        tracing::info!("plot image loaded");
    }

    /// The plot image failed to load; replace it with an inline error.
    pub fn plot_failed(&self) {
        tracing::error!("failed to load plot image");
        self.view.render_plot(PlotState::Failed);
    }

    /// Cancel polling, e.g. when leaving the page.
    pub fn shutdown(&self) {
        self.poller.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpro_domain::panel::PanelTone;
    use gpro_domain::run::{StartRequest, StatusResponse};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::future::Future;
    use std::time::Duration;

    const NOW: i64 = 1_700_000_000_000;

    #[derive(Default)]
    struct FakeApi {
        start_results: RefCell<VecDeque<Result<(), ApiError>>>,
        stop_results: RefCell<VecDeque<Result<(), ApiError>>>,
        statuses: RefCell<VecDeque<Result<StatusResponse, ApiError>>>,
        start_delay: Cell<Duration>,
        stop_delay: Cell<Duration>,
        status_delay: Cell<Duration>,
        starts: RefCell<Vec<StartRequest>>,
        stop_calls: Cell<usize>,
        status_calls: Cell<usize>,
    }

    impl RunApi for FakeApi {
        fn start(&self, request: &StartRequest) -> impl Future<Output = Result<(), ApiError>> {
            self.starts.borrow_mut().push(request.clone());
            let result = self.start_results.borrow_mut().pop_front().unwrap_or(Ok(()));
            delayed(self.start_delay.get(), result)
        }

        fn stop(&self) -> impl Future<Output = Result<(), ApiError>> {
            self.stop_calls.set(self.stop_calls.get() + 1);
            let result = self.stop_results.borrow_mut().pop_front().unwrap_or(Ok(()));
            delayed(self.stop_delay.get(), result)
        }

        fn status(&self) -> impl Future<Output = Result<StatusResponse, ApiError>> {
            self.status_calls.set(self.status_calls.get() + 1);
            let result = self
                .statuses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(running("Touch Phase", 1.0)));
            delayed(self.status_delay.get(), result)
        }
    }

    async fn delayed<T>(delay: Duration, value: T) -> T {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        value
    }

    struct RecordingView {
        panels: RefCell<Vec<StatusPanel>>,
        start_enabled: RefCell<Vec<bool>>,
        plots: RefCell<Vec<PlotState>>,
        confirm_answer: Cell<bool>,
        confirms: Cell<usize>,
    }

    impl Default for RecordingView {
        fn default() -> Self {
            Self {
                panels: RefCell::default(),
                start_enabled: RefCell::default(),
                plots: RefCell::default(),
                confirm_answer: Cell::new(true),
                confirms: Cell::new(0),
            }
        }
    }

    impl RecordingView {
        fn last_panel(&self) -> Option<StatusPanel> {
            self.panels.borrow().last().cloned()
        }

        fn shown_plots(&self) -> Vec<String> {
            self.plots
                .borrow()
                .iter()
                .filter_map(|plot| plot.src().map(str::to_string))
                .collect()
        }
    }

    impl DashboardView for RecordingView {
        fn render_panel(&self, panel: StatusPanel) {
            self.panels.borrow_mut().push(panel);
        }

        fn set_start_enabled(&self, enabled: bool) {
            self.start_enabled.borrow_mut().push(enabled);
        }

        fn render_plot(&self, plot: PlotState) {
            self.plots.borrow_mut().push(plot);
        }

        fn confirm(&self, message: &str) -> bool {
            assert_eq!(message, STOP_CONFIRMATION);
            self.confirms.set(self.confirms.get() + 1);
            self.confirm_answer.get()
        }
    }

    struct TokioRuntime;

    impl Runtime for TokioRuntime {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
            tokio::time::sleep(duration)
        }

        fn spawn_local(&self, task: impl Future<Output = ()> + 'static) {
            tokio::task::spawn_local(task);
        }

        fn now_millis(&self) -> i64 {
            NOW
        }
    }

    type TestController = DashboardController<Rc<FakeApi>, Rc<RecordingView>, TokioRuntime>;

    fn make_controller(
        classification: ClassificationType,
    ) -> (Rc<TestController>, Rc<FakeApi>, Rc<RecordingView>) {
        let api = Rc::new(FakeApi::default());
        let view = Rc::new(RecordingView::default());
        let controller = DashboardController::new(
            classification,
            DashboardConfig::default(),
            Rc::clone(&api),
            Rc::clone(&view),
            TokioRuntime,
        );
        (controller, api, view)
    }

    async fn in_local_set(test: impl Future<Output = ()>) {
        tokio::task::LocalSet::new().run_until(test).await;
    }

    fn valid_form() -> StartForm {
        StartForm {
            cycles: "3".to_string(),
            duration: "5".to_string(),
            ..StartForm::default()
        }
    }

    fn running(text: &str, elapsed: f64) -> StatusResponse {
        StatusResponse {
            status: text.to_string(),
            elapsed_time: elapsed,
            average: None,
            result: None,
            finished: false,
        }
    }

    fn finished(text: &str, result: &str) -> StatusResponse {
        StatusResponse {
            status: text.to_string(),
            elapsed_time: 30.0,
            average: Some(412.5),
            result: Some(result.to_string()),
            finished: true,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn should_send_the_page_classification() {
        in_local_set(async {
            let (hardness, api, _) = make_controller(ClassificationType::SoftHard);
            hardness.start(&valid_form()).await.unwrap();
            assert_eq!(
                api.starts.borrow()[0].classification_type,
                ClassificationType::SoftHard
            );

            let (fruit, api, _) = make_controller(ClassificationType::FreshRotten);
            fruit.start(&valid_form()).await.unwrap();
            assert_eq!(
                api.starts.borrow()[0].classification_type,
                ClassificationType::FreshRotten
            );
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_send_default_thresholds_when_omitted() {
        in_local_set(async {
            let (controller, api, _) = make_controller(ClassificationType::SoftHard);
            controller.start(&valid_form()).await.unwrap();

            let request = api.starts.borrow()[0].clone();
            assert_eq!(request.cycles, 3);
            assert_eq!(request.duration, 5);
            assert_eq!(request.soft_threshold, 350);
            assert_eq!(request.fresh_threshold, 750);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_render_starting_panel_and_hide_plot() {
        in_local_set(async {
            let (controller, _, view) = make_controller(ClassificationType::SoftHard);
            controller.start(&valid_form()).await.unwrap();

            let first = view.panels.borrow()[0].clone();
            assert_eq!(first, StatusPanel::starting());
            assert_eq!(first.elapsed_line().as_deref(), Some("Elapsed Time: 0s"));
            assert_eq!(first.average_line(), None);
            assert_eq!(first.result_line(), None);
            assert_eq!(*view.plots.borrow(), vec![PlotState::Hidden]);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_disable_start_only_during_the_request() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            controller.start(&valid_form()).await.unwrap();
            assert_eq!(*view.start_enabled.borrow(), vec![false, true]);

            api.start_results.borrow_mut().push_back(Err(ApiError::Http {
                status: 500,
                body: "boom".to_string(),
            }));
            let _ = controller.start(&valid_form()).await;
            assert_eq!(*view.start_enabled.borrow(), vec![false, true, false, true]);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_render_failure_and_not_poll_on_http_error() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            api.start_results.borrow_mut().push_back(Err(ApiError::Http {
                status: 409,
                body: "already running".to_string(),
            }));

            let result = controller.start(&valid_form()).await;
            assert!(matches!(
                result,
                Err(StartError::Api(ApiError::Http { status: 409, .. }))
            ));
            assert_eq!(
                view.last_panel(),
                Some(StatusPanel::failure("Failed to start test"))
            );
            assert!(!controller.poller().is_active());

            tokio::time::sleep(Duration::from_secs(3)).await;
            assert_eq!(api.status_calls.get(), 0);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_render_error_panel_on_transport_failure() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::FreshRotten);
            api.start_results
                .borrow_mut()
                .push_back(Err(ApiError::Transport("connection refused".to_string())));

            let result = controller.start(&valid_form()).await;
            assert!(matches!(result, Err(StartError::Api(ApiError::Transport(_)))));
            assert_eq!(
                view.last_panel(),
                Some(StatusPanel::failure("Error starting test"))
            );
            assert_eq!(*view.start_enabled.borrow(), vec![false, true]);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_reject_invalid_form_without_a_request() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            let form = StartForm {
                cycles: "three".to_string(),
                duration: "5".to_string(),
                ..StartForm::default()
            };

            let result = controller.start(&form).await;
            assert!(matches!(result, Err(StartError::Invalid(_))));
            assert!(api.starts.borrow().is_empty());

            let panel = view.last_panel().unwrap();
            assert_eq!(panel.tone, PanelTone::Error);
            assert!(panel.message.starts_with("Invalid input: cycles"));
            assert!(view.start_enabled.borrow().is_empty());
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_tracking_running_test_when_start_is_rejected() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            let ticket = controller.begin_polling();
            api.start_results.borrow_mut().push_back(Err(ApiError::Http {
                status: 409,
                body: "already running".to_string(),
            }));

            let result = controller.start(&valid_form()).await;
            assert!(matches!(result, Err(StartError::Api(_))));
            assert!(controller.poller().is_current(ticket));

            tokio::time::sleep(Duration::from_millis(3500)).await;
            assert_eq!(api.status_calls.get(), 3);
            assert_eq!(view.last_panel().unwrap().message, "Touch Phase");
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_suppress_start_failure_after_a_newer_stop() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            api.start_delay.set(Duration::from_millis(500));
            api.start_results.borrow_mut().push_back(Err(ApiError::Http {
                status: 500,
                body: "boom".to_string(),
            }));
            let form = valid_form();

            let (start, stop) = tokio::join!(controller.start(&form), controller.stop());

            assert!(matches!(
                start,
                Err(StartError::Api(ApiError::Http { status: 500, .. }))
            ));
            assert_eq!(stop.unwrap(), StopOutcome::Stopped);
            assert_eq!(
                *view.panels.borrow(),
                vec![StatusPanel::starting(), StatusPanel::stopped_by_user()]
            );
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_poll_when_start_is_acknowledged_after_a_stop() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            api.start_delay.set(Duration::from_millis(500));
            let form = valid_form();

            let (start, stop) = tokio::join!(controller.start(&form), controller.stop());

            assert_eq!(start.unwrap(), StartOutcome::Superseded);
            assert_eq!(stop.unwrap(), StopOutcome::Stopped);
            assert_eq!(view.last_panel(), Some(StatusPanel::stopped_by_user()));
            assert!(!controller.poller().is_active());

            tokio::time::sleep(Duration::from_secs(3)).await;
            assert_eq!(api.status_calls.get(), 0);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_render_stopped_panel_after_a_newer_start() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            api.stop_delay.set(Duration::from_millis(500));
            let form = valid_form();

            let (stop, start) = tokio::join!(controller.stop(), controller.start(&form));

            assert_eq!(stop.unwrap(), StopOutcome::Superseded);
            assert!(matches!(start, Ok(StartOutcome::Started(_))));
            assert_eq!(*view.panels.borrow(), vec![StatusPanel::starting()]);
            assert!(controller.poller().is_active());
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_exactly_one_poll_after_double_start() {
        in_local_set(async {
            let (controller, api, _) = make_controller(ClassificationType::SoftHard);
            let first = controller.start(&valid_form()).await.unwrap();
            let second = controller.start(&valid_form()).await.unwrap();
            assert_ne!(first, second);

            tokio::time::sleep(Duration::from_millis(1500)).await;
            assert_eq!(api.status_calls.get(), 1);

            tokio::time::sleep(Duration::from_secs(1)).await;
            assert_eq!(api.status_calls.get(), 2);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_poll_every_interval_until_finished() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            {
                let mut statuses = api.statuses.borrow_mut();
                statuses.push_back(Ok(running("Touch Phase", 1.0)));
                statuses.push_back(Ok(finished("Test Completed", "Hard")));
            }

            controller.begin_polling();
            tokio::time::sleep(Duration::from_millis(1500)).await;
            assert_eq!(api.status_calls.get(), 1);
            assert_eq!(view.last_panel().unwrap().tone, PanelTone::Running);

            tokio::time::sleep(Duration::from_secs(5)).await;
            assert_eq!(api.status_calls.get(), 2);
            assert!(!controller.poller().is_active());

            let panel = view.last_panel().unwrap();
            assert_eq!(panel.tone, PanelTone::Success);
            assert_eq!(panel.result_line().as_deref(), Some("Classification: Hard"));
            assert_eq!(panel.average_line().as_deref(), Some("Average: 412.50"));
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_skip_tick_on_fetch_error_and_keep_polling() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            {
                let mut statuses = api.statuses.borrow_mut();
                statuses.push_back(Err(ApiError::Http {
                    status: 503,
                    body: "busy".to_string(),
                }));
                statuses.push_back(Err(ApiError::Transport("offline".to_string())));
            }

            controller.begin_polling();
            tokio::time::sleep(Duration::from_millis(2500)).await;
            assert_eq!(api.status_calls.get(), 2);
            assert!(view.panels.borrow().is_empty());
            assert!(controller.poller().is_active());

            tokio::time::sleep(Duration::from_secs(1)).await;
            assert_eq!(api.status_calls.get(), 3);
            assert_eq!(view.panels.borrow().len(), 1);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_show_plot_once_when_finished() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            api.statuses
                .borrow_mut()
                .push_back(Ok(finished("Test Completed", "Soft")));

            let ticket = controller.poller().start();
            let outcome = controller.poll_once(ticket).await.unwrap();

            assert_eq!(
                outcome,
                TickOutcome::Finished {
                    plot_src: format!("/api/plot_img?t={NOW}")
                }
            );
            assert_eq!(view.shown_plots(), vec![format!("/api/plot_img?t={NOW}")]);
            assert!(!controller.poller().is_active());
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_bust_plot_cache_between_completions() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::FreshRotten);
            {
                let mut statuses = api.statuses.borrow_mut();
                statuses.push_back(Ok(finished("Test Completed", "Fresh")));
                statuses.push_back(Ok(finished("Test Completed", "Rotten")));
            }

            let ticket = controller.poller().start();
            controller.poll_once(ticket).await.unwrap();
            let ticket = controller.poller().start();
            controller.poll_once(ticket).await.unwrap();

            let plots = view.shown_plots();
            assert_eq!(plots.len(), 2);
            assert_ne!(plots[0], plots[1]);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_mark_stopped_run_as_error() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            let mut stopped = finished("Test stopped early", "");
            stopped.average = Some(0.0);
            api.statuses.borrow_mut().push_back(Ok(stopped));

            let ticket = controller.poller().start();
            controller.poll_once(ticket).await.unwrap();

            let panel = view.last_panel().unwrap();
            assert_eq!(panel.css_class(), "status error");
            assert_eq!(panel.average_line(), None);
            assert_eq!(panel.result_line(), None);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_do_nothing_when_stop_is_declined() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            let ticket = controller.poller().start();
            view.confirm_answer.set(false);

            let outcome = controller.stop().await.unwrap();
            assert_eq!(outcome, StopOutcome::Declined);
            assert_eq!(view.confirms.get(), 1);
            assert_eq!(api.stop_calls.get(), 0);
            assert!(view.panels.borrow().is_empty());
            assert!(controller.poller().is_current(ticket));
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_render_stopped_panel_after_stop() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            controller.start(&valid_form()).await.unwrap();

            let outcome = controller.stop().await.unwrap();
            assert_eq!(outcome, StopOutcome::Stopped);
            assert_eq!(api.stop_calls.get(), 1);
            assert_eq!(view.last_panel(), Some(StatusPanel::stopped_by_user()));
            assert!(!controller.poller().is_active());

            tokio::time::sleep(Duration::from_secs(3)).await;
            assert_eq!(api.status_calls.get(), 0);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_polling_when_stop_fails() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            let ticket = controller.poller().start();
            api.stop_results.borrow_mut().push_back(Err(ApiError::Http {
                status: 500,
                body: "cannot stop".to_string(),
            }));

            let result = controller.stop().await;
            assert!(matches!(result, Err(ApiError::Http { status: 500, .. })));
            assert!(view.panels.borrow().is_empty());
            assert!(controller.poller().is_current(ticket));
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_discard_status_issued_before_stop() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            api.status_delay.set(Duration::from_millis(500));
            let ticket = controller.poller().start();

            let (tick, stop) = tokio::join!(controller.poll_once(ticket), controller.stop());

            assert_eq!(tick.unwrap(), TickOutcome::Stale);
            assert_eq!(stop.unwrap(), StopOutcome::Stopped);
            assert_eq!(view.last_panel(), Some(StatusPanel::stopped_by_user()));
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_discard_status_overtaken_by_newer_one() {
        in_local_set(async {
            let (controller, api, view) = make_controller(ClassificationType::SoftHard);
            let ticket = controller.poller().start();

            api.status_delay.set(Duration::from_millis(800));
            api.statuses
                .borrow_mut()
                .push_back(Ok(running("Touch Phase", 1.0)));
            let slow = controller.poll_once(ticket);

            let fast = async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                api.status_delay.set(Duration::ZERO);
                api.statuses
                    .borrow_mut()
                    .push_back(Ok(running("Untouch Phase", 2.0)));
                controller.poll_once(ticket).await
            };

            let (slow, fast) = tokio::join!(slow, fast);
            assert_eq!(fast.unwrap(), TickOutcome::Running);
            assert_eq!(slow.unwrap(), TickOutcome::Stale);
            assert_eq!(view.panels.borrow().len(), 1);
            assert_eq!(view.last_panel().unwrap().message, "Untouch Phase");
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_replace_plot_with_error_on_load_failure() {
        in_local_set(async {
            let (controller, _, view) = make_controller(ClassificationType::SoftHard);
            controller.plot_loaded();
            assert!(view.plots.borrow().is_empty());

            controller.plot_failed();
            assert_eq!(*view.plots.borrow(), vec![PlotState::Failed]);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_polling_on_shutdown() {
        in_local_set(async {
            let (controller, api, _) = make_controller(ClassificationType::SoftHard);
            controller.begin_polling();
            controller.shutdown();

            tokio::time::sleep(Duration::from_secs(3)).await;
            assert_eq!(api.status_calls.get(), 0);
        })
        .await;
    }
}
