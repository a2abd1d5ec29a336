//! Status panel — the view model rendered in the status box of a test page.

use crate::run::StatusResponse;

/// Visual state of the status box; maps to a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTone {
    Running,
    Success,
    Error,
}

impl PanelTone {
    /// CSS class appended to `status`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Everything the status box shows.
///
/// `None` fields are rendered hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusPanel {
    pub tone: PanelTone,
    pub message: String,
    pub elapsed_secs: Option<f64>,
    pub average: Option<f64>,
    pub result: Option<String>,
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self {
            tone: PanelTone::Running,
            message: "Waiting...".to_string(),
            elapsed_secs: Some(0.0),
            average: None,
            result: None,
        }
    }
}

impl StatusPanel {
    /// Panel shown while a start request is in flight.
    #[must_use]
    pub fn starting() -> Self {
        Self {
            message: "Starting test...".to_string(),
            ..Self::default()
        }
    }

    /// Panel shown after the backend acknowledged a stop request.
    #[must_use]
    pub fn stopped_by_user() -> Self {
        Self {
            tone: PanelTone::Error,
            message: "Test stopped by user.".to_string(),
            ..Self::default()
        }
    }

    /// Error panel carrying only a status line.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            tone: PanelTone::Error,
            message: message.into(),
            elapsed_secs: None,
            average: None,
            result: None,
        }
    }

    /// Derive the panel from a status snapshot.
    ///
    /// A zero average and an empty result count as absent.
    #[must_use]
    pub fn from_status(status: &StatusResponse) -> Self {
        let tone = if !status.finished {
            PanelTone::Running
        } else if status.is_stopped() {
            PanelTone::Error
        } else {
            PanelTone::Success
        };

        Self {
            tone,
            message: status.status.clone(),
            elapsed_secs: Some(status.elapsed_time),
            average: status.average.filter(|avg| *avg != 0.0 && !avg.is_nan()),
            result: status.result.clone().filter(|res| !res.is_empty()),
        }
    }

    /// Full class attribute of the status box, e.g. `"status running"`.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("status {}", self.tone.css_class())
    }

    #[must_use]
    pub fn status_line(&self) -> String {
        format!("Status: {}", self.message)
    }

    #[must_use]
    pub fn elapsed_line(&self) -> Option<String> {
        self.elapsed_secs
            .map(|secs| format!("Elapsed Time: {secs}s"))
    }

    #[must_use]
    pub fn average_line(&self) -> Option<String> {
        self.average.map(|avg| format!("Average: {avg:.2}"))
    }

    #[must_use]
    pub fn result_line(&self) -> Option<String> {
        self.result
            .as_ref()
            .map(|res| format!("Classification: {res}"))
    }
}
