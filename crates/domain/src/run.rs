//! Run — the request that starts a test and the status snapshot it reports.

use serde::{Deserialize, Serialize};

use crate::classification::ClassificationType;
use crate::error::ValidationError;

/// Soft/hard threshold used when the form leaves it out.
pub const DEFAULT_SOFT_THRESHOLD: u32 = 350;

/// Fresh/rotten threshold used when the form leaves it out.
pub const DEFAULT_FRESH_THRESHOLD: u32 = 750;

/// Body of `POST /api/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRequest {
    pub classification_type: ClassificationType,
    pub cycles: u32,
    /// Length of each touch/untouch phase, in seconds.
    pub duration: u32,
    pub soft_threshold: u32,
    pub fresh_threshold: u32,
}

/// Fallback thresholds applied when a form omits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub soft: u32,
    pub fresh: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            soft: DEFAULT_SOFT_THRESHOLD,
            fresh: DEFAULT_FRESH_THRESHOLD,
        }
    }
}

/// Raw text of the test form inputs, exactly as typed.
///
/// Threshold inputs are only rendered for the matching mode, so they are
/// optional here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartForm {
    pub cycles: String,
    pub duration: String,
    pub soft_threshold: Option<String>,
    pub fresh_threshold: Option<String>,
}

impl StartForm {
    /// Parse the form into a [`StartRequest`] for the given mode.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `cycles` or `duration` is blank,
    /// not a whole number, or zero, or when a non-blank threshold is not a
    /// whole number.
    pub fn parse(
        &self,
        classification_type: ClassificationType,
        defaults: Thresholds,
    ) -> Result<StartRequest, ValidationError> {
        let cycles = parse_required("cycles", &self.cycles)?;
        let duration = parse_required("duration", &self.duration)?;
        let soft_threshold =
            parse_optional("soft_threshold", self.soft_threshold.as_deref())?.unwrap_or(defaults.soft);
        let fresh_threshold = parse_optional("fresh_threshold", self.fresh_threshold.as_deref())?
            .unwrap_or(defaults.fresh);

        Ok(StartRequest {
            classification_type,
            cycles,
            duration,
            soft_threshold,
            fresh_threshold,
        })
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

fn parse_required(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    let value = parse_number(field, raw)?;
    if value == 0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(value)
}

fn parse_optional(field: &'static str, raw: Option<&str>) -> Result<Option<u32>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_number(field, raw).map(Some),
    }
}

/// Body of `GET /api/status` — a snapshot of the current run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Human-readable phase, e.g. `"Touch Phase | Running Soft Hard Test..."`.
    pub status: String,
    /// Seconds since the run started.
    pub elapsed_time: f64,
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub finished: bool,
}

impl StatusResponse {
    /// Whether the backend reports the run as stopped rather than completed.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.status.contains("stopped")
    }
}
