//! Result plot — where the finished run's image lives and what the area shows.

/// What the plot area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlotState {
    #[default]
    Hidden,
    /// Visible, loading or displaying `src`.
    Showing { src: String },
    /// The image failed to load.
    Failed,
}

impl PlotState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Image source, if one is being shown.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Showing { src } => Some(src),
            Self::Hidden | Self::Failed => None,
        }
    }
}

/// Inline message replacing a plot that failed to load.
pub const PLOT_ERROR_MESSAGE: &str = "Error: Unable to load plot. Check server logs.";

/// Hands out strictly increasing cache-busting tokens.
///
/// Tokens follow the wall clock in milliseconds but never repeat, even when
/// two runs finish within the same millisecond.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheBuster {
    last: i64,
}

impl CacheBuster {
    /// Return the next token given the current time in milliseconds.
    #[must_use]
    pub fn next(&mut self, now_millis: i64) -> i64 {
        self.last = now_millis.max(self.last + 1);
        self.last
    }
}

/// Build the plot image URL with its `t` cache-busting parameter.
#[must_use]
pub fn plot_url(path: &str, token: i64) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}t={token}")
}
