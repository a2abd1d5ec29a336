//! Poller — the single status poll a test page may have running.
//!
//! Every [`Poller::start`] hands out a fresh [`PollTicket`] and supersedes all
//! earlier ones. Poll loops check their ticket before each fetch and exit once
//! it is no longer current, so at most one loop ever keeps fetching.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one started poll. Only the most recent ticket is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PollTicket(u64);

#[derive(Debug, Default)]
struct PollerState {
    issued: AtomicU64,
    /// Ticket of the running poll, `0` when idle.
    active: AtomicU64,
}

/// Start/stop handle for the status poll.
///
/// Clones share state, and a clone is `Send + Sync` so teardown hooks can
/// stop polling without holding the controller.
#[derive(Debug, Clone, Default)]
pub struct Poller {
    state: Arc<PollerState>,
}

impl Poller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new poll, cancelling any running one.
    pub fn start(&self) -> PollTicket {
        let ticket = self.state.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.active.store(ticket, Ordering::SeqCst);
        PollTicket(ticket)
    }

    /// Cancel the running poll, if any.
    pub fn stop(&self) {
        self.state.active.store(0, Ordering::SeqCst);
    }

    /// Whether `ticket` belongs to the running poll.
    #[must_use]
    pub fn is_current(&self, ticket: PollTicket) -> bool {
        self.state.active.load(Ordering::SeqCst) == ticket.0
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.active.load(Ordering::SeqCst) != 0
    }
}
