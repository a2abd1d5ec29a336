//! Request sequence — orders panel-affecting requests so late responses
//! cannot overwrite newer state.
//!
//! Status fetches draw plain numbers; start and stop draw *barrier* numbers.
//! A status response is applied only if it was issued after the latest
//! barrier and after the last applied status response.

use std::cell::Cell;

/// Position of a request in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seq(u64);

impl Seq {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Monotonic request counter for a single-threaded controller.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: Cell<u64>,
    barrier: Cell<u64>,
    applied: Cell<u64>,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number a status request.
    pub fn issue(&self) -> Seq {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        Seq(next)
    }

    /// Number a start or stop request; every response issued before it
    /// becomes stale.
    pub fn issue_barrier(&self) -> Seq {
        let seq = self.issue();
        self.barrier.set(seq.0);
        seq
    }

    /// Record a status response as applied if it is still fresh.
    ///
    /// Returns `false` when the response must be discarded.
    pub fn accept(&self, seq: Seq) -> bool {
        if seq.0 <= self.barrier.get() || seq.0 <= self.applied.get() {
            return false;
        }
        self.applied.set(seq.0);
        true
    }

    /// Whether no newer start or stop was issued after `seq`.
    #[must_use]
    pub fn is_latest_barrier(&self, seq: Seq) -> bool {
        self.barrier.get() == seq.0
    }
}
