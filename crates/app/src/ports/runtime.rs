//! Runtime port — timers and task spawning on the local event loop.

use std::future::Future;
use std::time::Duration;

/// Single-threaded async runtime the controller schedules work on.
pub trait Runtime {
    /// Resolve after `duration` without blocking the event loop.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;

    /// Run `task` to completion in the background on the current thread.
    fn spawn_local(&self, task: impl Future<Output = ()> + 'static);

    /// Current wall-clock time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64 {
        gpro_domain::time::now_millis()
    }
}
