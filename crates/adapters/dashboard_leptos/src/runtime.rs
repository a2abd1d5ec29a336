//! Browser event-loop runtime.

use std::future::Future;
use std::time::Duration;

use gpro_app::ports::Runtime;

/// Timers from `gloo-timers`, tasks on the Leptos local executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }

    fn spawn_local(&self, task: impl Future<Output = ()> + 'static) {
        leptos::task::spawn_local(task);
    }
}
