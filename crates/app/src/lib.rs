//! # gpro-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RunApi` — start, stop, and query the current test run
//!   - `DashboardView` — render the status panel, plot, and start control
//!   - `Runtime` — timers and local task spawning
//!   - `PreferenceStore` — persisted UI preferences
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DashboardController` — start, stop, and poll a run
//!   - `ThemeService` — read and toggle the dark-mode preference
//! - Provide the in-process **poller** and **request sequence** that keep
//!   exactly one poll alive and stale responses off the screen
//! - Load the dashboard **configuration**
//!
//! ## Dependency rule
//! Depends on `gpro-domain` only. Never imports adapter or browser crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod poller;
pub mod ports;
pub mod sequence;
pub mod services;
