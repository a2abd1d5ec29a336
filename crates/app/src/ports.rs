//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! The dashboard runs on a single-threaded event loop, so futures returned by
//! ports are not required to be `Send`.

pub mod preferences;
pub mod run_api;
pub mod runtime;
pub mod view;

pub use preferences::{PreferenceError, PreferenceStore};
pub use run_api::{ApiError, RunApi};
pub use runtime::Runtime;
pub use view::DashboardView;
