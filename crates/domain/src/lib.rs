//! # gpro-domain
//!
//! Pure domain model for the gpro hardware test dashboard.
//!
//! ## Responsibilities
//! - Define the **classification modes** a test page runs (hardness, freshness)
//! - Define the **wire shapes** exchanged with the test backend
//!   (`StartRequest`, `StatusResponse`)
//! - Parse and validate raw **form input** into a start request
//! - Derive the **status panel** view model from a status snapshot
//! - Build cache-busting **plot image** URLs
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod classification;
pub mod panel;
pub mod plot;
pub mod run;
