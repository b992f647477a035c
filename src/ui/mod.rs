//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware message helpers
//! - [`report`] - Bug analysis report rendering

pub mod output;
pub mod report;
