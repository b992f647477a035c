//! forge
//!
//! Abstraction for remote forges that host issues and discussions.
//!
//! # Architecture
//!
//! The `Forge` trait defines the read-only interface the fetch pipeline
//! consumes. Commands depend on the trait, so the pipeline runs the same
//! against GitHub and against the in-memory mock.
//!
//! # Modules
//!
//! - `traits`: Core `Forge` trait, options, and error type
//! - [`github`]: GitHub implementation using REST and GraphQL APIs
//! - [`mock`]: Mock implementation for deterministic testing

pub mod github;
pub mod mock;
mod traits;

pub use traits::*;
