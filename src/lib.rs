//! bugsift - fetch GitHub issues and classify bug reports
//!
//! Two pipelines share an on-disk archive:
//!
//! - **fetch**: page through a repository's issues (REST) and discussions
//!   (GraphQL) and store each record as JSON.
//! - **analyze**: load the archived issues carrying the bug label, classify
//!   them by topic, platform, hardware model and the testing strategy
//!   needed to catch them, and print a report.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer
//! - [`core`] - Domain types, records, archive paths, configuration
//! - [`forge`] - Remote issue source (GitHub) and an in-memory mock
//! - [`archive`] - Writing and loading the on-disk archive
//! - [`analysis`] - Rule-based classifiers over static tables
//! - [`ui`] - User-facing output and report rendering

pub mod analysis;
pub mod archive;
pub mod cli;
pub mod core;
pub mod forge;
pub mod ui;
