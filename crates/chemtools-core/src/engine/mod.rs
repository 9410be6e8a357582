//! # Engine Module
//!
//! Decides whether the content of an archive file is a well-formed record.
//!
//! - [`config`] - What to enforce ([`config::ValidationConfig`] and its builder).
//! - [`rules`] - The [`rules::Validator`] that applies key, uniqueness, element
//!   type, shape and nuclear-position rules to a raw archive.
//! - [`report`] - The collected [`report::Violation`]s of one archive.
//! - [`error`] - Error types raised when a report is turned into a result.
//! - [`progress`] - Progress events for long-running batch work.

pub mod config;
pub mod error;
pub mod progress;
pub mod report;
pub mod rules;
