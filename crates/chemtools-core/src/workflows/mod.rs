//! # Workflows Module
//!
//! High-level entry points that combine archive I/O with the validation engine.
//!
//! - **Batch Validation** ([`validate`]) - Reads and validates many archive files
//!   in parallel, reporting progress per file.
//! - **Inspection** ([`inspect`]) - Describes every array of one archive without
//!   rejecting anything, for exploring files of unknown provenance.

pub mod inspect;
pub mod validate;
