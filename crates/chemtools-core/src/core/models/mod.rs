//! # Data Models
//!
//! - [`array`] - The numeric payload of an archive entry ([`array::ArrayData`])
//!   and a keyed entry ([`array::NamedArray`]).
//! - [`raw`] - Entries exactly as stored in a file, before key interpretation.
//! - [`record`] - The validated, immutable [`record::ArchiveRecord`] and its builder.

pub mod array;
pub mod raw;
pub mod record;
