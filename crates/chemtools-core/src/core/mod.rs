//! # Core Module
//!
//! Stateless building blocks for working with property archives.
//!
//! - **Key Vocabulary** ([`keys`]) - The controlled key table, the key grammar
//!   (`nuc_` prefix, orbital and temperature qualifiers) and the parsed
//!   [`keys::ArchiveKey`] type.
//! - **Data Models** ([`models`]) - Array payloads, raw archives as read from
//!   disk, and the immutable [`models::record::ArchiveRecord`].
//! - **File I/O** ([`io`]) - The [`io::traits::ArchiveFile`] interface and its
//!   `.npz` implementation.

pub mod io;
pub mod keys;
pub mod models;
