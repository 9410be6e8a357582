//! Archive keys: the controlled vocabulary and its grammar.
//!
//! Every array in an archive is addressed by a short key. Fixed keys (`dens`,
//! `coords`, ...) name one quantity; templated keys carry a concrete qualifier
//! (`orb_7`, `dens_t300`); a `nuc_` prefix marks a quantity sampled at the
//! nuclear positions instead of the grid.

pub mod key;
pub mod vocabulary;

pub use key::{ArchiveKey, CriticalPointKind, KeyError, OrbitalIndex, Temperature};
pub use vocabulary::{ElementType, KeySpec, Quantity, QualifierKind, ValueShape, vocabulary};
