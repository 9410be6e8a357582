//! Reading and writing property archives.
//!
//! Archives are NumPy `.npz` files: a zip container with one `.npy` member per
//! array. Reading yields an uninterpreted [`crate::core::models::raw::RawArchive`];
//! turning it into a record is left to the validation engine.

pub mod npz;
pub mod traits;
