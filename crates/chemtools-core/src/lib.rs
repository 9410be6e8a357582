//! # ChemTools Core Library
//!
//! Typed access to the compressed array archives that store computed chemical
//! properties (atomic numbers, coordinates, densities, gradients, Hessians,
//! kinetic energy densities, localization functions, critical points), together
//! with the conceptual density functional theory tools that interpret them.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** The key vocabulary and key grammar
//!   (`keys`), the array and record data models (`models`), and reading and
//!   writing `.npz` archives (`io`).
//!
//! - **[`engine`]: The Validation Core.** Configuration, the rules that decide
//!   whether a raw archive is a well-formed record, the resulting reports, and
//!   progress reporting.
//!
//! - **[`workflows`]: The Public API.** Whole procedures built from the layers
//!   below, such as validating a batch of archive files or summarizing one.
//!
//! - **[`conceptual`]: Reactivity Descriptors.** Global energy models
//!   (quadratic, rational) and Fukui-function based local descriptors.

pub mod conceptual;
pub mod core;
pub mod engine;
pub mod workflows;
