//! # Conceptual DFT Module
//!
//! Global and local reactivity descriptors derived from the energy of a system
//! at three consecutive electron counts, `E(N0-1)`, `E(N0)` and `E(N0+1)`.
//!
//! - [`energies`] - The validated three-point input.
//! - [`global`] - The [`GlobalTool`] trait: energy model primitives plus the
//!   descriptors every model derives from them.
//! - [`quadratic`] and [`rational`] - The two interpolating energy models.
//! - [`local`] - Fukui-function based local descriptors.

pub mod energies;
pub mod global;
pub mod local;
pub mod quadratic;
pub mod rational;

pub use energies::ThreePointEnergies;
pub use global::GlobalTool;
pub use local::{FukuiSide, LocalTool};
pub use quadratic::QuadraticGlobalTool;
pub use rational::RationalGlobalTool;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConceptualError {
    #[error("exactly 3 energy values are required, got {0}")]
    WrongPointCount(usize),
    #[error("number of electrons cannot be negative (got {0})")]
    NegativeElectrons(f64),
    #[error("reference number of electrons must be at least 1 (got {0})")]
    ReferenceTooSmall(f64),
    #[error("numbers of electrons must differ by exactly one (got {0:?})")]
    NotConsecutive(Vec<f64>),
    #[error(
        "quadratic model requires E(N0-1) + E(N0+1) > 2 E(N0) (curvature {curvature})"
    )]
    NotConvex { curvature: f64 },
    #[error(
        "rational model requires E(N0-1) > E(N0) >= E(N0+1) (got {minus}, {zero}, {plus})"
    )]
    NonMonotonic { minus: f64, zero: f64, plus: f64 },
    #[error("energy values do not determine a finite model")]
    DegenerateModel,
    #[error("derivative order must be at least {min} (got {order})")]
    InvalidOrder { order: u32, min: u32 },
    #[error("grand potential derivatives are available up to order 5 (got {0})")]
    UnsupportedOrder(u32),
    #[error("no number of electrons corresponds to chemical potential {0}")]
    ChemicalPotentialOutOfRange(f64),
    #[error("Fukui functions have different lengths ({plus} and {minus})")]
    FukuiLengthMismatch { plus: usize, minus: usize },
}
