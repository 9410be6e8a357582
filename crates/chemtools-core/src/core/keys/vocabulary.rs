use super::key::{OrbitalIndex, Temperature};
use phf::{Map, phf_map};
use std::fmt;

/// The element type an array must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Signed integers (stored as `int64`).
    Integer,
    /// Floating point numbers (stored as `float64`).
    Float,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Integer => write!(f, "integer"),
            ElementType::Float => write!(f, "floating point"),
        }
    }
}

/// The shape class of a quantity.
///
/// `N` is the number of atoms (length of `nums`), `M` the number of grid
/// points (rows of `points`), `K` an independent count and `S` the sample
/// count of a field: `M` on the grid, `N` for `nuc_` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueShape {
    /// `(N,)` integer atomic numbers.
    AtomicNumbers,
    /// `(N, 3)` nuclear coordinates.
    AtomCoordinates,
    /// `(M, 3)` grid points.
    GridPoints,
    /// `(K, 3)` free list of positions, e.g. critical points.
    PointList,
    /// `(S,)` one value per sample.
    ScalarField,
    /// `(S, 3)` one 3-vector per sample.
    VectorField,
    /// `(S, 3, 3)` one rank-2 tensor per sample.
    TensorField,
}

impl ValueShape {
    pub fn element_type(self) -> ElementType {
        match self {
            ValueShape::AtomicNumbers => ElementType::Integer,
            _ => ElementType::Float,
        }
    }

    /// The fixed dimensions that follow the leading (count) dimension.
    pub fn trailing_dims(self) -> &'static [usize] {
        match self {
            ValueShape::AtomicNumbers | ValueShape::ScalarField => &[],
            ValueShape::AtomCoordinates
            | ValueShape::GridPoints
            | ValueShape::PointList
            | ValueShape::VectorField => &[3],
            ValueShape::TensorField => &[3, 3],
        }
    }

    pub fn rank(self) -> usize {
        1 + self.trailing_dims().len()
    }

    /// Whether the leading dimension counts samples of a field.
    pub fn is_field(self) -> bool {
        matches!(
            self,
            ValueShape::ScalarField | ValueShape::VectorField | ValueShape::TensorField
        )
    }

    /// Returns `true` if an array of the given shape fits this class.
    pub fn accepts(self, shape: &[usize]) -> bool {
        shape.len() == self.rank() && &shape[1..] == self.trailing_dims()
    }

    pub fn notation(self) -> &'static str {
        match self {
            ValueShape::AtomicNumbers => "(N,)",
            ValueShape::AtomCoordinates => "(N, 3)",
            ValueShape::GridPoints => "(M, 3)",
            ValueShape::PointList => "(K, 3)",
            ValueShape::ScalarField => "(S,)",
            ValueShape::VectorField => "(S, 3)",
            ValueShape::TensorField => "(S, 3, 3)",
        }
    }
}

/// The kind of qualifier a templated key carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualifierKind {
    None,
    OrbitalIndex,
    Temperature,
}

/// One row of the key vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    /// The key as documented, with `{xx}`/`{x}` placeholders for templates.
    pub pattern: &'static str,
    /// The literal part of the key that precedes the qualifier.
    pub prefix: &'static str,
    pub description: &'static str,
    pub shape: ValueShape,
    pub qualifier: QualifierKind,
    /// Whether the quantity may be sampled at nuclear positions (`nuc_`).
    pub nuclear: bool,
}

const fn fixed(
    key: &'static str,
    description: &'static str,
    shape: ValueShape,
    nuclear: bool,
) -> KeySpec {
    KeySpec {
        pattern: key,
        prefix: key,
        description,
        shape,
        qualifier: QualifierKind::None,
        nuclear,
    }
}

const fn template(
    pattern: &'static str,
    prefix: &'static str,
    description: &'static str,
    qualifier: QualifierKind,
) -> KeySpec {
    KeySpec {
        pattern,
        prefix,
        description,
        shape: ValueShape::ScalarField,
        qualifier,
        nuclear: true,
    }
}

static VOCABULARY: [KeySpec; 22] = [
    fixed("nums", "Atomic numbers", ValueShape::AtomicNumbers, false),
    fixed("coords", "Cartesian coordinates of the nuclei", ValueShape::AtomCoordinates, false),
    fixed("points", "Cartesian coordinates of the grid points", ValueShape::GridPoints, false),
    fixed("dens", "Electron density", ValueShape::ScalarField, true),
    fixed("grad", "Gradient of the electron density", ValueShape::VectorField, true),
    fixed("hess", "Hessian of the electron density", ValueShape::TensorField, true),
    fixed("lap", "Laplacian of the electron density", ValueShape::ScalarField, true),
    fixed("esp", "Molecular electrostatic potential", ValueShape::ScalarField, true),
    fixed("elf", "Electron localization function", ValueShape::ScalarField, true),
    fixed("lol", "Localized orbital locator", ValueShape::ScalarField, true),
    fixed("ked_pd", "Positive-definite kinetic energy density", ValueShape::ScalarField, true),
    fixed("ked_ham", "Hamiltonian kinetic energy density", ValueShape::ScalarField, true),
    fixed("ked_tf", "Thomas-Fermi kinetic energy density", ValueShape::ScalarField, true),
    fixed("ked_w", "Weizsacker kinetic energy density", ValueShape::ScalarField, true),
    fixed("nna_coords", "Non-nuclear attractor critical points", ValueShape::PointList, false),
    fixed("bcp_coords", "Bond critical points", ValueShape::PointList, false),
    fixed("rcp_coords", "Ring critical points", ValueShape::PointList, false),
    fixed("ccp_coords", "Cage critical points", ValueShape::PointList, false),
    template("orb_{xx}", "orb_", "Orbital value for orbital index xx", QualifierKind::OrbitalIndex),
    template("dens_t{x}", "dens_t", "Electron density at temperature x", QualifierKind::Temperature),
    template(
        "dens_state_t{x}",
        "dens_state_t",
        "Reference-state electron density at temperature x",
        QualifierKind::Temperature,
    ),
    template(
        "smu_t{x}",
        "smu_t",
        "Local softness (density derivative with respect to the chemical potential) at temperature x",
        QualifierKind::Temperature,
    ),
];

/// Returns the full key vocabulary in its documented order.
pub fn vocabulary() -> &'static [KeySpec] {
    &VOCABULARY
}

/// A physical quantity addressed by an archive key, without the `nuc_` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Quantity {
    AtomicNumbers,
    Coordinates,
    Points,
    Density,
    Gradient,
    Hessian,
    Laplacian,
    ElectrostaticPotential,
    Elf,
    Lol,
    KedPositiveDefinite,
    KedHamiltonian,
    KedThomasFermi,
    KedWeizsacker,
    NonNuclearAttractors,
    BondCriticalPoints,
    RingCriticalPoints,
    CageCriticalPoints,
    Orbital(OrbitalIndex),
    ThermalDensity(Temperature),
    ThermalStateDensity(Temperature),
    ThermalSoftness(Temperature),
}

static FIXED_KEYS: Map<&'static str, Quantity> = phf_map! {
    "nums" => Quantity::AtomicNumbers,
    "coords" => Quantity::Coordinates,
    "points" => Quantity::Points,
    "dens" => Quantity::Density,
    "grad" => Quantity::Gradient,
    "hess" => Quantity::Hessian,
    "lap" => Quantity::Laplacian,
    "esp" => Quantity::ElectrostaticPotential,
    "elf" => Quantity::Elf,
    "lol" => Quantity::Lol,
    "ked_pd" => Quantity::KedPositiveDefinite,
    "ked_ham" => Quantity::KedHamiltonian,
    "ked_tf" => Quantity::KedThomasFermi,
    "ked_w" => Quantity::KedWeizsacker,
    "nna_coords" => Quantity::NonNuclearAttractors,
    "bcp_coords" => Quantity::BondCriticalPoints,
    "rcp_coords" => Quantity::RingCriticalPoints,
    "ccp_coords" => Quantity::CageCriticalPoints,
};

impl Quantity {
    /// Looks up a fixed (non-templated) key.
    pub fn lookup_fixed(key: &str) -> Option<Quantity> {
        FIXED_KEYS.get(key).cloned()
    }

    pub fn spec(&self) -> &'static KeySpec {
        let index = match self {
            Quantity::AtomicNumbers => 0,
            Quantity::Coordinates => 1,
            Quantity::Points => 2,
            Quantity::Density => 3,
            Quantity::Gradient => 4,
            Quantity::Hessian => 5,
            Quantity::Laplacian => 6,
            Quantity::ElectrostaticPotential => 7,
            Quantity::Elf => 8,
            Quantity::Lol => 9,
            Quantity::KedPositiveDefinite => 10,
            Quantity::KedHamiltonian => 11,
            Quantity::KedThomasFermi => 12,
            Quantity::KedWeizsacker => 13,
            Quantity::NonNuclearAttractors => 14,
            Quantity::BondCriticalPoints => 15,
            Quantity::RingCriticalPoints => 16,
            Quantity::CageCriticalPoints => 17,
            Quantity::Orbital(_) => 18,
            Quantity::ThermalDensity(_) => 19,
            Quantity::ThermalStateDensity(_) => 20,
            Quantity::ThermalSoftness(_) => 21,
        };
        &VOCABULARY[index]
    }

    pub fn shape(&self) -> ValueShape {
        self.spec().shape
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.spec().prefix;
        match self {
            Quantity::Orbital(index) => write!(f, "{}{}", prefix, index),
            Quantity::ThermalDensity(t)
            | Quantity::ThermalStateDensity(t)
            | Quantity::ThermalSoftness(t) => write!(f, "{}{}", prefix, t),
            _ => f.write_str(prefix),
        }
    }
}
