use super::vocabulary::{KeySpec, Quantity, ValueShape};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

/// Prefix marking a quantity sampled at the nuclear positions.
pub const NUCLEAR_PREFIX: &str = "nuc_";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("key is empty")]
    Empty,
    #[error("key '{0}' contains whitespace")]
    Whitespace(String),
    #[error("key '{0}' still contains a template placeholder")]
    UnresolvedTemplate(String),
    #[error("unknown key '{0}'")]
    Unknown(String),
    #[error("invalid orbital index '{qualifier}' in key '{key}'")]
    InvalidOrbitalIndex { key: String, qualifier: String },
    #[error("invalid temperature '{qualifier}' in key '{key}'")]
    InvalidTemperature { key: String, qualifier: String },
    #[error("quantity of key '{0}' cannot be sampled at nuclear positions")]
    NuclearPrefixNotAllowed(String),
}

impl KeyError {
    /// Returns `true` for keys that are simply outside the vocabulary, as
    /// opposed to keys that use the vocabulary incorrectly.
    pub fn is_unknown(&self) -> bool {
        matches!(self, KeyError::Unknown(_))
    }
}

/// Canonical digits: `0` or a digit string without leading zeros.
fn is_canonical_integer(s: &str) -> bool {
    match s.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

/// Index of an orbital in an `orb_{xx}` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrbitalIndex(pub u32);

impl OrbitalIndex {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for OrbitalIndex {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_canonical_integer(s) {
            return Err(());
        }
        s.parse().map(OrbitalIndex).map_err(|_| ())
    }
}

impl fmt::Display for OrbitalIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Temperature qualifier of `dens_t{x}`, `dens_state_t{x}` and `smu_t{x}` keys.
///
/// The literal is kept in canonical decimal form (`300`, `0.5`, never `300.0`
/// or `0300`) so that one temperature maps to exactly one key string.
#[derive(Debug, Clone)]
pub struct Temperature {
    literal: String,
    value: f64,
}

impl Temperature {
    /// Builds a qualifier from a numeric temperature.
    pub fn from_value(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        // `Display` for f64 never uses exponent notation and drops a zero fraction.
        format!("{}", value).parse().ok()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.literal
    }
}

impl FromStr for Temperature {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (integer, fraction) = match s.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (s, None),
        };
        if !is_canonical_integer(integer) {
            return Err(());
        }
        if let Some(fraction) = fraction {
            let valid = !fraction.is_empty()
                && fraction.bytes().all(|b| b.is_ascii_digit())
                && !fraction.ends_with('0');
            if !valid {
                return Err(());
            }
        }
        let value: f64 = s.parse().map_err(|_| ())?;
        if !value.is_finite() {
            return Err(());
        }
        Ok(Self {
            literal: s.to_string(),
            value,
        })
    }
}

impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        self.literal == other.literal
    }
}

impl Eq for Temperature {}

impl Hash for Temperature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.literal.hash(state);
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// The four kinds of critical points stored in an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriticalPointKind {
    NonNuclearAttractor,
    Bond,
    Ring,
    Cage,
}

impl CriticalPointKind {
    pub const ALL: [CriticalPointKind; 4] = [
        CriticalPointKind::NonNuclearAttractor,
        CriticalPointKind::Bond,
        CriticalPointKind::Ring,
        CriticalPointKind::Cage,
    ];

    pub fn quantity(self) -> Quantity {
        match self {
            CriticalPointKind::NonNuclearAttractor => Quantity::NonNuclearAttractors,
            CriticalPointKind::Bond => Quantity::BondCriticalPoints,
            CriticalPointKind::Ring => Quantity::RingCriticalPoints,
            CriticalPointKind::Cage => Quantity::CageCriticalPoints,
        }
    }

    pub fn key(self) -> &'static str {
        self.quantity().spec().prefix
    }
}

/// A fully-qualified archive key, e.g. `coords`, `orb_12` or `nuc_dens_t300`.
///
/// Parsing accepts only canonical strings, so `key.to_string()` always
/// reproduces the text the key was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveKey {
    at_nuclei: bool,
    quantity: Quantity,
}

impl ArchiveKey {
    /// A key without the `nuc_` prefix: a grid field or a non-field quantity.
    pub fn grid(quantity: Quantity) -> Self {
        Self {
            at_nuclei: false,
            quantity,
        }
    }

    /// A `nuc_` key. Fails if the quantity is not a field.
    pub fn nuclear(quantity: Quantity) -> Result<Self, KeyError> {
        if !quantity.spec().nuclear {
            return Err(KeyError::NuclearPrefixNotAllowed(format!(
                "{}{}",
                NUCLEAR_PREFIX, quantity
            )));
        }
        Ok(Self {
            at_nuclei: true,
            quantity,
        })
    }

    pub fn orbital(index: u32) -> Self {
        Self::grid(Quantity::Orbital(OrbitalIndex(index)))
    }

    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    pub fn at_nuclei(&self) -> bool {
        self.at_nuclei
    }

    pub fn spec(&self) -> &'static KeySpec {
        self.quantity.spec()
    }

    pub fn shape(&self) -> ValueShape {
        self.quantity.shape()
    }

    /// A human-readable description including the concrete qualifier.
    pub fn describe(&self) -> String {
        let base = match &self.quantity {
            Quantity::Orbital(index) => format!("Orbital value for orbital index {}", index),
            Quantity::ThermalDensity(t) => format!("Electron density at temperature {}", t),
            Quantity::ThermalStateDensity(t) => {
                format!("Reference-state electron density at temperature {}", t)
            }
            Quantity::ThermalSoftness(t) => format!(
                "Local softness (density derivative with respect to the chemical potential) at temperature {}",
                t
            ),
            other => other.spec().description.to_string(),
        };
        if self.at_nuclei {
            format!("{} at the nuclear positions", base)
        } else {
            base
        }
    }
}

fn parse_quantity(body: &str, key: &str) -> Result<Quantity, KeyError> {
    if let Some(quantity) = Quantity::lookup_fixed(body) {
        return Ok(quantity);
    }

    type Thermal = fn(Temperature) -> Quantity;
    let thermal: [(&str, Thermal); 3] = [
        ("dens_state_t", Quantity::ThermalStateDensity),
        ("dens_t", Quantity::ThermalDensity),
        ("smu_t", Quantity::ThermalSoftness),
    ];
    for (prefix, build) in thermal {
        if let Some(qualifier) = body.strip_prefix(prefix) {
            let temperature =
                qualifier
                    .parse::<Temperature>()
                    .map_err(|_| KeyError::InvalidTemperature {
                        key: key.to_string(),
                        qualifier: qualifier.to_string(),
                    })?;
            return Ok(build(temperature));
        }
    }

    if let Some(qualifier) = body.strip_prefix("orb_") {
        let index = qualifier
            .parse::<OrbitalIndex>()
            .map_err(|_| KeyError::InvalidOrbitalIndex {
                key: key.to_string(),
                qualifier: qualifier.to_string(),
            })?;
        return Ok(Quantity::Orbital(index));
    }

    Err(KeyError::Unknown(key.to_string()))
}

impl FromStr for ArchiveKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeyError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(KeyError::Whitespace(s.to_string()));
        }
        if s.contains(['{', '}']) {
            return Err(KeyError::UnresolvedTemplate(s.to_string()));
        }

        let (at_nuclei, body) = match s.strip_prefix(NUCLEAR_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let quantity = parse_quantity(body, s)?;
        if at_nuclei && !quantity.spec().nuclear {
            return Err(KeyError::NuclearPrefixNotAllowed(s.to_string()));
        }
        Ok(Self {
            at_nuclei,
            quantity,
        })
    }
}

impl fmt::Display for ArchiveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.at_nuclei {
            f.write_str(NUCLEAR_PREFIX)?;
        }
        write!(f, "{}", self.quantity)
    }
}
