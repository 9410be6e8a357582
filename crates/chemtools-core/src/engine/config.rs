use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid unknown-key policy '{0}'. Expected 'reject' or 'ignore'.")]
    InvalidPolicy(String),
}

/// What a reader does with a key outside the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeyPolicy {
    /// The key is a violation.
    #[default]
    Reject,
    /// The entry is dropped with a warning, for forward compatibility.
    Ignore,
}

impl FromStr for UnknownKeyPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(UnknownKeyPolicy::Reject),
            "ignore" => Ok(UnknownKeyPolicy::Ignore),
            _ => Err(ConfigError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for UnknownKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownKeyPolicy::Reject => write!(f, "reject"),
            UnknownKeyPolicy::Ignore => write!(f, "ignore"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    pub unknown_keys: UnknownKeyPolicy,
    /// Enforce element types, shape classes and cross-array lengths.
    pub check_shapes: bool,
    /// `nuc_` keys need `coords` and `nums` in the same archive.
    pub require_atoms_for_nuclear: bool,
    /// An archive without any arrays is acceptable.
    pub allow_empty: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            unknown_keys: UnknownKeyPolicy::Reject,
            check_shapes: true,
            require_atoms_for_nuclear: true,
            allow_empty: true,
        }
    }
}

#[derive(Default)]
pub struct ValidationConfigBuilder {
    unknown_keys: Option<UnknownKeyPolicy>,
    check_shapes: Option<bool>,
    require_atoms_for_nuclear: Option<bool>,
    allow_empty: Option<bool>,
}

impl ValidationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unknown_keys(mut self, policy: UnknownKeyPolicy) -> Self {
        self.unknown_keys = Some(policy);
        self
    }
    pub fn check_shapes(mut self, enabled: bool) -> Self {
        self.check_shapes = Some(enabled);
        self
    }
    pub fn require_atoms_for_nuclear(mut self, enabled: bool) -> Self {
        self.require_atoms_for_nuclear = Some(enabled);
        self
    }
    pub fn allow_empty(mut self, enabled: bool) -> Self {
        self.allow_empty = Some(enabled);
        self
    }

    pub fn build(self) -> ValidationConfig {
        let defaults = ValidationConfig::default();
        ValidationConfig {
            unknown_keys: self.unknown_keys.unwrap_or(defaults.unknown_keys),
            check_shapes: self.check_shapes.unwrap_or(defaults.check_shapes),
            require_atoms_for_nuclear: self
                .require_atoms_for_nuclear
                .unwrap_or(defaults.require_atoms_for_nuclear),
            allow_empty: self.allow_empty.unwrap_or(defaults.allow_empty),
        }
    }
}
