use super::config::{UnknownKeyPolicy, ValidationConfig};
use super::report::{ValidationReport, Violation};
use crate::core::keys::{ArchiveKey, KeyError, Quantity};
use crate::core::models::array::ArrayData;
use crate::core::models::raw::RawArchive;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Applies the archive rules to raw file content.
///
/// All violations are collected; validation never stops at the first one.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

/// A leading-dimension reference other arrays are compared against.
struct Reference {
    key: String,
    len: usize,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn validate(&self, raw: &RawArchive) -> ValidationReport {
        let mut report = ValidationReport::default();

        if raw.is_empty() && !self.config.allow_empty {
            report.push(Violation::EmptyArchive);
        }

        let entries = self.check_keys(raw, &mut report);

        if self.config.check_shapes {
            let well_shaped = check_shapes(&entries, &mut report);
            check_lengths(&well_shaped, &mut report);
        }
        if self.config.require_atoms_for_nuclear {
            check_nuclear_support(&entries, &mut report);
        }

        debug!(
            arrays = raw.len(),
            violations = report.violations().len(),
            ignored = report.ignored_keys().len(),
            "Validated archive content."
        );
        report
    }

    fn check_keys<'a>(
        &self,
        raw: &'a RawArchive,
        report: &mut ValidationReport,
    ) -> Vec<(ArchiveKey, &'a ArrayData)> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(raw.len());

        for entry in raw.iter() {
            let name = entry.name();
            match name.parse::<ArchiveKey>() {
                Ok(key) => {
                    if !seen.insert(name) {
                        report.push(Violation::DuplicateKey {
                            key: name.to_string(),
                        });
                        continue;
                    }
                    entries.push((key, entry.data()));
                }
                Err(KeyError::Unknown(_)) if self.config.unknown_keys == UnknownKeyPolicy::Ignore => {
                    warn!("Ignoring array with unknown key '{}'.", name);
                    report.ignore(name);
                }
                Err(KeyError::Unknown(_)) => report.push(Violation::UnknownKey {
                    key: name.to_string(),
                }),
                Err(source) => report.push(Violation::InvalidKey {
                    key: name.to_string(),
                    source,
                }),
            }
        }
        entries
    }
}

/// Checks element types and shape classes, returning the entries that pass.
fn check_shapes<'a>(
    entries: &[(ArchiveKey, &'a ArrayData)],
    report: &mut ValidationReport,
) -> Vec<(ArchiveKey, &'a ArrayData)> {
    let mut well_shaped = Vec::with_capacity(entries.len());
    for (key, data) in entries {
        let shape = key.shape();
        let mut ok = true;
        if data.element_type() != shape.element_type() {
            report.push(Violation::WrongElementType {
                key: key.to_string(),
                expected: shape.element_type(),
                found: data.element_type(),
            });
            ok = false;
        }
        if !shape.accepts(data.shape()) {
            report.push(Violation::WrongShape {
                key: key.to_string(),
                expected: shape.notation(),
                found: data.shape().to_vec(),
            });
            ok = false;
        }
        if ok {
            well_shaped.push((key.clone(), *data));
        }
    }
    well_shaped
}

fn leading(entries: &[(ArchiveKey, &ArrayData)], quantity: &Quantity) -> Option<Reference> {
    entries
        .iter()
        .find(|(key, _)| !key.at_nuclei() && key.quantity() == quantity)
        .and_then(|(key, data)| {
            data.leading_dim().map(|len| Reference {
                key: key.to_string(),
                len,
            })
        })
}

fn compare(key: &ArchiveKey, found: usize, reference: &Reference, report: &mut ValidationReport) {
    if found != reference.len {
        report.push(Violation::LengthMismatch {
            key: key.to_string(),
            reference: reference.key.clone(),
            expected: reference.len,
            found,
        });
    }
}

/// Cross-array length rules, applied to entries whose own shape is valid.
fn check_lengths(entries: &[(ArchiveKey, &ArrayData)], report: &mut ValidationReport) {
    let nums = leading(entries, &Quantity::AtomicNumbers);
    let coords = leading(entries, &Quantity::Coordinates);

    if let (Some(nums), Some(coords)) = (&nums, &coords) {
        let key = ArchiveKey::grid(Quantity::Coordinates);
        compare(&key, coords.len, nums, report);
    }

    let atoms = nums.or(coords);
    let mut grid = leading(entries, &Quantity::Points);

    for (key, data) in entries {
        if !key.shape().is_field() {
            continue;
        }
        let Some(found) = data.leading_dim() else {
            continue;
        };
        if key.at_nuclei() {
            if let Some(atoms) = &atoms {
                compare(key, found, atoms, report);
            }
        } else {
            match &grid {
                Some(grid) => compare(key, found, grid, report),
                None => {
                    grid = Some(Reference {
                        key: key.to_string(),
                        len: found,
                    })
                }
            }
        }
    }
}

fn check_nuclear_support(entries: &[(ArchiveKey, &ArrayData)], report: &mut ValidationReport) {
    let has = |quantity: &Quantity| {
        entries
            .iter()
            .any(|(key, _)| !key.at_nuclei() && key.quantity() == quantity)
    };
    let mut missing = Vec::new();
    if !has(&Quantity::Coordinates) {
        missing.push("coords");
    }
    if !has(&Quantity::AtomicNumbers) {
        missing.push("nums");
    }
    if missing.is_empty() {
        return;
    }
    for (key, _) in entries.iter().filter(|(key, _)| key.at_nuclei()) {
        report.push(Violation::MissingAtoms {
            key: key.to_string(),
            missing: missing.clone(),
        });
    }
}
