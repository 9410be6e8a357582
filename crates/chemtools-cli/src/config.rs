use crate::cli::ValidateArgs;
use crate::error::{CliError, Result};
use chemtools::engine::config::{UnknownKeyPolicy, ValidationConfig, ValidationConfigBuilder};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG: &str = r#"# ChemTools configuration.
# Values given on the command line take precedence over this file.

[validation]
# What to do with keys outside the vocabulary: "reject" or "ignore".
unknown-keys = "reject"
# Enforce element types, shape classes and cross-array lengths.
check-shapes = true
# Nuclear-position keys (nuc_*) need 'coords' and 'nums' in the same archive.
require-atoms-for-nuclear = true
# Accept archives without any arrays.
allow-empty = true
"#;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialValidationConfig {
    #[serde(rename = "unknown-keys")]
    unknown_keys: Option<String>,
    #[serde(rename = "check-shapes")]
    check_shapes: Option<bool>,
    #[serde(rename = "require-atoms-for-nuclear")]
    require_atoms_for_nuclear: Option<bool>,
    #[serde(rename = "allow-empty")]
    allow_empty: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    validation: Option<PartialValidationConfig>,
}

/// Location of the user configuration file, whether or not it exists.
pub fn default_config_path() -> Result<PathBuf> {
    ProjectDirs::from("org", "theochem", "chemtools")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or_else(|| CliError::Config("Could not determine config directory path.".to_string()))
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads `explicit`, or the user configuration file if one exists, or nothing.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Ok(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("No configuration file found, using defaults.");
                Ok(Self::default())
            }
        }
    }

    /// Resolves the final configuration. Command-line flags win over `--set`
    /// values, which win over the file, which wins over the defaults.
    pub fn merge_with_cli(mut self, args: &ValidateArgs) -> Result<ValidationConfig> {
        self.apply_set_values(&args.set_values)?;
        let file = self.validation.take().unwrap_or_default();

        let file_policy = file
            .unknown_keys
            .as_deref()
            .map(|s| {
                s.parse::<UnknownKeyPolicy>()
                    .map_err(|e| CliError::Config(e.to_string()))
            })
            .transpose()?;

        let mut builder = ValidationConfigBuilder::new();
        if let Some(policy) = args.unknown_keys.or(file_policy) {
            builder = builder.unknown_keys(policy);
        }
        if args.no_shape_check {
            builder = builder.check_shapes(false);
        } else if let Some(val) = file.check_shapes {
            builder = builder.check_shapes(val);
        }
        if args.allow_missing_atoms {
            builder = builder.require_atoms_for_nuclear(false);
        } else if let Some(val) = file.require_atoms_for_nuclear {
            builder = builder.require_atoms_for_nuclear(val);
        }
        if args.no_empty {
            builder = builder.allow_empty(false);
        } else if let Some(val) = file.allow_empty {
            builder = builder.allow_empty(val);
        }

        let config = builder.build();
        debug!("Resolved validation configuration: {:?}", config);
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let value_str = value_str.trim();
            let parse_bool = || {
                value_str.parse::<bool>().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })
            };

            let validation = self.validation.get_or_insert_with(Default::default);
            match key {
                "validation.unknown-keys" => {
                    value_str
                        .parse::<UnknownKeyPolicy>()
                        .map_err(|e| CliError::Config(e.to_string()))?;
                    validation.unknown_keys = Some(value_str.to_string());
                }
                "validation.check-shapes" => validation.check_shapes = Some(parse_bool()?),
                "validation.require-atoms-for-nuclear" => {
                    validation.require_atoms_for_nuclear = Some(parse_bool()?)
                }
                "validation.allow-empty" => validation.allow_empty = Some(parse_bool()?),
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn validate_args(extra: &[&str]) -> ValidateArgs {
        let mut argv = vec!["chemtools", "validate", "a.npz"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Validate(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn default_config_text_matches_the_built_in_defaults() {
        let partial = PartialConfig::from_toml(DEFAULT_CONFIG).unwrap();
        let config = partial.merge_with_cli(&validate_args(&[])).unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = PartialConfig::default()
            .merge_with_cli(&validate_args(&[]))
            .unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn file_values_are_applied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[validation]\nunknown-keys = \"ignore\"\nallow-empty = false\n",
        )
        .unwrap();

        let config = PartialConfig::load(Some(path.as_path()))
            .unwrap()
            .merge_with_cli(&validate_args(&[]))
            .unwrap();
        assert_eq!(config.unknown_keys, UnknownKeyPolicy::Ignore);
        assert!(!config.allow_empty);
        assert!(config.check_shapes);
    }

    #[test]
    fn set_values_override_file_and_flags_override_set_values() {
        let partial =
            PartialConfig::from_toml("[validation]\ncheck-shapes = true\nunknown-keys = \"ignore\"\n")
                .unwrap();
        let args = validate_args(&[
            "-S",
            "validation.check-shapes=false",
            "-S",
            "validation.unknown-keys=ignore",
            "--unknown-keys",
            "reject",
        ]);
        let config = partial.merge_with_cli(&args).unwrap();
        assert!(!config.check_shapes);
        assert_eq!(config.unknown_keys, UnknownKeyPolicy::Reject);
    }

    #[test]
    fn flags_disable_checks() {
        let partial = PartialConfig::from_toml(
            "[validation]\nrequire-atoms-for-nuclear = true\nallow-empty = true\n",
        )
        .unwrap();
        let args = validate_args(&["--allow-missing-atoms", "--no-empty", "--no-shape-check"]);
        let config = partial.merge_with_cli(&args).unwrap();
        assert!(!config.require_atoms_for_nuclear);
        assert!(!config.allow_empty);
        assert!(!config.check_shapes);
    }

    #[test]
    fn invalid_set_values_are_rejected() {
        for set in [
            "validation.check-shapes",
            "validation.check-shapes=maybe",
            "validation.unknown-keys=warn",
            "validation.color=red",
        ] {
            let result = PartialConfig::default().merge_with_cli(&validate_args(&["-S", set]));
            assert!(matches!(result, Err(CliError::Config(_))), "{}", set);
        }
    }

    #[test]
    fn invalid_policy_in_file_is_a_config_error() {
        let partial = PartialConfig::from_toml("[validation]\nunknown-keys = \"warn\"\n").unwrap();
        assert!(matches!(
            partial.merge_with_cli(&validate_args(&[])),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn unknown_fields_fail_to_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[validation]\nstrict = true\n").unwrap();
        assert!(matches!(
            PartialConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            PartialConfig::load(Some(dir.path().join("absent.toml").as_path())),
            Err(CliError::Io(_))
        ));
    }
}
