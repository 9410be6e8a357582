use crate::utils::parser::{EnergyPoint, parse_energy_point};
use chemtools::engine::config::UnknownKeyPolicy;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The ChemTools Development Team",
    version,
    about = "ChemTools CLI - Validate and inspect property archives, and compute conceptual DFT reactivity descriptors.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel validation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one or more archive files against the key vocabulary and shape rules.
    Validate(ValidateArgs),
    /// List every array stored in an archive, including arrays outside the vocabulary.
    Inspect(InspectArgs),
    /// Print the archive key vocabulary.
    Keys,
    /// Parse a single archive key and explain what it stores.
    Describe(DescribeArgs),
    /// Compute global reactivity descriptors from three energies.
    Global(GlobalArgs),
    /// Manage the user configuration file.
    Config(ConfigArgs),
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Archive files (.npz) to validate.
    #[arg(required = true, value_name = "ARCHIVE")]
    pub archives: Vec<PathBuf>,

    /// Configuration file in TOML format. Defaults to the user configuration file, if present.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// What to do with keys outside the vocabulary: 'reject' or 'ignore'.
    #[arg(long, value_name = "POLICY")]
    pub unknown_keys: Option<UnknownKeyPolicy>,

    /// Skip element type, shape and length checks.
    #[arg(long)]
    pub no_shape_check: bool,

    /// Accept nuclear-position keys without 'coords' and 'nums'.
    #[arg(long)]
    pub allow_missing_atoms: bool,

    /// Treat an archive without arrays as invalid.
    #[arg(long)]
    pub no_empty: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S validation.unknown-keys=ignore
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args = 1)]
    pub set_values: Vec<String>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Archive file (.npz) to inspect.
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Print the summary as CSV instead of a table.
    #[arg(long)]
    pub csv: bool,
}

/// Arguments for the `describe` subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// An archive key, e.g. 'nuc_dens' or 'orb_12'.
    #[arg(value_name = "KEY")]
    pub key: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyModel {
    /// E(N) = a + bN + cN^2
    Quadratic,
    /// E(N) = (a0 + a1 N) / (1 + b1 N)
    Rational,
}

/// Arguments for the `global` subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Energy model interpolated through the three energies.
    #[arg(short, long, value_enum, default_value_t = EnergyModel::Quadratic)]
    pub model: EnergyModel,

    /// Energy at a number of electrons, as N=E. Give exactly three, at N0-1, N0 and N0+1.
    #[arg(short, long = "energy", value_name = "N=E", required = true, value_parser = parse_energy_point)]
    pub energies: Vec<EnergyPoint>,
}

/// Arguments for the `config` subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the location of the user configuration file.
    Path,
    /// Write a configuration file with the default settings.
    Init {
        /// Overwrite an existing configuration file.
        #[arg(long)]
        force: bool,
    },
}
