use crate::cli::{ConfigArgs, ConfigCommands};
use crate::config::{DEFAULT_CONFIG, default_config_path};
use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            let path = default_config_path()?;
            println!("{}", path.display());
            if !path.exists() {
                println!("(not created yet; run 'chemtools config init')");
            }
        }
        ConfigCommands::Init { force } => {
            let path = default_config_path()?;
            init_at(&path, force)?;
            println!("✓ Configuration written to: {}", path.display());
        }
    }
    Ok(())
}

fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG)?;
    info!("Wrote default configuration to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn init_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        init_at(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[validation]\n").unwrap();

        assert!(matches!(init_at(&path, false), Err(CliError::Config(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[validation]\n");

        init_at(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
