use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::output::DEFAULT_PRECISION;

/// Largest accepted number of decimal digits for real results
pub const MAX_PRECISION: u8 = 6;

fn default_precision() -> u8 {
    DEFAULT_PRECISION as u8
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_precision")]
    pub precision: u8,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// Search the usual locations and use the first file that parses
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match Self::parse(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {:#}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file; any problem is an error
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        Self::parse(&contents).context(format!("Failed to parse config file: {:?}", path))
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: FileConfig = toml::from_str(contents)?;
        if config.precision > MAX_PRECISION {
            bail!(
                "precision must be between 0 and {}, got {}",
                MAX_PRECISION,
                config.precision
            );
        }
        Ok(config)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polyquery.toml"));
    paths.push(PathBuf::from(".polyquery.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polyquery").join("config.toml"));
        paths.push(config_dir.join("polyquery.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polyquery.toml"));
        paths.push(home.join(".config").join("polyquery").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FileConfig::parse("").unwrap();
        assert_eq!(config.precision, 1);
        assert!(!config.verbose);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "precision = 3\nverbose = true").unwrap();

        let config = FileConfig::from_path(file.path()).unwrap();
        assert_eq!(config.precision, 3);
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(FileConfig::parse("precision = 9").is_err());
        assert!(FileConfig::parse("precision = \"one\"").is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileConfig::from_path(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_search_paths() {
        let paths = get_config_paths();
        assert_eq!(paths[0], PathBuf::from("polyquery.toml"));
        assert_eq!(paths[1], PathBuf::from(".polyquery.toml"));
    }
}
