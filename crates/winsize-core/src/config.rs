use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

/// Top-level configuration for winsize.
///
/// Loaded from `~/.config/winsize/config.toml`. The file is optional and
/// only controls logging; target geometry is fixed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File logging settings.
    pub logging: LogConfig,
}

impl Config {
    /// Clamps values to safe ranges.
    pub fn validate(&mut self) {
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 100);
    }
}

/// Returns the config directory: `~/.config/winsize/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("winsize"))
}

/// Returns the config file path: `~/.config/winsize/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Parses and validates config file contents.
pub fn parse(content: &str) -> Result<Config, String> {
    let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults. An unreadable or malformed
/// file prints a warning on stderr and returns defaults.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Config::default(),
        Err(e) => {
            eprintln!("Warning: {}: {e}", path.display());
            return Config::default();
        }
    };

    match parse(&content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: failed to parse {}: {e}", path.display());
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_disables_logging() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.max_file_mb, 10);
    }

    #[test]
    fn empty_file_uses_defaults() {
        // Act
        let config = parse("").unwrap();

        // Assert
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_logging_table_keeps_other_defaults() {
        // Arrange
        let toml_str = "[logging]\nenabled = true\n";

        // Act
        let config = parse(toml_str).unwrap();

        // Assert
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn max_file_size_is_clamped() {
        let config = parse("[logging]\nmax_file_mb = 0\n").unwrap();
        assert_eq!(config.logging.max_file_mb, 1);

        let config = parse("[logging]\nmax_file_mb = 5000\n").unwrap();
        assert_eq!(config.logging.max_file_mb, 100);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse("[logging\nenabled = yes").is_err());
    }

    #[test]
    fn config_path_ends_in_winsize_dir() {
        if let Some(path) = config_path() {
            assert!(path.ends_with(".config/winsize/config.toml"));
        }
    }
}
