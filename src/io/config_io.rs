use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Config;

/// Optional configuration file inside the fade directory
pub const CONFIG_FILE: &str = "config.toml";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load config.toml from the fade directory. A missing file yields the
/// defaults; a malformed one is a startup error.
pub fn load_config(fade_dir: &Path) -> Result<Config, ConfigError> {
    let path = fade_dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(ConfigError::Read { path, source: e }),
    };
    toml::from_str(&text).map_err(|e| ConfigError::Parse { path, source: e })
}
