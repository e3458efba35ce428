use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::model::{Config, RuntimeConfig};
use crate::error::ConfigError;

pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let mut contents = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut contents))
        .map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
    serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Loads the config file, if any, and applies command line overrides.
/// `required` is set when the path was given explicitly.
pub fn load_config(
    path: &Path,
    required: bool,
    folder: Option<PathBuf>,
) -> Result<RuntimeConfig, ConfigError> {
    let cfg = if required || path.exists() {
        read_config(path)?
    } else {
        Config::default()
    };
    parse_runtime(cfg, folder)
}

fn parse_runtime(cfg: Config, folder: Option<PathBuf>) -> Result<RuntimeConfig, ConfigError> {
    let base_dir = folder.or(cfg.base_dir).ok_or_else(|| {
        ConfigError::Invalid("no output folder; pass --folder or set baseDir".to_string())
    })?;
    if base_dir.as_os_str().is_empty() {
        return Err(ConfigError::Invalid("output folder is empty".to_string()));
    }
    for (name, value) in [
        ("makemkvcon", &cfg.tools.makemkvcon),
        ("dvdbackup", &cfg.tools.dvdbackup),
        ("eject", &cfg.tools.eject),
        ("notify command", &cfg.notify.command),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Invalid(format!("{} must not be empty", name)));
        }
    }

    Ok(RuntimeConfig {
        base_dir,
        log_file: cfg.log_file,
        tools: cfg.tools,
        notify: cfg.notify,
    })
}
