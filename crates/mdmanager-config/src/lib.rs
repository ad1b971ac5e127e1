use anyhow::Context;
use mdmanager_engine::{Converter, Settings};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Location of the user config file before tilde expansion.
pub const CONFIG_FILE: &str = "~/.config/mdmanager/config.toml";

/// Default cap on markdown accepted for conversion (8 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 8 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inputs longer than this are rejected instead of converted.
    /// `0` disables the limit.
    pub max_input_bytes: usize,
    /// Where converted HTML is written. Defaults to next to each source file.
    pub output_dir: Option<PathBuf>,
    /// Initial viewer settings served to the extension pages.
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            output_dir: None,
            settings: Settings::default(),
        }
    }
}

impl Config {
    /// Reads the config at `path`. A missing file is `Ok(None)`, not an error.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config = Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(dir) = config.output_dir.take() {
            config.output_dir = Some(expand_path(&dir).unwrap_or(dir));
        }

        log::debug!("Loaded config from {}", path.display());
        Ok(Some(config))
    }

    /// Reads the config at [`Config::config_path`].
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create {}", dir.display()))?;
        }
        let raw = toml::to_string_pretty(self).context("Cannot serialize config")?;
        std::fs::write(path, raw).with_context(|| format!("Cannot write {}", path.display()))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// The per-user config file, with `~` expanded.
    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(CONFIG_FILE).into_owned())
    }

    /// A converter honouring the configured input limit.
    pub fn converter(&self) -> Converter {
        match self.max_input_bytes {
            0 => Converter::new(),
            limit => Converter::with_max_input_bytes(limit),
        }
    }
}

/// Expands `~` and `$VAR` references. Unknown variables leave the path alone.
fn expand_path(path: &Path) -> Option<PathBuf> {
    shellexpand::full(&path.to_string_lossy())
        .ok()
        .map(|expanded| PathBuf::from(expanded.into_owned()))
}
