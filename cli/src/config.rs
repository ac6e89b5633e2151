//! User configuration at `~/.nncalc/config.toml`.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use nncalc_tui::UiOptions;

const ENV_ASCII: &str = "NNCALC_ASCII";
const ENV_HIGH_CONTRAST: &str = "NNCALC_HIGH_CONTRAST";

#[derive(Debug, Default, Deserialize)]
pub struct CalcConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for key markers and the status bar.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl CalcConfig {
    /// Load the user config. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

/// Resolve UI options from the config file, then environment overrides.
///
/// `env` is injected so the lookup can be tested without touching the process
/// environment.
pub fn ui_options<F>(config: Option<&CalcConfig>, env: F) -> UiOptions
where
    F: Fn(&str) -> Option<String>,
{
    let app = config.and_then(|cfg| cfg.app.as_ref());
    let mut options = UiOptions {
        ascii_only: app.is_some_and(|a| a.ascii_only),
        high_contrast: app.is_some_and(|a| a.high_contrast),
    };

    if let Some(raw) = env(ENV_ASCII) {
        options.ascii_only = is_truthy(&raw);
    }
    if let Some(raw) = env(ENV_HIGH_CONTRAST) {
        options.high_contrast = is_truthy(&raw);
    }
    options
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".nncalc").join("config.toml"))
}
