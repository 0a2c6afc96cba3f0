//! Widget configuration.
//!
//! Settings are resolved once, before any widget is constructed, by
//! overlaying an optional user rc file on the built-in defaults:
//!
//! ```json
//! { "components": { "table": { "defaultProps": { "rowsPerPage": 25 } } } }
//! ```
//!
//! The rc file is `.architecturexrc.json` in the current working directory.
//! Keys the user file leaves out keep their defaults.

mod error;
mod merge;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use error::ConfigError;
pub use merge::{merge, merged};

/// File name of the user rc file.
pub const CONFIG_FILE_NAME: &str = ".architecturexrc.json";

/// Page size used when neither the rc file nor the widget sets one.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub components: ComponentsConfig,
}

/// Per-component settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComponentsConfig {
    #[serde(default)]
    pub table: TableConfig,
}

/// Settings for the table component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    #[serde(default)]
    pub default_props: TableDefaultProps,
}

/// Default property values applied to every table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDefaultProps {
    #[serde(default)]
    pub rows_per_page: Option<usize>,
}

impl Default for TableDefaultProps {
    fn default() -> Self {
        Self {
            rows_per_page: Some(DEFAULT_ROWS_PER_PAGE),
        }
    }
}

impl Configuration {
    /// The built-in defaults as a JSON document.
    pub fn defaults() -> Value {
        // Serializing a plain struct of options cannot fail
        serde_json::to_value(Self::default()).unwrap_or(Value::Null)
    }

    /// Resolve configuration from the rc file in the current directory.
    pub fn load() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        Self::load_from(cwd.join(CONFIG_FILE_NAME))
    }

    /// Like [`Configuration::load`], but falls back to the defaults (with a
    /// warning) when the rc file is unusable.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring user configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Resolve configuration from the rc file at `path`.
    ///
    /// A missing file means no overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let overrides = load_user_config(path)?;
        Self::from_overrides(overrides)
    }

    /// Resolve configuration from an already-parsed override document.
    pub fn from_overrides(overrides: Value) -> Result<Self, ConfigError> {
        let resolved = merged(&Self::defaults(), overrides);
        let config: Self = serde_json::from_value(resolved)
            .map_err(|e| ConfigError::invalid(e.to_string()))?;
        config.validate()?;
        log::debug!(
            "[config] resolved rowsPerPage = {}",
            config.rows_per_page()
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.components.table.default_props.rows_per_page == Some(0) {
            return Err(ConfigError::invalid(
                "components.table.defaultProps.rowsPerPage must be a positive integer",
            ));
        }
        Ok(())
    }

    /// The resolved default page size for tables.
    pub fn rows_per_page(&self) -> usize {
        self.components
            .table
            .default_props
            .rows_per_page
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_ROWS_PER_PAGE)
    }

    /// Set the default page size.
    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.components.table.default_props.rows_per_page = Some(rows_per_page);
        self
    }
}

/// Read the user override document at `path`.
///
/// Returns an empty object when the file does not exist.
pub fn load_user_config(path: &Path) -> Result<Value, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("[config] no user config at {}", path.display());
            return Ok(Value::Object(Default::default()));
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let value: Value = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !value.is_object() {
        return Err(ConfigError::NotAnObject(path.to_path_buf()));
    }

    log::debug!("[config] loaded user config from {}", path.display());
    Ok(value)
}
