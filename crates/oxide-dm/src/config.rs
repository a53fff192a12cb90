//! Dialect configuration.
//!
//! Resolved once when the dialect is constructed and read-only afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DmError, Result};

/// Driver name used when none is configured.
pub const DEFAULT_DRIVER_NAME: &str = "dm";
/// Length of strings without an explicit size.
pub const DEFAULT_STRING_SIZE: usize = 1024;
/// Fractional-second digits of datetime columns without an explicit precision.
pub const DEFAULT_DATETIME_PRECISION: u32 = 3;
/// Largest accepted fractional-second precision (nanoseconds).
pub const MAX_DATETIME_PRECISION: u32 = 9;

/// Configuration of a [`crate::DmDialect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmConfig {
    /// Database driver name.
    pub driver_name: String,
    /// Data source name, without the `dm://` scheme.
    pub dsn: String,
    /// Length used for string fields without a size; `0` falls back to
    /// `191` for keyed/indexed/defaulted fields and `longtext` otherwise.
    pub default_string_size: usize,
    /// Precision applied to datetime fields without one.
    pub default_datetime_precision: u32,
    /// Never add a default precision to datetime fields.
    pub disable_datetime_precision: bool,
    /// The server cannot rename indexes.
    pub dont_support_rename_index: bool,
    /// The server cannot rename columns.
    pub dont_support_rename_column: bool,
    /// The server does not understand `FOR SHARE`.
    pub dont_support_for_share_clause: bool,
}

impl Default for DmConfig {
    fn default() -> Self {
        Self {
            driver_name: DEFAULT_DRIVER_NAME.to_string(),
            dsn: String::new(),
            default_string_size: DEFAULT_STRING_SIZE,
            default_datetime_precision: DEFAULT_DATETIME_PRECISION,
            disable_datetime_precision: false,
            dont_support_rename_index: false,
            dont_support_rename_column: false,
            dont_support_for_share_clause: false,
        }
    }
}

impl DmConfig {
    /// Creates a default configuration for `dsn`.
    #[must_use]
    pub fn with_dsn(dsn: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            ..Self::default()
        }
    }

    /// Loads a configuration from a JSON file; missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Checks values and fills in the driver name.
    ///
    /// # Errors
    ///
    /// Returns [`DmError::InvalidDatetimePrecision`] for a precision above
    /// [`MAX_DATETIME_PRECISION`].
    pub fn resolve(mut self) -> Result<Self> {
        if self.default_datetime_precision > MAX_DATETIME_PRECISION {
            return Err(DmError::InvalidDatetimePrecision(
                self.default_datetime_precision,
            ));
        }
        if self.driver_name.is_empty() {
            self.driver_name = DEFAULT_DRIVER_NAME.to_string();
        }
        Ok(self)
    }

    /// Connection URL handed to the driver.
    #[must_use]
    pub fn connection_url(&self) -> String {
        format!("dm://{}", self.dsn)
    }
}
