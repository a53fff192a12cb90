//! The DM dialect.

use std::collections::HashMap;

use chrono::{DateTime, DurationRound, Local, TimeDelta};
use oxide_dm_core::clause::{LIMIT, WHERE};
use oxide_dm_core::{ClauseBuilder, Dialect, Field, Writer};
use tracing::debug;

use crate::clauses::{rewrite_limit, rewrite_where};
use crate::config::{DmConfig, MAX_DATETIME_PRECISION};
use crate::error::Result;
use crate::{data_type, quote, raw};

/// DM (Dameng) dialect.
///
/// Holds a resolved [`DmConfig`] and is read-only after construction, so a
/// single instance can be shared by concurrent statement builds.
#[derive(Debug, Clone, Default)]
pub struct DmDialect {
    config: DmConfig,
}

impl DmDialect {
    /// Creates a dialect from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not resolve.
    pub fn new(config: DmConfig) -> Result<Self> {
        let config = config.resolve()?;
        debug!(
            driver = %config.driver_name,
            string_size = config.default_string_size,
            datetime_precision = config.default_datetime_precision,
            "dm dialect configured"
        );
        Ok(Self { config })
    }

    /// Creates a dialect with default settings for `dsn`.
    #[must_use]
    pub fn open(dsn: impl Into<String>) -> Self {
        Self {
            config: DmConfig::with_dsn(dsn),
        }
    }

    /// The resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &DmConfig {
        &self.config
    }

    /// Driver name handed to the connection layer.
    #[must_use]
    pub fn driver_name(&self) -> &str {
        &self.config.driver_name
    }

    /// Connection URL handed to the connection layer.
    #[must_use]
    pub fn connection_url(&self) -> String {
        self.config.connection_url()
    }

    /// Current local time rounded to the configured datetime precision.
    #[must_use]
    pub fn now(&self) -> DateTime<Local> {
        let now = Local::now();
        let digits = MAX_DATETIME_PRECISION.saturating_sub(self.config.default_datetime_precision);
        now.duration_round(TimeDelta::nanoseconds(10_i64.pow(digits)))
            .unwrap_or(now)
    }
}

impl Dialect for DmDialect {
    fn name(&self) -> &'static str {
        "dm"
    }

    fn dummy_table_name(&self) -> &'static str {
        "DUAL"
    }

    fn supports_for_share_clause(&self) -> bool {
        !self.config.dont_support_for_share_clause
    }

    fn quote_to(&self, writer: &mut dyn Writer, name: &str) {
        quote::quote_to(writer, name);
    }

    fn data_type_of(&self, field: &Field) -> String {
        data_type::data_type_of(&self.config, field)
    }

    fn clause_builders(&self) -> HashMap<&'static str, ClauseBuilder> {
        let mut builders: HashMap<&'static str, ClauseBuilder> = HashMap::new();
        builders.insert(LIMIT, rewrite_limit);
        builders.insert(WHERE, rewrite_where);
        builders
    }

    fn after_build(&self, sql: &mut String) {
        let rewritten = match raw::rewrite_backticks(sql) {
            std::borrow::Cow::Owned(rewritten) => rewritten,
            std::borrow::Cow::Borrowed(_) => return,
        };
        *sql = rewritten;
    }
}
