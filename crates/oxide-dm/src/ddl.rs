//! Schema DDL for migrations.
//!
//! Column types come from [`crate::data_type`]; renames honour the
//! `dont_support_rename_*` switches of the configuration.

use oxide_dm_core::{Dialect, Field, Schema};
use tracing::warn;

use crate::dialect::DmDialect;
use crate::error::{DmError, Result};

impl DmDialect {
    /// Generates a column definition: quoted name, type, constraints.
    #[must_use]
    pub fn column_definition(&self, field: &Field) -> String {
        let mut parts = vec![self.quote_identifier(&field.name), self.data_type_of(field)];

        if field.not_null && !field.primary_key {
            parts.push("NOT NULL".to_string());
        }

        if field.has_default_value {
            if let Some(default_sql) = &field.default_value {
                parts.push(format!("DEFAULT {default_sql}"));
            }
        }

        parts.join(" ")
    }

    /// Generates `CREATE TABLE` for `schema`.
    ///
    /// Primary key fields are collected into a trailing `PRIMARY KEY (...)`
    /// line, which also covers composite keys.
    #[must_use]
    pub fn create_table(&self, schema: &Schema) -> String {
        let mut sql = String::from("CREATE TABLE ");
        sql.push_str(&self.quote_identifier(&schema.table));
        sql.push_str(" (\n");

        let col_defs: Vec<String> = schema
            .fields
            .iter()
            .map(|field| self.column_definition(field))
            .collect();
        sql.push_str("  ");
        sql.push_str(&col_defs.join(",\n  "));

        let primary_key: Vec<String> = schema
            .fields
            .iter()
            .filter(|field| field.primary_key)
            .map(|field| self.quote_identifier(&field.name))
            .collect();
        if !primary_key.is_empty() {
            sql.push_str(",\n  PRIMARY KEY (");
            sql.push_str(&primary_key.join(", "));
            sql.push(')');
        }

        sql.push_str("\n)");
        sql
    }

    /// Generates `ALTER TABLE .. ADD` for one column.
    #[must_use]
    pub fn add_column(&self, table: &str, field: &Field) -> String {
        format!(
            "ALTER TABLE {} ADD {}",
            self.quote_identifier(table),
            self.column_definition(field)
        )
    }

    /// Generates `ALTER TABLE .. MODIFY` changing a column's type.
    #[must_use]
    pub fn alter_column_type(&self, table: &str, field: &Field) -> String {
        format!(
            "ALTER TABLE {} MODIFY {} {}",
            self.quote_identifier(table),
            self.quote_identifier(&field.name),
            self.data_type_of(field)
        )
    }

    /// Generates a column rename.
    ///
    /// # Errors
    ///
    /// Returns [`DmError::Unsupported`] when the configuration disables
    /// column renames.
    pub fn rename_column(&self, table: &str, from: &str, to: &str) -> Result<String> {
        if self.config().dont_support_rename_column {
            warn!(table, from, to, "column rename disabled by configuration");
            return Err(DmError::Unsupported("rename column"));
        }
        Ok(format!(
            "ALTER TABLE {} RENAME COLUMN {} TO {}",
            self.quote_identifier(table),
            self.quote_identifier(from),
            self.quote_identifier(to)
        ))
    }

    /// Generates an index rename.
    ///
    /// # Errors
    ///
    /// Returns [`DmError::Unsupported`] when the configuration disables
    /// index renames.
    pub fn rename_index(&self, from: &str, to: &str) -> Result<String> {
        if self.config().dont_support_rename_index {
            warn!(from, to, "index rename disabled by configuration");
            return Err(DmError::Unsupported("rename index"));
        }
        Ok(format!(
            "ALTER INDEX {} RENAME TO {}",
            self.quote_identifier(from),
            self.quote_identifier(to)
        ))
    }
}
