//! Table and field metadata supplied by the ORM.
//!
//! A [`Field`] carries the ORM's logical description of a column; dialects
//! turn it into a concrete column type during migration.

use serde::{Deserialize, Serialize};

/// Logical data type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Boolean.
    Bool,
    /// Signed integer.
    Int,
    /// Unsigned integer.
    Uint,
    /// Floating point or fixed-point decimal.
    Float,
    /// Character data.
    String,
    /// Date and time.
    Time,
    /// Binary data.
    Bytes,
    /// Any other type tag, passed through to the dialect verbatim.
    #[serde(untagged)]
    Custom(String),
}

/// Field descriptor: one column as the ORM sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    /// Column name in the database.
    pub name: String,
    /// Logical data type.
    pub data_type: DataType,
    /// Size hint: bits for numbers, characters for strings, bytes for binary.
    pub size: usize,
    /// Precision hint (decimal digits or fractional-second digits).
    pub precision: u32,
    /// Scale hint for decimals.
    pub scale: u32,
    /// Part of the primary key.
    pub primary_key: bool,
    /// Auto-incrementing column.
    pub auto_increment: bool,
    /// Declared NOT NULL.
    pub not_null: bool,
    /// Has a default value.
    pub has_default_value: bool,
    /// SQL text of the default value, when known.
    pub default_value: Option<String>,
    /// Covered by an index or a unique constraint.
    pub has_index: bool,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            name: String::new(),
            data_type: DataType::String,
            size: 0,
            precision: 0,
            scale: 0,
            primary_key: false,
            auto_increment: false,
            not_null: false,
            has_default_value: false,
            default_value: None,
            has_index: false,
        }
    }
}

impl Field {
    /// Creates a field with no size or precision hints.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            ..Self::default()
        }
    }

    /// Sets the size hint.
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets precision and scale.
    #[must_use]
    pub const fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = precision;
        self.scale = scale;
        self
    }

    /// Marks the field as part of the primary key.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Marks the field as auto-incrementing.
    #[must_use]
    pub const fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Marks the field NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Sets a default value.
    #[must_use]
    pub fn default_value(mut self, sql: impl Into<String>) -> Self {
        self.has_default_value = true;
        self.default_value = Some(sql.into());
        self
    }

    /// Marks the field as indexed.
    #[must_use]
    pub const fn indexed(mut self) -> Self {
        self.has_index = true;
        self
    }
}

/// Table metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Table name.
    pub table: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Creates a schema for `table`.
    #[must_use]
    pub fn new(table: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            table: table.into(),
            fields,
        }
    }

    /// Returns the primary key field used for default ordering.
    ///
    /// A field named `id` wins when it is part of the key; otherwise the
    /// key must consist of exactly one field.
    #[must_use]
    pub fn prioritized_primary_field(&self) -> Option<&Field> {
        let mut keys = self.fields.iter().filter(|f| f.primary_key);
        let first = keys.next()?;
        if first.name == "id" {
            return Some(first);
        }
        let rest: Vec<&Field> = keys.collect();
        if let Some(id) = rest.iter().find(|f| f.name == "id") {
            return Some(*id);
        }
        if rest.is_empty() {
            Some(first)
        } else {
            None
        }
    }
}
