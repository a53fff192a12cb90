//! The ORM's default, MySQL-like dialect.

use super::Dialect;
use crate::schema::{DataType, Field};

/// Default dialect: backtick quoting and `LIMIT n OFFSET m` pagination.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn data_type_of(&self, field: &Field) -> String {
        match &field.data_type {
            DataType::Bool => "boolean".to_string(),
            DataType::Int | DataType::Uint => "bigint".to_string(),
            DataType::Float => "double".to_string(),
            DataType::String if field.size > 0 => format!("varchar({})", field.size),
            DataType::String => "text".to_string(),
            DataType::Time => "datetime".to_string(),
            DataType::Bytes => "blob".to_string(),
            DataType::Custom(tag) => tag.clone(),
        }
    }
}
