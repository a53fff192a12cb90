//! Column type mapping.
//!
//! Maps the ORM's logical field description to a DM column type. Every
//! branch has a fallback, so mapping never fails.

use oxide_dm_core::{DataType, Field};

use crate::config::DmConfig;

/// Upper bound (inclusive) of `mediumtext` / `mediumblob`.
pub const MEDIUM_MAX: usize = 1 << 24;
/// Lower bound of `mediumtext` / `mediumblob`.
pub const MEDIUM_MIN: usize = 65536;
/// String length used for keyed, indexed or defaulted fields when no
/// default string size is configured.
pub const INDEXABLE_STRING_SIZE: usize = 191;

/// Returns the DM column type for `field`.
#[must_use]
pub fn data_type_of(config: &DmConfig, field: &Field) -> String {
    match &field.data_type {
        DataType::Bool => "boolean".to_string(),
        DataType::Int | DataType::Uint => integer_type(field),
        DataType::Float => float_type(field),
        DataType::String => string_type(config, field),
        DataType::Time => time_type(config, field),
        DataType::Bytes => bytes_type(field),
        DataType::Custom(tag) => tag.clone(),
    }
}

fn integer_type(field: &Field) -> String {
    let mut sql_type = match field.size {
        0..=8 => "tinyint",
        9..=16 => "smallint",
        17..=24 => "mediumint",
        25..=32 => "int",
        _ => "bigint",
    }
    .to_string();

    if field.data_type == DataType::Uint {
        sql_type.push_str(" unsigned");
    }
    if field.auto_increment {
        sql_type.push_str(" AUTO_INCREMENT");
    }
    sql_type
}

fn float_type(field: &Field) -> String {
    if field.precision > 0 {
        return format!("decimal({}, {})", field.precision, field.scale);
    }
    if field.size <= 32 {
        "float".to_string()
    } else {
        "double".to_string()
    }
}

fn string_type(config: &DmConfig, field: &Field) -> String {
    let mut size = field.size;
    if size == 0 {
        if config.default_string_size > 0 {
            size = config.default_string_size;
        } else if field.primary_key || field.has_default_value || field.has_index {
            // TEXT columns can be neither keyed nor defaulted
            size = INDEXABLE_STRING_SIZE;
        }
    }

    if (MEDIUM_MIN..=MEDIUM_MAX).contains(&size) {
        "mediumtext".to_string()
    } else if size > MEDIUM_MAX || size == 0 {
        "longtext".to_string()
    } else {
        format!("varchar({size})")
    }
}

fn time_type(config: &DmConfig, field: &Field) -> String {
    let precision = if field.precision == 0 && !config.disable_datetime_precision {
        config.default_datetime_precision
    } else {
        field.precision
    };

    let mut sql_type = String::from("datetime");
    if precision > 0 {
        sql_type.push_str(&format!("({precision})"));
    }
    if !(field.not_null || field.primary_key) {
        sql_type.push_str(" NULL");
    }
    sql_type
}

fn bytes_type(field: &Field) -> String {
    match field.size {
        1..MEDIUM_MIN => format!("varbinary({})", field.size),
        MEDIUM_MIN..=MEDIUM_MAX => "mediumblob".to_string(),
        _ => "longblob".to_string(),
    }
}
