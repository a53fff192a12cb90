//! DM rendering of multi-value `IN` predicates.
//!
//! The ORM's default renderer binds a list value as its own parenthesized
//! group, producing `col IN ((?,?))`. DM wants the values directly inside
//! the `IN` parentheses.

use oxide_dm_core::{Builder, SqlValue, Writer};

/// Writes `column IN (?,?,...)`, flattening list values into one group.
pub fn build_in(column: &str, values: &[SqlValue], builder: &mut dyn Builder) {
    builder.write_quoted(column);
    builder.write_string(" IN (");
    let members = values
        .iter()
        .flat_map(|value| value.as_list().unwrap_or(std::slice::from_ref(value)));
    for (idx, value) in members.enumerate() {
        if idx > 0 {
            builder.write_byte(b',');
        }
        builder.add_var(value);
    }
    builder.write_byte(b')');
}

#[cfg(test)]
mod tests {
    use oxide_dm_core::Statement;

    use super::*;
    use crate::DmDialect;

    #[test]
    fn test_list_is_flattened() {
        let dialect = DmDialect::default();
        let mut stmt = Statement::new(&dialect);
        build_in("id", &[SqlValue::list([1_i64, 2, 3])], &mut stmt);
        assert_eq!(stmt.sql(), "\"id\" IN (?,?,?)");
        assert_eq!(
            stmt.vars(),
            &[SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(3)]
        );
    }

    #[test]
    fn test_mixed_values() {
        let dialect = DmDialect::default();
        let mut stmt = Statement::new(&dialect);
        build_in(
            "u.id",
            &[SqlValue::list([1_i64, 2]), SqlValue::Int(9)],
            &mut stmt,
        );
        assert_eq!(stmt.sql(), "\"u\".\"id\" IN (?,?,?)");
        assert_eq!(stmt.vars().len(), 3);
    }
}
