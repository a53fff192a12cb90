//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. The ORM renders
//! everything through a [`Dialect`]: identifier quoting, placeholders,
//! column types, and optional per-clause rewriters.

mod generic;

use std::collections::HashMap;

pub use generic::GenericDialect;

use crate::clause::Clause;
use crate::expression::Expression;
use crate::schema::Field;
use crate::statement::Statement;
use crate::value::SqlValue;
use crate::writer::Writer;

/// Replaces the default rendering of one named clause.
pub type ClauseBuilder = fn(&Clause, &mut Statement<'_>);

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the zero-row table used to build no-op `SELECT`s.
    fn dummy_table_name(&self) -> &'static str {
        "DUAL"
    }

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the parameter placeholder style.
    fn parameter_placeholder(&self) -> &'static str {
        "?"
    }

    /// Returns whether `SELECT ... FOR SHARE` is available.
    fn supports_for_share_clause(&self) -> bool {
        true
    }

    /// Writes `name` quoted, quoting each segment of a dotted path.
    fn quote_to(&self, writer: &mut dyn Writer, name: &str) {
        let mut buf = [0; 4];
        let quote: &str = self.identifier_quote().encode_utf8(&mut buf);
        for (idx, segment) in name.split('.').enumerate() {
            if idx > 0 {
                writer.write_byte(b'.');
            }
            writer.write_string(quote);
            writer.write_string(segment);
            writer.write_string(quote);
        }
    }

    /// Quotes an identifier into a new string.
    fn quote_identifier(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        self.quote_to(&mut out, name);
        out
    }

    /// Writes the placeholder for one bound value.
    fn bind_var_to(&self, writer: &mut dyn Writer, _value: &SqlValue) {
        writer.write_string(self.parameter_placeholder());
    }

    /// Maps a field descriptor to a column type.
    fn data_type_of(&self, field: &Field) -> String;

    /// Expression inserted for a field that should take its default value.
    fn default_value_of(&self, _field: &Field) -> Expression {
        Expression::raw("DEFAULT")
    }

    /// Renders `sql` with `vars` inlined, for logs.
    fn explain(&self, sql: &str, vars: &[SqlValue]) -> String {
        explain_sql(sql, self.parameter_placeholder(), vars)
    }

    /// Per-clause rewriters, keyed by clause name.
    fn clause_builders(&self) -> HashMap<&'static str, ClauseBuilder> {
        HashMap::new()
    }

    /// Final text-level pass over a finished statement.
    fn after_build(&self, _sql: &mut String) {}
}

/// Replaces each `placeholder` in `sql` with the next value rendered inline.
///
/// Placeholders without a matching value are kept as-is.
#[must_use]
pub fn explain_sql(sql: &str, placeholder: &str, vars: &[SqlValue]) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut vars = vars.iter();
    let mut rest = sql;
    while let Some(pos) = rest.find(placeholder) {
        let Some(value) = vars.next() else {
            break;
        };
        out.push_str(&rest[..pos]);
        out.push_str(&value.to_sql_inline());
        rest = &rest[pos + placeholder.len()..];
    }
    out.push_str(rest);
    out
}
