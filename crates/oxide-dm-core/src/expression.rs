//! Boolean expression trees.
//!
//! The ORM hands dialects an already-built tree; the set of node kinds is
//! closed so that dialect rewriters can match on it exhaustively.

use crate::value::{SqlValue, ToSqlValue};
use crate::writer::{Builder, Writer};

/// Separator used between conjunctive children.
pub const AND_WITH_SPACE: &str = " AND ";
/// Separator used between disjunctive children.
pub const OR_WITH_SPACE: &str = " OR ";

/// A node in a boolean expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Conjunction of the children, in order.
    And(Vec<Expression>),
    /// Disjunction of the children, in order.
    Or(Vec<Expression>),
    /// `column IN (values...)`.
    In {
        /// Column name, possibly dotted.
        column: String,
        /// Values; a single [`SqlValue::List`] is the usual shape.
        values: Vec<SqlValue>,
    },
    /// Opaque SQL text with positional `?` arguments.
    Raw {
        /// SQL text.
        sql: String,
        /// Values substituted for `?` placeholders, in order.
        vars: Vec<SqlValue>,
    },
}

impl Expression {
    /// Creates a raw expression without arguments.
    #[must_use]
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw {
            sql: sql.into(),
            vars: vec![],
        }
    }

    /// Creates a raw expression with positional arguments.
    #[must_use]
    pub fn raw_with(sql: impl Into<String>, vars: Vec<SqlValue>) -> Self {
        Self::Raw {
            sql: sql.into(),
            vars,
        }
    }

    /// Creates an `IN` predicate over a list of values.
    #[must_use]
    pub fn in_list<I, T>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToSqlValue,
    {
        Self::In {
            column: column.into(),
            values: vec![SqlValue::list(values)],
        }
    }

    /// Returns true for an `Or` group holding exactly one child.
    ///
    /// Such a group is how the ORM marks "join me to my predecessor with OR".
    #[must_use]
    pub fn is_single_or(&self) -> bool {
        matches!(self, Self::Or(exprs) if exprs.len() == 1)
    }

    /// Returns the SQL text of a raw expression.
    #[must_use]
    pub fn raw_sql(&self) -> Option<&str> {
        match self {
            Self::Raw { sql, .. } => Some(sql),
            _ => None,
        }
    }

    /// Renders the expression with the ORM's default rules.
    pub fn build(&self, builder: &mut dyn Builder) {
        match self {
            Self::And(exprs) => build_group(exprs, builder, AND_WITH_SPACE),
            Self::Or(exprs) => build_group(exprs, builder, OR_WITH_SPACE),
            Self::In { column, values } => build_in(column, values, builder),
            Self::Raw { sql, vars } => build_raw(sql, vars, builder),
        }
    }
}

/// Writes `exprs` joined by `join`, switching to ` OR ` in front of
/// single-child `Or` groups.
pub fn build_joined(exprs: &[Expression], builder: &mut dyn Builder, join: &str) {
    for (idx, expr) in exprs.iter().enumerate() {
        if idx > 0 {
            if expr.is_single_or() {
                builder.write_string(OR_WITH_SPACE);
            } else {
                builder.write_string(join);
            }
        }
        expr.build(builder);
    }
}

fn build_group(exprs: &[Expression], builder: &mut dyn Builder, join: &str) {
    if exprs.len() > 1 {
        builder.write_byte(b'(');
        build_joined(exprs, builder, join);
        builder.write_byte(b')');
    } else {
        build_joined(exprs, builder, join);
    }
}

fn build_in(column: &str, values: &[SqlValue], builder: &mut dyn Builder) {
    builder.write_quoted(column);
    match values {
        [] => builder.write_string(" IN (NULL)"),
        [value] if value.as_list().is_none() => {
            builder.write_string(" = ");
            builder.add_var(value);
        }
        _ => {
            builder.write_string(" IN (");
            for (idx, value) in values.iter().enumerate() {
                if idx > 0 {
                    builder.write_byte(b',');
                }
                builder.add_var(value);
            }
            builder.write_byte(b')');
        }
    }
}

fn build_raw(sql: &str, vars: &[SqlValue], builder: &mut dyn Builder) {
    let mut vars = vars.iter();
    let mut rest = sql;
    while let Some(pos) = rest.find('?') {
        let Some(value) = vars.next() else {
            break;
        };
        builder.write_string(&rest[..pos]);
        builder.add_var(value);
        rest = &rest[pos + 1..];
    }
    builder.write_string(rest);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::Writer;

    /// Quotes with backticks and inlines values, enough to observe structure.
    #[derive(Default)]
    struct Recorder {
        sql: String,
        vars: Vec<SqlValue>,
    }

    impl Writer for Recorder {
        fn write_string(&mut self, s: &str) {
            self.sql.push_str(s);
        }

        fn write_byte(&mut self, b: u8) {
            self.sql.push(char::from(b));
        }
    }

    impl Builder for Recorder {
        fn write_quoted(&mut self, name: &str) {
            self.sql.push('`');
            self.sql.push_str(name);
            self.sql.push('`');
        }

        fn add_var(&mut self, value: &SqlValue) {
            if let Some(values) = value.as_list() {
                self.sql.push('(');
                for (idx, v) in values.iter().enumerate() {
                    if idx > 0 {
                        self.sql.push(',');
                    }
                    self.add_var(v);
                }
                self.sql.push(')');
            } else {
                self.sql.push('?');
                self.vars.push(value.clone());
            }
        }
    }

    fn render(expr: &Expression) -> Recorder {
        let mut rec = Recorder::default();
        expr.build(&mut rec);
        rec
    }

    #[test]
    fn test_raw_substitutes_placeholders_in_order() {
        let rec = render(&Expression::raw_with(
            "age > ? AND name = ?",
            vec![SqlValue::Int(18), SqlValue::Text("bob".into())],
        ));
        assert_eq!(rec.sql, "age > ? AND name = ?");
        assert_eq!(
            rec.vars,
            vec![SqlValue::Int(18), SqlValue::Text("bob".into())]
        );
    }

    #[test]
    fn test_raw_keeps_extra_placeholders() {
        let rec = render(&Expression::raw_with("a = ? OR b = ?", vec![SqlValue::Int(1)]));
        assert_eq!(rec.sql, "a = ? OR b = ?");
        assert_eq!(rec.vars.len(), 1);
    }

    #[test]
    fn test_and_group_is_parenthesized() {
        let expr = Expression::And(vec![Expression::raw("a = 1"), Expression::raw("b = 2")]);
        assert_eq!(render(&expr).sql, "(a = 1 AND b = 2)");
    }

    #[test]
    fn test_single_child_group_is_bare() {
        let expr = Expression::Or(vec![Expression::raw("a = 1")]);
        assert_eq!(render(&expr).sql, "a = 1");
        assert!(expr.is_single_or());
    }

    #[test]
    fn test_and_switches_to_or_for_single_or_child() {
        let expr = Expression::And(vec![
            Expression::raw("a = 1"),
            Expression::Or(vec![Expression::raw("b = 2")]),
        ]);
        assert_eq!(render(&expr).sql, "(a = 1 OR b = 2)");
    }

    #[test]
    fn test_in_shapes() {
        let empty = Expression::In {
            column: "id".into(),
            values: vec![],
        };
        assert_eq!(render(&empty).sql, "`id` IN (NULL)");

        let scalar = Expression::In {
            column: "id".into(),
            values: vec![SqlValue::Int(7)],
        };
        assert_eq!(render(&scalar).sql, "`id` = ?");

        let list = Expression::in_list("id", [1_i64, 2, 3]);
        let rec = render(&list);
        assert_eq!(rec.sql, "`id` IN ((?,?,?))");
        assert_eq!(rec.vars.len(), 3);
    }
}
