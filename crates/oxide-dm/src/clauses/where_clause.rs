//! `WHERE` re-linearization.
//!
//! The ORM hands over a flat list of top-level conditions, conjoined by
//! default. A single-child `Or` group in that list means "OR me with what
//! came before". This module turns the list into DM text while keeping the
//! grouping the caller intended.

use oxide_dm_core::expression::{AND_WITH_SPACE, OR_WITH_SPACE};
use oxide_dm_core::{Clause, ClauseExpr, Expression, SqlValue, Statement, Writer};
use tracing::trace;

use super::in_list::build_in;

/// Renders a `WHERE` clause in DM syntax.
pub fn rewrite_where(clause: &Clause, stmt: &mut Statement<'_>) {
    let ClauseExpr::Where(exprs) = &clause.expression else {
        return;
    };

    stmt.write_string(" WHERE ");

    let exprs = promote_leading_condition(exprs);
    let grouped = exprs.len() > 1;
    for (idx, expr) in exprs.iter().enumerate() {
        if idx > 0 {
            if expr.is_single_or() {
                stmt.write_string(OR_WITH_SPACE);
            } else {
                stmt.write_string(AND_WITH_SPACE);
            }
        }

        if grouped && needs_parentheses(expr) {
            trace!(index = idx, "parenthesizing raw condition");
            stmt.write_byte(b'(');
            expr.build(stmt);
            stmt.write_byte(b')');
        } else if let Some((column, values)) = multi_value_in(expr) {
            build_in(column, values, stmt);
        } else {
            expr.build(stmt);
        }
    }
}

/// Returns the conditions with the first one that is not an OR-link
/// (a single-child or empty `Or` group) swapped to the front.
///
/// The input is left untouched; a leading OR-link would otherwise have
/// nothing to be OR-ed with.
#[must_use]
pub fn promote_leading_condition(exprs: &[Expression]) -> Vec<&Expression> {
    let mut ordered: Vec<&Expression> = exprs.iter().collect();
    let anchor = exprs
        .iter()
        .position(|expr| !matches!(expr, Expression::Or(children) if children.len() <= 1));
    if let Some(idx) = anchor {
        if idx != 0 {
            ordered.swap(0, idx);
        }
    }
    ordered
}

/// Returns true when lower-cased `sql` contains `and` or `or` anywhere.
///
/// This is a plain substring scan: identifiers such as `brand` or
/// `order_id` match as well, which only costs a redundant pair of
/// parentheses.
#[must_use]
pub fn contains_boolean_keyword(sql: &str) -> bool {
    let sql = sql.to_lowercase();
    sql.contains("and") || sql.contains("or")
}

fn needs_parentheses(expr: &Expression) -> bool {
    let sql = match expr {
        Expression::And(children) | Expression::Or(children) => match children.as_slice() {
            [only] => only.raw_sql(),
            _ => None,
        },
        Expression::Raw { sql, .. } => Some(sql.as_str()),
        Expression::In { .. } => None,
    };
    sql.is_some_and(contains_boolean_keyword)
}

fn multi_value_in(expr: &Expression) -> Option<(&str, &[SqlValue])> {
    match expr {
        Expression::In { column, values } => {
            let first = values.first()?.as_list()?;
            (first.len() > 1).then_some((column.as_str(), values.as_slice()))
        }
        _ => None,
    }
}
