//! Named statement clauses and their default rendering.
//!
//! The default rendering follows the ORM's MySQL-like assumptions. Dialects
//! replace it per clause name through [`crate::Dialect::clause_builders`].

use crate::expression::{build_joined, Expression, AND_WITH_SPACE};
use crate::writer::{Builder, Writer};

/// Clause name for the projection.
pub const SELECT: &str = "SELECT";
/// Clause name for the table list.
pub const FROM: &str = "FROM";
/// Clause name for the filter.
pub const WHERE: &str = "WHERE";
/// Clause name for the ordering.
pub const ORDER_BY: &str = "ORDER BY";
/// Clause name for pagination.
pub const LIMIT: &str = "LIMIT";

/// Build order for a plain query.
pub const QUERY_CLAUSES: &[&str] = &[SELECT, FROM, WHERE, ORDER_BY, LIMIT];

/// A single ORDER BY term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByColumn {
    /// Column name, possibly dotted.
    pub column: String,
    /// Descending order.
    pub desc: bool,
}

/// Pagination: both parts are optional and a zero counts as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limit {
    /// Maximum number of rows.
    pub limit: Option<u64>,
    /// Number of rows to skip.
    pub offset: Option<u64>,
}

impl Limit {
    /// Row count, if positive.
    #[must_use]
    pub fn limit(&self) -> Option<u64> {
        self.limit.filter(|n| *n > 0)
    }

    /// Offset, if positive.
    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        self.offset.filter(|n| *n > 0)
    }
}

/// The payload of a clause.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseExpr {
    /// Projected columns; empty means `*`.
    Select {
        /// Emit `DISTINCT`.
        distinct: bool,
        /// Column names.
        columns: Vec<String>,
    },
    /// Source tables.
    From(Vec<String>),
    /// Top-level filter expressions, conjoined by default.
    Where(Vec<Expression>),
    /// Ordering terms.
    OrderBy(Vec<OrderByColumn>),
    /// Pagination.
    Limit(Limit),
    /// Any other expression, rendered after the clause name.
    Expr(Expression),
}

/// A named clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Clause name, used both as key and as keyword.
    pub name: String,
    /// Clause payload.
    pub expression: ClauseExpr,
}

impl Clause {
    /// Creates a clause.
    #[must_use]
    pub fn new(name: impl Into<String>, expression: ClauseExpr) -> Self {
        Self {
            name: name.into(),
            expression,
        }
    }

    /// `SELECT columns`.
    #[must_use]
    pub fn select(columns: &[&str]) -> Self {
        Self::new(
            SELECT,
            ClauseExpr::Select {
                distinct: false,
                columns: columns.iter().map(|c| String::from(*c)).collect(),
            },
        )
    }

    /// `FROM table`.
    #[must_use]
    pub fn from(table: &str) -> Self {
        Self::new(FROM, ClauseExpr::From(vec![String::from(table)]))
    }

    /// `WHERE exprs`.
    #[must_use]
    pub fn where_(exprs: Vec<Expression>) -> Self {
        Self::new(WHERE, ClauseExpr::Where(exprs))
    }

    /// `ORDER BY column [DESC]`.
    #[must_use]
    pub fn order_by(column: &str, desc: bool) -> Self {
        Self::new(
            ORDER_BY,
            ClauseExpr::OrderBy(vec![OrderByColumn {
                column: String::from(column),
                desc,
            }]),
        )
    }

    /// Pagination clause.
    #[must_use]
    pub fn limit(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self::new(LIMIT, ClauseExpr::Limit(Limit { limit, offset }))
    }

    /// Renders the clause with the ORM's default rules.
    pub fn build(&self, builder: &mut dyn Builder) {
        match &self.expression {
            ClauseExpr::Select { distinct, columns } => {
                builder.write_string("SELECT ");
                if *distinct {
                    builder.write_string("DISTINCT ");
                }
                if columns.is_empty() {
                    builder.write_byte(b'*');
                }
                write_quoted_list(columns, builder);
            }
            ClauseExpr::From(tables) => {
                builder.write_string("FROM ");
                write_quoted_list(tables, builder);
            }
            ClauseExpr::Where(exprs) => {
                if !exprs.is_empty() {
                    builder.write_string("WHERE ");
                    build_joined(exprs, builder, AND_WITH_SPACE);
                }
            }
            ClauseExpr::OrderBy(columns) => {
                builder.write_string("ORDER BY ");
                for (idx, term) in columns.iter().enumerate() {
                    if idx > 0 {
                        builder.write_byte(b',');
                    }
                    builder.write_quoted(&term.column);
                    if term.desc {
                        builder.write_string(" DESC");
                    }
                }
            }
            ClauseExpr::Limit(limit) => {
                if let Some(n) = limit.limit() {
                    builder.write_string("LIMIT ");
                    builder.write_string(&n.to_string());
                }
                if let Some(n) = limit.offset() {
                    if limit.limit().is_some() {
                        builder.write_byte(b' ');
                    }
                    builder.write_string("OFFSET ");
                    builder.write_string(&n.to_string());
                }
            }
            ClauseExpr::Expr(expr) => {
                builder.write_string(&self.name);
                builder.write_byte(b' ');
                expr.build(builder);
            }
        }
    }
}

fn write_quoted_list(names: &[String], builder: &mut dyn Builder) {
    for (idx, name) in names.iter().enumerate() {
        if idx > 0 {
            builder.write_byte(b',');
        }
        builder.write_quoted(name);
    }
}
