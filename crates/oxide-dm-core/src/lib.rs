//! # oxide-dm-core
//!
//! The ORM side of the contract that SQL dialects plug into.
//!
//! This crate provides:
//! - A closed boolean [`Expression`] tree and named [`Clause`]s
//! - A [`Statement`] buffer that renders clauses and collects bound values
//! - Table metadata ([`Schema`], [`Field`]) consulted for ordering and
//!   column types
//! - The [`Dialect`] trait, with the ORM's MySQL-like [`GenericDialect`]
//!
//! ## Rendering a query
//!
//! ```rust
//! use oxide_dm_core::clause::{self, Clause};
//! use oxide_dm_core::{Expression, GenericDialect, Statement};
//!
//! let dialect = GenericDialect::new();
//! let mut stmt = Statement::new(&dialect);
//! stmt.add_clause(Clause::select(&["id", "name"]));
//! stmt.add_clause(Clause::from("users"));
//! stmt.add_clause(Clause::where_(vec![Expression::in_list("id", [1_i64, 2])]));
//! stmt.add_clause(Clause::limit(Some(10), None));
//! stmt.build(clause::QUERY_CLAUSES);
//!
//! let (sql, vars) = stmt.finish();
//! assert_eq!(
//!     sql,
//!     "SELECT `id`,`name` FROM `users` WHERE `id` IN ((?,?)) LIMIT 10"
//! );
//! assert_eq!(vars.len(), 2);
//! ```

pub mod clause;
pub mod dialect;
pub mod expression;
pub mod schema;
pub mod statement;
pub mod value;
pub mod writer;

pub use clause::{Clause, ClauseExpr, Limit, OrderByColumn};
pub use dialect::{explain_sql, ClauseBuilder, Dialect, GenericDialect};
pub use expression::Expression;
pub use schema::{DataType, Field, Schema};
pub use statement::Statement;
pub use value::{SqlValue, ToSqlValue};
pub use writer::{Builder, Writer};
