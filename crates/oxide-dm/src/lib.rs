//! # oxide-dm
//!
//! DM (Dameng) dialect for `oxide-dm-core`.
//!
//! # How DM differs from the ORM's defaults
//!
//! - **Identifier quoting**: DM quotes with double quotes (`"`), one pair
//!   per segment of a dotted name: `"app"."users"`.
//! - **Pagination**: there is no `LIMIT`. Rows are paginated with
//!   `OFFSET n ROWS FETCH NEXT m ROWS ONLY`, which is only valid after an
//!   `ORDER BY`; [`clauses::rewrite_limit`] injects one when missing.
//! - **WHERE**: the top-level condition list is re-linearized so that
//!   OR-links and hand-written fragments keep their grouping, and
//!   multi-value `IN` lists are flattened into a single group
//!   ([`clauses::rewrite_where`]).
//! - **Raw SQL**: DM folds unquoted identifiers to upper case, so MySQL
//!   backtick identifiers left in hand-written fragments are rewritten to
//!   upper-cased double-quoted ones after every build ([`raw`]).
//! - **Column types**: see [`data_type`] for the mapping from field
//!   descriptions to DM column types.
//!
//! ## Example
//!
//! ```rust
//! use oxide_dm::DmDialect;
//! use oxide_dm_core::clause::{self, Clause};
//! use oxide_dm_core::{Expression, SqlValue, Statement};
//!
//! let dialect = DmDialect::default();
//! let mut stmt = Statement::new(&dialect);
//! stmt.add_clause(Clause::select(&["id", "name"]));
//! stmt.add_clause(Clause::from("users"));
//! stmt.add_clause(Clause::where_(vec![
//!     Expression::raw_with("`status` = ?", vec![SqlValue::Text("active".into())]),
//!     Expression::in_list("id", [1_i64, 2, 3]),
//! ]));
//! stmt.add_clause(Clause::limit(Some(10), Some(20)));
//! stmt.build(clause::QUERY_CLAUSES);
//!
//! let (sql, vars) = stmt.finish();
//! assert_eq!(
//!     sql,
//!     "SELECT \"id\",\"name\" FROM \"users\"  WHERE \"STATUS\" = ? AND \"id\" IN (?,?,?) \
//!      ORDER BY (SELECT NULL FROM DUAL) OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"
//! );
//! assert_eq!(vars.len(), 4);
//! ```

pub mod clauses;
pub mod config;
pub mod data_type;
mod ddl;
mod dialect;
pub mod error;
pub mod quote;
pub mod raw;

pub use config::DmConfig;
pub use dialect::DmDialect;
pub use error::{DmError, Result};
