//! Clause rewriters registered with the ORM.
//!
//! Each rewriter replaces the default rendering of one named clause and
//! writes straight into the statement buffer.

mod in_list;
mod limit;
mod where_clause;

pub use in_list::build_in;
pub use limit::rewrite_limit;
pub use where_clause::{contains_boolean_keyword, promote_leading_condition, rewrite_where};
