#![allow(dead_code)]

use oxide_dm_core::clause::{self, Clause};
use oxide_dm_core::{Dialect, SqlValue, Statement};

/// Registers `clauses` and renders them in query order.
pub fn render(dialect: &dyn Dialect, clauses: Vec<Clause>) -> (String, Vec<SqlValue>) {
    let mut stmt = Statement::new(dialect);
    for clause in clauses {
        stmt.add_clause(clause);
    }
    stmt.build(clause::QUERY_CLAUSES);
    stmt.finish()
}

pub fn ints(values: &[i64]) -> Vec<SqlValue> {
    values.iter().copied().map(SqlValue::Int).collect()
}
