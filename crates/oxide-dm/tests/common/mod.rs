#![allow(dead_code)]

use oxide_dm::DmDialect;
use oxide_dm_core::clause::{self, Clause};
use oxide_dm_core::{DataType, Field, Schema, SqlValue, Statement};

pub fn users_schema() -> Schema {
    Schema::new(
        "users",
        vec![
            Field::new("id", DataType::Int)
                .size(64)
                .primary_key()
                .auto_increment(),
            Field::new("name", DataType::String).size(100).not_null(),
            Field::new("email", DataType::String).indexed(),
        ],
    )
}

/// Renders `clauses` in query order through `dialect`.
pub fn build_query(
    dialect: &DmDialect,
    schema: Option<&Schema>,
    clauses: Vec<Clause>,
) -> (String, Vec<SqlValue>) {
    let mut stmt = Statement::new(dialect);
    if let Some(schema) = schema {
        stmt = stmt.with_schema(schema);
    }
    for clause in clauses {
        stmt.add_clause(clause);
    }
    stmt.build(clause::QUERY_CLAUSES);
    stmt.finish()
}
