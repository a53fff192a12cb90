//! Integration tests for statement assembly through the default dialect
//! and through a dialect with its own clause rewriters.

mod common;

use std::collections::HashMap;

use common::{ints, render};
use oxide_dm_core::clause::{Clause, ClauseExpr, LIMIT};
use oxide_dm_core::{
    ClauseBuilder, DataType, Dialect, Expression, Field, GenericDialect, SqlValue, Statement,
    Writer,
};

#[test]
fn select_with_where_order_and_limit() {
    let (sql, vars) = render(
        &GenericDialect::new(),
        vec![
            Clause::select(&["id", "u.name"]),
            Clause::from("users"),
            Clause::where_(vec![
                Expression::raw_with("age > ?", vec![SqlValue::Int(18)]),
                Expression::Or(vec![Expression::raw("admin = 1")]),
            ]),
            Clause::order_by("name", true),
            Clause::limit(Some(10), Some(30)),
        ],
    );
    assert_eq!(
        sql,
        "SELECT `id`,`u`.`name` FROM `users` WHERE age > ? OR admin = 1 \
         ORDER BY `name` DESC LIMIT 10 OFFSET 30"
    );
    assert_eq!(vars, ints(&[18]));
}

#[test]
fn clauses_build_in_query_order_regardless_of_insertion() {
    let (sql, _) = render(
        &GenericDialect::new(),
        vec![
            Clause::limit(Some(1), None),
            Clause::from("t"),
            Clause::select(&[]),
        ],
    );
    assert_eq!(sql, "SELECT * FROM `t` LIMIT 1");
}

#[test]
fn empty_where_writes_nothing() {
    let (sql, _) = render(
        &GenericDialect::new(),
        vec![Clause::from("t"), Clause::where_(vec![])],
    );
    assert_eq!(sql, "FROM `t` ");
}

#[test]
fn generic_type_mapping() {
    let dialect = GenericDialect::new();
    assert_eq!(dialect.data_type_of(&Field::new("a", DataType::Bool)), "boolean");
    assert_eq!(
        dialect.data_type_of(&Field::new("b", DataType::String).size(20)),
        "varchar(20)"
    );
    assert_eq!(
        dialect.data_type_of(&Field::new("c", DataType::Custom("jsonb".into()))),
        "jsonb"
    );
}

struct Paginating;

fn top_n(clause: &Clause, stmt: &mut Statement<'_>) {
    if let ClauseExpr::Limit(limit) = &clause.expression {
        stmt.write_string("FETCH FIRST ");
        stmt.write_string(&limit.limit().unwrap_or(0).to_string());
        stmt.write_string(" ROWS ONLY");
    }
}

impl Dialect for Paginating {
    fn name(&self) -> &'static str {
        "paginating"
    }

    fn data_type_of(&self, _field: &Field) -> String {
        "text".to_string()
    }

    fn clause_builders(&self) -> HashMap<&'static str, ClauseBuilder> {
        let mut builders: HashMap<&'static str, ClauseBuilder> = HashMap::new();
        builders.insert(LIMIT, top_n);
        builders
    }

    fn after_build(&self, sql: &mut String) {
        sql.push(';');
    }
}

#[test]
fn registered_rewriter_replaces_default_rendering() {
    let (sql, _) = render(
        &Paginating,
        vec![
            Clause::select(&["id"]),
            Clause::from("t"),
            Clause::limit(Some(5), None),
        ],
    );
    assert_eq!(sql, "SELECT \"id\" FROM \"t\" FETCH FIRST 5 ROWS ONLY;");
}

#[test]
fn rewriter_sees_the_other_clauses() {
    fn marks_where(_clause: &Clause, stmt: &mut Statement<'_>) {
        let seen = if stmt.has_clause("WHERE") { "yes" } else { "no" };
        stmt.write_string(seen);
    }

    struct Marking;

    impl Dialect for Marking {
        fn name(&self) -> &'static str {
            "marking"
        }

        fn data_type_of(&self, _field: &Field) -> String {
            "text".to_string()
        }

        fn clause_builders(&self) -> HashMap<&'static str, ClauseBuilder> {
            let mut builders: HashMap<&'static str, ClauseBuilder> = HashMap::new();
            builders.insert(LIMIT, marks_where);
            builders
        }
    }

    let (sql, _) = render(
        &Marking,
        vec![
            Clause::where_(vec![Expression::raw("a = 1")]),
            Clause::limit(Some(1), None),
        ],
    );
    assert_eq!(sql, "WHERE a = 1 yes");
}

#[test]
fn explain_inlines_bound_values() {
    let dialect = GenericDialect::new();
    let mut stmt = Statement::new(&dialect);
    stmt.add_clause(Clause::select(&[]));
    stmt.add_clause(Clause::from("t"));
    stmt.add_clause(Clause::where_(vec![Expression::in_list("id", [1_i64, 2])]));
    stmt.build(oxide_dm_core::clause::QUERY_CLAUSES);
    let (sql, vars) = stmt.finish();
    assert_eq!(
        dialect.explain(&sql, &vars),
        "SELECT * FROM `t` WHERE `id` IN ((1,2))"
    );
}
