//! The per-statement output buffer.
//!
//! A [`Statement`] collects named clauses, renders them in a caller-chosen
//! order into its SQL buffer, and hands back text plus bound values. It is
//! owned by a single build and discarded afterwards.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::clause::Clause;
use crate::dialect::{ClauseBuilder, Dialect};
use crate::schema::Schema;
use crate::value::SqlValue;
use crate::writer::{Builder, Writer};

/// SQL text, bound values and registered clauses for one statement.
pub struct Statement<'a> {
    dialect: &'a dyn Dialect,
    schema: Option<&'a Schema>,
    sql: String,
    vars: Vec<SqlValue>,
    clauses: HashMap<String, Clause>,
    clause_builders: HashMap<&'static str, ClauseBuilder>,
}

impl<'a> Statement<'a> {
    /// Creates an empty statement rendered through `dialect`.
    #[must_use]
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            dialect,
            schema: None,
            sql: String::new(),
            vars: Vec::new(),
            clauses: HashMap::new(),
            clause_builders: dialect.clause_builders(),
        }
    }

    /// Attaches the table metadata of the model being queried.
    #[must_use]
    pub fn with_schema(mut self, schema: &'a Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// The active dialect.
    #[must_use]
    pub fn dialect(&self) -> &'a dyn Dialect {
        self.dialect
    }

    /// The attached schema, if any.
    #[must_use]
    pub const fn schema(&self) -> Option<&'a Schema> {
        self.schema
    }

    /// SQL written so far.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Values bound so far.
    #[must_use]
    pub fn vars(&self) -> &[SqlValue] {
        &self.vars
    }

    /// Registers a clause, replacing any clause with the same name.
    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.insert(clause.name.clone(), clause);
    }

    /// Returns true when a clause named `name` is registered.
    #[must_use]
    pub fn has_clause(&self, name: &str) -> bool {
        self.clauses.contains_key(name)
    }

    /// Returns the clause registered under `name`.
    #[must_use]
    pub fn clause(&self, name: &str) -> Option<&Clause> {
        self.clauses.get(name)
    }

    /// Renders the registered clauses among `names`, in that order,
    /// separated by single spaces.
    ///
    /// A clause with a dialect rewriter is rendered by it; the others use
    /// their default rendering. The clause being rendered is detached from
    /// the clause map while its rewriter runs.
    pub fn build(&mut self, names: &[&str]) {
        let mut first_written = false;
        for name in names {
            let Some(clause) = self.clauses.remove(*name) else {
                continue;
            };
            if first_written {
                self.write_byte(b' ');
            }
            first_written = true;

            if let Some(rewrite) = self.clause_builders.get(*name).copied() {
                trace!(clause = *name, dialect = self.dialect.name(), "rewriting clause");
                rewrite(&clause, self);
            } else {
                clause.build(self);
            }
            self.clauses.insert((*name).to_string(), clause);
        }
    }

    /// Appends raw SQL, binding `vars` to its `?` placeholders.
    pub fn raw(&mut self, sql: &str, vars: Vec<SqlValue>) {
        crate::expression::Expression::raw_with(sql, vars).build(self);
    }

    /// Clears the SQL buffer and bound values, keeping the clauses.
    pub fn reset(&mut self) {
        self.sql.clear();
        self.vars.clear();
    }

    /// Runs the dialect's final text pass and returns SQL and values.
    #[must_use]
    pub fn finish(mut self) -> (String, Vec<SqlValue>) {
        self.dialect.after_build(&mut self.sql);
        debug!(sql = %self.sql, vars = self.vars.len(), "statement built");
        (self.sql, self.vars)
    }
}

impl Writer for Statement<'_> {
    fn write_string(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    fn write_byte(&mut self, b: u8) {
        self.sql.push(char::from(b));
    }
}

impl Builder for Statement<'_> {
    fn write_quoted(&mut self, name: &str) {
        self.dialect.quote_to(&mut self.sql, name);
    }

    fn add_var(&mut self, value: &SqlValue) {
        match value {
            SqlValue::List(values) if values.is_empty() => self.sql.push_str("(NULL)"),
            SqlValue::List(values) => {
                self.sql.push('(');
                for (idx, v) in values.iter().enumerate() {
                    if idx > 0 {
                        self.sql.push(',');
                    }
                    self.add_var(v);
                }
                self.sql.push(')');
            }
            _ => {
                self.vars.push(value.clone());
                self.dialect.bind_var_to(&mut self.sql, value);
            }
        }
    }
}
