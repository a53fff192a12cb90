//! `LIMIT` / `OFFSET` to `OFFSET .. ROWS FETCH NEXT .. ROWS ONLY`.

use oxide_dm_core::clause::ORDER_BY;
use oxide_dm_core::{Builder, Clause, ClauseExpr, Schema, Statement, Writer};
use tracing::debug;

/// Renders a pagination clause in DM syntax.
///
/// DM only paginates ordered results, so an `ORDER BY` is injected when the
/// statement has none: the prioritized primary key when the schema has one,
/// otherwise the no-op `(SELECT NULL FROM DUAL)`.
pub fn rewrite_limit(clause: &Clause, stmt: &mut Statement<'_>) {
    let ClauseExpr::Limit(limit) = &clause.expression else {
        return;
    };

    if !stmt.has_clause(ORDER_BY) {
        stmt.write_string("ORDER BY ");
        match stmt.schema().and_then(Schema::prioritized_primary_field) {
            Some(field) => {
                debug!(column = %field.name, "ordering pagination by primary key");
                stmt.write_quoted(&field.name);
                stmt.write_byte(b' ');
            }
            None => {
                let dummy = stmt.dialect().dummy_table_name();
                debug!(table = dummy, "ordering pagination by dummy table");
                stmt.write_string("(SELECT NULL FROM ");
                stmt.write_string(dummy);
                stmt.write_byte(b')');
            }
        }
    }

    if let Some(offset) = limit.offset() {
        stmt.write_string(" OFFSET ");
        stmt.write_string(&offset.to_string());
        stmt.write_string(" ROWS");
    }
    if let Some(limit) = limit.limit() {
        stmt.write_string(" FETCH NEXT ");
        stmt.write_string(&limit.to_string());
        stmt.write_string(" ROWS ONLY");
    }
}
