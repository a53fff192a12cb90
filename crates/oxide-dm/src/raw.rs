//! Final text pass over finished statements.
//!
//! Hand-written SQL fragments often use MySQL backtick quoting. DM folds
//! unquoted identifiers to upper case, so `` `user_id` `` is rewritten to
//! `"USER_ID"`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

static BACKTICK_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("`[a-zA-Z0-9_]+`").expect("Invalid backtick identifier regex"));

/// Rewrites every `` `ident` `` in `sql` to `"IDENT"`.
///
/// Only runs of ASCII letters, digits and underscores are matched; anything
/// else between backticks, string literals included, is left alone.
#[must_use]
pub fn rewrite_backticks(sql: &str) -> Cow<'_, str> {
    if !sql.contains('`') {
        return Cow::Borrowed(sql);
    }

    let mut replaced = 0_usize;
    let rewritten = BACKTICK_IDENTIFIER.replace_all(sql, |caps: &Captures<'_>| {
        replaced += 1;
        let ident = caps[0].trim_matches('`');
        format!("\"{}\"", ident.to_uppercase())
    });
    if replaced > 0 {
        debug!(replaced, "rewrote backtick identifiers");
    }
    rewritten
}
