//! Output sinks used while rendering clauses.

use crate::value::SqlValue;

/// An append-only text sink.
pub trait Writer {
    /// Appends a string.
    fn write_string(&mut self, s: &str);

    /// Appends a single ASCII byte.
    fn write_byte(&mut self, b: u8);
}

impl Writer for String {
    fn write_string(&mut self, s: &str) {
        self.push_str(s);
    }

    fn write_byte(&mut self, b: u8) {
        self.push(char::from(b));
    }
}

/// A [`Writer`] that also knows how to quote identifiers and bind values.
///
/// Quoting and placeholder syntax are delegated to the active dialect, so
/// clause renderers stay dialect-agnostic.
pub trait Builder: Writer {
    /// Writes an identifier quoted for the active dialect.
    fn write_quoted(&mut self, name: &str);

    /// Binds a value and writes its placeholder.
    ///
    /// A [`SqlValue::List`] binds every member and writes a parenthesized,
    /// comma separated group of placeholders.
    fn add_var(&mut self, value: &SqlValue);
}
