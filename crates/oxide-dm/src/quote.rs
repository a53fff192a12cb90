//! Identifier quoting.

use oxide_dm_core::Writer;

/// Writes `name` in double quotes, quoting each segment of a dotted path.
///
/// `users` becomes `"users"` and `app.users` becomes `"app"."users"`.
/// Segments are not validated.
pub fn quote_to(writer: &mut dyn Writer, name: &str) {
    writer.write_byte(b'"');
    if name.contains('.') {
        for (idx, segment) in name.split('.').enumerate() {
            if idx > 0 {
                writer.write_string(".\"");
            }
            writer.write_string(segment);
            writer.write_byte(b'"');
        }
    } else {
        writer.write_string(name);
        writer.write_byte(b'"');
    }
}
