/// The COPY text-format escape sequence for an absent value.
///
/// This is the literal two characters `\N`, distinct from an empty field.
pub const NULL_MARKER: &str = "\\N";

/// Encode one raw COPY field as a SQL literal.
///
/// The null marker becomes the bare `NULL` keyword. Everything else is
/// wrapped in single quotes after doubling every backslash and every
/// single quote. Backslashes are doubled first so the quote pass cannot
/// touch the escape characters it inserts. No other transformation is
/// applied; numeric-looking fields stay quoted text.
pub fn encode_value(field: &str) -> String {
    if field == NULL_MARKER {
        return "NULL".to_string();
    }

    let escaped = field.replace('\\', "\\\\").replace('\'', "''");
    format!("'{}'", escaped)
}
