use uncopy_common::CopyBlock;

use super::ParserContext;

/// Parser for COPY block header lines
/// (`COPY <table> (<col>, ...) FROM stdin;`).
///
/// Matching is structural and case-insensitive:
/// - the `COPY` keyword at the start of the line, followed by whitespace
/// - one table name token (anything up to whitespace or `(`)
/// - a parenthesized comma-separated column list; entries are trimmed of
///   surrounding whitespace but otherwise taken verbatim, so empty or
///   whitespace-only entries survive
/// - the `FROM` keyword, whitespace, and the `stdin;` token
///
/// Content after `stdin;` on the same line is ignored. A line that fails
/// the match is not an error; it simply is not a block header.
#[derive(Debug, Default)]
pub struct HeaderParser;

impl HeaderParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a line as a block header, counting the block on a match.
    ///
    /// Returns `None` for anything that is not a header line.
    pub fn parse(&self, input: &str, context: &mut ParserContext) -> Option<CopyBlock> {
        let rest = strip_keyword(input, "COPY")?;
        let (table, rest) = split_table_name(rest)?;
        let rest = rest.trim_start().strip_prefix('(')?;
        let (list, rest) = rest.split_once(')')?;
        let rest = strip_keyword(rest.trim_start(), "FROM")?;
        source_is_stdin(rest)?;

        let columns = list.split(',').map(|c| c.trim().to_string()).collect();
        context.stats.blocks_converted += 1;

        Some(CopyBlock::new(table, columns))
    }
}

/// Strip a leading keyword (case-insensitive) plus the whitespace that
/// must follow it.
fn strip_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let head = input.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }

    let rest = &input[keyword.len()..];
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        // No whitespace after the keyword, so this is a longer token.
        return None;
    }

    Some(trimmed)
}

/// Split off the table name: everything up to whitespace or `(`.
fn split_table_name(input: &str) -> Option<(&str, &str)> {
    let end = input
        .find(|c: char| c.is_whitespace() || c == '(')
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }

    Some((&input[..end], &input[end..]))
}

fn source_is_stdin(rest: &str) -> Option<()> {
    let token = rest.get(.."stdin;".len())?;
    token.eq_ignore_ascii_case("stdin;").then_some(())
}
