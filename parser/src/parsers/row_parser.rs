use uncopy_common::CopyBlock;

use super::ParserContext;

/// Parser for data lines inside a COPY block.
///
/// Splits a line on tabs and validates the field count against the
/// block's declared columns. A mismatch is reported, not raised: the row
/// is skipped and the pass continues.
#[derive(Debug, Default)]
pub struct RowParser;

/// The outcome of parsing one data line.
#[derive(Debug, PartialEq)]
pub enum RowParseResult<'a> {
    /// A well-formed row, split into raw fields in column order.
    Row(Vec<&'a str>),
    /// The field count does not match the block's column count.
    Malformed { expected: usize, found: usize },
    /// A blank line, skipped silently.
    Empty,
}

impl RowParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a data line, counting the row if it is well-formed.
    pub fn parse<'a>(
        &self,
        input: &'a str,
        block: &CopyBlock,
        context: &mut ParserContext,
    ) -> RowParseResult<'a> {
        if input.is_empty() {
            return RowParseResult::Empty;
        }

        let fields: Vec<&str> = input.split('\t').collect();
        if fields.len() != block.column_count() {
            return RowParseResult::Malformed {
                expected: block.column_count(),
                found: fields.len(),
            };
        }

        context.stats.rows_converted += 1;
        RowParseResult::Row(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> CopyBlock {
        CopyBlock::new(
            "users",
            vec!["id".to_string(), "name".to_string(), "bio".to_string()],
        )
    }

    #[test]
    fn test_parse_well_formed_row() {
        let parser = RowParser::new();
        let mut context = ParserContext::new();

        let result = parser.parse("1\tAlice\t\\N", &block(), &mut context);
        assert_eq!(result, RowParseResult::Row(vec!["1", "Alice", "\\N"]));
        assert_eq!(context.stats.rows_converted, 1);
    }

    #[test]
    fn test_parse_malformed_row() {
        let parser = RowParser::new();
        let mut context = ParserContext::new();

        let result = parser.parse("1\tAlice", &block(), &mut context);
        assert_eq!(
            result,
            RowParseResult::Malformed {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(context.stats.rows_converted, 0);
    }

    #[test]
    fn test_parse_empty_line() {
        let parser = RowParser::new();
        let mut context = ParserContext::new();

        let result = parser.parse("", &block(), &mut context);
        assert_eq!(result, RowParseResult::Empty);
        assert_eq!(context.stats.rows_converted, 0);
    }

    #[test]
    fn test_parse_keeps_empty_fields() {
        let parser = RowParser::new();
        let mut context = ParserContext::new();

        // Empty fields are real values, distinct from the null marker.
        let result = parser.parse("1\t\t", &block(), &mut context);
        assert_eq!(result, RowParseResult::Row(vec!["1", "", ""]));
    }
}
