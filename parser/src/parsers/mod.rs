use uncopy_common::ConvertStats;

mod header_parser;
pub use header_parser::HeaderParser;

mod row_parser;
pub use row_parser::{RowParseResult, RowParser};

/// Shared state threaded through the parsers during one pass.
#[derive(Debug, Default)]
pub struct ParserContext {
    /// Counters accumulated over the whole pass.
    pub stats: ConvertStats,
}

impl ParserContext {
    pub fn new() -> Self {
        Self::default()
    }
}
