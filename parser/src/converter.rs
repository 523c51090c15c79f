use std::io::Write;

use thiserror::Error;
use uncopy_common::{ConvertStats, CopyBlock};

use crate::encoder::encode_value;
use crate::parsers::{HeaderParser, ParserContext, RowParseResult, RowParser};

/// Sentinel line that ends a COPY block's data rows.
const TERMINATOR: &str = "\\.";

/// Errors that abort a conversion pass.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Writing to the output sink failed. Whatever was already written
    /// stays written; there is no partial-completion guarantee beyond
    /// that.
    #[error("failed to write converted output: {0}")]
    Io(#[from] std::io::Error),
}

/// Converts the COPY blocks of a SQL dump into INSERT statements.
///
/// Lines outside a COPY block pass through unchanged. Inside a block,
/// each well-formed data row becomes one INSERT statement; malformed rows
/// are skipped with a SKIP comment instead of aborting the pass. Reaching
/// end of input while still inside a block is an accepted implicit end,
/// not an error.
#[derive(Debug, Default)]
pub struct Converter {
    header_parser: HeaderParser,
    row_parser: RowParser,
}

/// Where the pass currently is: between blocks, or consuming the data
/// lines of one block.
enum State {
    Outside,
    InBlock(CopyBlock),
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one forward pass over `input`, writing converted lines to
    /// `out` in encounter order and returning the pass counters.
    pub fn convert<W: Write>(&self, input: &str, out: &mut W) -> Result<ConvertStats, ConvertError> {
        let mut context = ParserContext::new();
        let mut state = State::Outside;
        let mut lines = input.lines().peekable();

        while let Some(line) = lines.next() {
            match state {
                State::Outside => match self.header_parser.parse(line, &mut context) {
                    Some(block) => {
                        writeln!(out, "-- Converted COPY block for {}", block.table)?;
                        writeln!(out, "-- Original: {}", line)?;
                        state = State::InBlock(block);
                    }
                    None => writeln!(out, "{}", line)?,
                },
                State::InBlock(ref block) => {
                    if is_terminator(line) {
                        // Consume any consecutive terminator lines before
                        // the separator and the return to pass-through.
                        while lines.next_if(|next| is_terminator(next)).is_some() {}
                        writeln!(out)?;
                        state = State::Outside;
                        continue;
                    }

                    match self.row_parser.parse(line, block, &mut context) {
                        RowParseResult::Row(fields) => {
                            let values: Vec<String> =
                                fields.iter().map(|field| encode_value(field)).collect();
                            writeln!(
                                out,
                                "INSERT INTO {} ({}) VALUES ({});",
                                block.table,
                                block.columns.join(", "),
                                values.join(", ")
                            )?;
                        }
                        RowParseResult::Malformed { expected, found } => {
                            writeln!(
                                out,
                                "-- SKIP malformed COPY line (cols {} != fields {}): {}",
                                expected, found, line
                            )?;
                        }
                        RowParseResult::Empty => {}
                    }
                }
            }
        }

        Ok(context.stats)
    }
}

fn is_terminator(line: &str) -> bool {
    line.trim() == TERMINATOR
}
