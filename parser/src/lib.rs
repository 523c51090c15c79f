use uncopy_common::ConvertStats;

mod converter;
pub use converter::{ConvertError, Converter};

mod encoder;
pub use encoder::{encode_value, NULL_MARKER};

pub mod parsers;


/// Convert a whole dump held in memory, returning the converted text and
/// the pass counters.
pub fn convert(input: &str) -> Result<(String, ConvertStats), ConvertError> {
    let converter = Converter::new();
    let mut out = Vec::new();
    let stats = converter.convert(input, &mut out)?;
    Ok((String::from_utf8_lossy(&out).into_owned(), stats))
}
