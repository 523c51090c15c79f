/// The header data of one COPY block: the target table and its declared
/// column list.
///
/// A `CopyBlock` only lives while the block's data lines are being
/// consumed; it is dropped once the terminator line is reached. Column
/// entries are kept exactly as declared (order-significant, verbatim apart
/// from surrounding whitespace) — no identifier validation happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyBlock {
    pub table: String,
    pub columns: Vec<String>,
}

impl CopyBlock {
    pub fn new<T>(table: T, columns: Vec<String>) -> Self
    where
        T: Into<String>,
    {
        Self {
            table: table.into(),
            columns,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_keeps_column_order() {
        let block = CopyBlock::new(
            "users",
            vec!["id".to_string(), "name".to_string(), "bio".to_string()],
        );

        assert_eq!(block.table, "users");
        assert_eq!(block.columns, vec!["id", "name", "bio"]);
        assert_eq!(block.column_count(), 3);
    }

    #[test]
    fn test_block_accepts_verbatim_columns() {
        // Empty or odd entries are kept as-is; nothing validates them.
        let block = CopyBlock::new("t", vec!["".to_string(), "a b".to_string()]);
        assert_eq!(block.column_count(), 2);
    }
}
