use core::fmt;

/// Counters accumulated over one conversion pass.
///
/// Threaded through the pass and returned to the caller, then displayed
/// once as the end-of-run summary line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    /// COPY blocks whose header line matched.
    pub blocks_converted: usize,
    /// Data rows emitted as INSERT statements.
    pub rows_converted: usize,
}

impl fmt::Display for ConvertStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Done. Blocks converted: {}, rows converted: {}.",
            self.blocks_converted, self.rows_converted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let stats = ConvertStats {
            blocks_converted: 2,
            rows_converted: 17,
        };

        assert_eq!(
            stats.to_string(),
            "Done. Blocks converted: 2, rows converted: 17."
        );
    }

    #[test]
    fn test_default_is_zeroed() {
        let stats = ConvertStats::default();
        assert_eq!(stats.blocks_converted, 0);
        assert_eq!(stats.rows_converted, 0);
    }
}
