mod block;
pub use block::*;

mod stats;
pub use stats::*;

pub mod test_case;
