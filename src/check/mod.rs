pub mod cross_check;

pub use cross_check::{run_cross_check, CheckOutcome, CrossCheckConfig, CrossCheckReport};
