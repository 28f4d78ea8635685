pub mod error;
pub mod math;
pub mod loss;
pub mod config;
pub mod check;

// Convenience re-exports
pub use error::{LossError, Result};
pub use loss::{LossGrad, LossWeights, WeightedL1Loss, WeightedL2Loss, WeightedLossKind};
pub use config::LossConfig;
pub use check::{run_cross_check, CrossCheckConfig, CrossCheckReport};
