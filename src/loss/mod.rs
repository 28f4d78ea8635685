pub mod weights;
pub mod weighted_l1;
pub mod weighted_l2;
pub mod loss_kind;
mod shape;

use ndarray::{Array, Dimension};

pub use weights::LossWeights;
pub use weighted_l1::WeightedL1Loss;
pub use weighted_l2::WeightedL2Loss;
pub use loss_kind::WeightedLossKind;

/// Gradient of a weighted loss with respect to both compared arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct LossGrad<D: Dimension> {
    /// ∂L/∂input (`recon` or `predicted`).
    pub input: Array<f64, D>,
    /// ∂L/∂target, always `-input`.
    pub target: Array<f64, D>,
}

impl<D: Dimension> LossGrad<D> {
    fn from_input(input: Array<f64, D>) -> Self {
        let target = input.mapv(|g| -g);
        LossGrad { input, target }
    }
}
