use ndarray::{Array1, Array2, ArrayView2, Axis, Ix2, Zip};

use crate::error::Result;
use crate::loss::shape::batch_size;
use crate::loss::{LossGrad, LossWeights};

/// Label-weighted half sum of squares over `(N, D)` feature vectors, e.g.
/// lighting coefficients.
///
///   L = (1/2N) · Σ_i w_i · Σ_d (predicted_id − target_id)²
///
/// The label selecting `w_i` is its own argument; it is not derived from
/// `predicted` or `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedL2Loss {
    weights: LossWeights,
}

impl WeightedL2Loss {
    pub fn new(weight_real: f64, weight_synthetic: f64) -> Result<WeightedL2Loss> {
        Ok(WeightedL2Loss::from_weights(LossWeights::new(weight_real, weight_synthetic)?))
    }

    pub fn from_weights(weights: LossWeights) -> WeightedL2Loss {
        WeightedL2Loss { weights }
    }

    pub fn weights(&self) -> LossWeights {
        self.weights
    }

    /// Tensor form: (predicted − target)² → row sum → × weight → batch mean / 2.
    pub fn loss(
        &self,
        predicted: &Array2<f64>,
        target: &Array2<f64>,
        label: &Array1<f64>,
    ) -> Result<f64> {
        let n = batch_size(predicted.shape(), target.shape(), label.len())?;
        let diff = Zip::from(predicted).and(target).map_collect(|&p, &t| (p - t).powi(2));
        let per_sample = diff.sum_axis(Axis(1));
        let weighted = per_sample * self.weights.select(label.view());
        Ok(weighted.sum() / n as f64 / 2.0)
    }

    /// Gradient of `loss`: w_i · (predicted − target) / N.
    ///
    /// For callers without a host autodiff runtime.
    pub fn derivative(
        &self,
        predicted: &Array2<f64>,
        target: &Array2<f64>,
        label: &Array1<f64>,
    ) -> Result<LossGrad<Ix2>> {
        let n = batch_size(predicted.shape(), target.shape(), label.len())? as f64;
        let weights = self.weights.select(label.view());
        let mut grad = predicted - target;
        for (mut row, &w) in grad.axis_iter_mut(Axis(0)).zip(weights.iter()) {
            row *= w / n;
        }
        Ok(LossGrad::from_input(grad))
    }

    /// Plain-array form: one row at a time, validated like `loss`.
    pub fn reference(
        &self,
        predicted: ArrayView2<f64>,
        target: ArrayView2<f64>,
        label: &[f64],
    ) -> Result<f64> {
        let n = batch_size(predicted.shape(), target.shape(), label.len())?;
        let mut sum = 0.0;
        for ((p, t), &l) in predicted.outer_iter().zip(target.outer_iter()).zip(label) {
            let wt = self.weights.for_label(l);
            sum += wt * p.iter().zip(t.iter()).map(|(a, b)| (a - b).powi(2)).sum::<f64>();
        }
        Ok(sum / n as f64 / 2.0)
    }
}
