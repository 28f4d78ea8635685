use ndarray::{Array, Array1, ArrayView, Axis, Dimension, RemoveAxis, Zip};

use crate::error::Result;
use crate::loss::shape::batch_size;
use crate::loss::{LossGrad, LossWeights};

/// Label-weighted L1 loss over `(N, C, H, W)` (or any `(N, ...)`) tensors.
///
///   L = (1/N) · Σ_i w_i · Σ_j |recon_ij − target_ij|
///
/// where `w_i` is the real weight when `label_i > 0`, otherwise the synthetic
/// weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedL1Loss {
    weights: LossWeights,
}

impl WeightedL1Loss {
    pub fn new(weight_real: f64, weight_synthetic: f64) -> Result<WeightedL1Loss> {
        Ok(WeightedL1Loss::from_weights(LossWeights::new(weight_real, weight_synthetic)?))
    }

    pub fn from_weights(weights: LossWeights) -> WeightedL1Loss {
        WeightedL1Loss { weights }
    }

    pub fn weights(&self) -> LossWeights {
        self.weights
    }

    /// Tensor form: |recon − target| → per-sample sum → × weight → batch mean.
    pub fn loss<D: Dimension + RemoveAxis>(
        &self,
        recon: &Array<f64, D>,
        target: &Array<f64, D>,
        label: &Array1<f64>,
    ) -> Result<f64> {
        let n = batch_size(recon.shape(), target.shape(), label.len())?;
        let diff = Zip::from(recon).and(target).map_collect(|&r, &t| (r - t).abs());
        let per_sample: Array1<f64> = diff.axis_iter(Axis(0)).map(|s| s.sum()).collect();
        let weighted = per_sample * self.weights.select(label.view());
        Ok(weighted.sum() / n as f64)
    }

    /// Subgradient of `loss`: w_i · sign(recon − target) / N, 0 where equal.
    ///
    /// For callers without a host autodiff runtime; training code normally
    /// differentiates `loss` itself.
    pub fn derivative<D: Dimension + RemoveAxis>(
        &self,
        recon: &Array<f64, D>,
        target: &Array<f64, D>,
        label: &Array1<f64>,
    ) -> Result<LossGrad<D>> {
        let n = batch_size(recon.shape(), target.shape(), label.len())? as f64;
        let weights = self.weights.select(label.view());
        let mut grad = Zip::from(recon).and(target).map_collect(|&r, &t| {
            let diff = r - t;
            if diff > 0.0 { 1.0 } else if diff < 0.0 { -1.0 } else { 0.0 }
        });
        for (mut sample, &w) in grad.axis_iter_mut(Axis(0)).zip(weights.iter()) {
            sample *= w / n;
        }
        Ok(LossGrad::from_input(grad))
    }

    /// Plain-array form: an explicit loop over samples with the same shape
    /// validation as `loss`. Kept as the reference the tensor form is
    /// checked against.
    pub fn reference<D: Dimension + RemoveAxis>(
        &self,
        recon: ArrayView<f64, D>,
        target: ArrayView<f64, D>,
        label: &[f64],
    ) -> Result<f64> {
        let n = batch_size(recon.shape(), target.shape(), label.len())?;
        let mut sum = 0.0;
        for ((r, t), &l) in recon.outer_iter().zip(target.outer_iter()).zip(label) {
            let wt = self.weights.for_label(l);
            sum += wt * r.iter().zip(t.iter()).map(|(a, b)| (a - b).abs()).sum::<f64>();
        }
        Ok(sum / n as f64)
    }
}
