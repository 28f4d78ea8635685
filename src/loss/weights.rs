use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::{LossError, Result};

/// The fixed `(real, synthetic)` weight pair owned by a loss instance.
///
/// A sample counts as real when its label is strictly greater than zero.
/// A label of exactly `0.0` (or NaN) selects the synthetic weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights", into = "RawWeights")]
pub struct LossWeights {
    real: f64,
    synthetic: f64,
}

#[derive(Serialize, Deserialize)]
struct RawWeights {
    real: f64,
    synthetic: f64,
}

impl LossWeights {
    /// 0.6 real / 0.4 synthetic.
    pub const DEFAULT_L1: LossWeights = LossWeights { real: 0.6, synthetic: 0.4 };
    /// 0.4 real / 0.6 synthetic.
    pub const DEFAULT_L2: LossWeights = LossWeights { real: 0.4, synthetic: 0.6 };

    pub fn new(real: f64, synthetic: f64) -> Result<LossWeights> {
        if !real.is_finite() {
            return Err(LossError::InvalidWeight { name: "real", value: real });
        }
        if !synthetic.is_finite() {
            return Err(LossError::InvalidWeight { name: "synthetic", value: synthetic });
        }
        Ok(LossWeights { real, synthetic })
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn synthetic(&self) -> f64 {
        self.synthetic
    }

    /// Weight for a single label.
    pub fn for_label(&self, label: f64) -> f64 {
        if label > 0.0 { self.real } else { self.synthetic }
    }

    /// Per-sample weights for a batch of labels, one elementwise select.
    pub fn select(&self, labels: ArrayView1<f64>) -> Array1<f64> {
        labels.mapv(|l| self.for_label(l))
    }

    /// Both weights multiplied by `k`.
    pub fn scaled(&self, k: f64) -> Result<LossWeights> {
        LossWeights::new(self.real * k, self.synthetic * k)
    }
}

impl TryFrom<RawWeights> for LossWeights {
    type Error = LossError;

    fn try_from(raw: RawWeights) -> Result<Self> {
        LossWeights::new(raw.real, raw.synthetic)
    }
}

impl From<LossWeights> for RawWeights {
    fn from(w: LossWeights) -> Self {
        RawWeights { real: w.real, synthetic: w.synthetic }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn zero_label_is_synthetic() {
        let w = LossWeights::new(0.6, 0.4).unwrap();
        assert_eq!(w.for_label(0.0), 0.4);
        assert_eq!(w.for_label(-0.0), 0.4);
        assert_eq!(w.for_label(f64::NAN), 0.4);
        assert_eq!(w.for_label(1e-12), 0.6);
    }

    #[test]
    fn select_is_per_sample() {
        let w = LossWeights::new(2.0, 0.5).unwrap();
        let labels = array![1.0, 0.0, -3.0, 0.25];
        assert_eq!(w.select(labels.view()), array![2.0, 0.5, 0.5, 2.0]);
    }

    #[test]
    fn rejects_non_finite_weights() {
        assert!(matches!(
            LossWeights::new(f64::INFINITY, 0.4),
            Err(LossError::InvalidWeight { name: "real", .. })
        ));
        assert!(matches!(
            LossWeights::new(0.6, f64::NAN),
            Err(LossError::InvalidWeight { name: "synthetic", .. })
        ));
    }

    #[test]
    fn deserialize_validates() {
        let ok: LossWeights = serde_json::from_str(r#"{"real":0.6,"synthetic":0.4}"#).unwrap();
        assert_eq!(ok, LossWeights::new(0.6, 0.4).unwrap());
        // JSON has no NaN or infinity literal; an out-of-range number must not slip through.
        let bad = serde_json::from_str::<LossWeights>(r#"{"real":1e400,"synthetic":0.4}"#);
        assert!(bad.is_err());
    }
}
