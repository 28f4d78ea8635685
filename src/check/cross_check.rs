use ndarray::Ix2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LossConfig;
use crate::error::Result;
use crate::loss::WeightedLossKind;
use crate::math::random::{randn, random_labels};

/// Shapes and tolerance for comparing the tensor form of each loss against
/// its plain-array reference on random data.
///
/// Defaults mirror a typical training batch: 16 RGB 128×128 images and
/// 27 lighting coefficients per sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossCheckConfig {
    pub batch_size: usize,
    pub channels: usize,
    pub height: usize,
    pub width: usize,
    pub features: usize,
    /// Largest accepted `|tensor − reference|`.
    pub tolerance: f64,
    /// Fixed RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for CrossCheckConfig {
    fn default() -> Self {
        CrossCheckConfig {
            batch_size: 16,
            channels: 3,
            height: 128,
            width: 128,
            features: 27,
            tolerance: 1e-4,
            seed: None,
        }
    }
}

/// Both evaluations of one loss on the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub kind: WeightedLossKind,
    pub tensor: f64,
    pub reference: f64,
}

impl CheckOutcome {
    pub fn abs_error(&self) -> f64 {
        (self.tensor - self.reference).abs()
    }

    /// NaN never passes.
    pub fn passed(&self, tolerance: f64) -> bool {
        self.abs_error() < tolerance
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossCheckReport {
    pub tolerance: f64,
    pub outcomes: Vec<CheckOutcome>,
}

impl CrossCheckReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed(self.tolerance))
    }

    pub fn outcome(&self, kind: WeightedLossKind) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.kind == kind)
    }
}

/// Evaluates both losses in tensor and reference form on fresh random data.
pub fn run_cross_check(config: &LossConfig) -> Result<CrossCheckReport> {
    let check = &config.check;
    let mut rng = match check.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let n = check.batch_size;
    let labels = random_labels(&mut rng, n);

    let image_shape = [n, check.channels, check.height, check.width];
    let recon = randn(&mut rng, &image_shape)?;
    let recon_m = randn(&mut rng, &image_shape)?;
    let l1 = config.l1_loss();
    let l1_outcome = CheckOutcome {
        kind: WeightedLossKind::L1,
        tensor: l1.loss(&recon, &recon_m, &labels)?,
        reference: l1.reference(recon.view(), recon_m.view(), &labels.to_vec())?,
    };
    debug!(?image_shape, ?l1_outcome, "evaluated weighted L1");

    let feature_shape = [n, check.features];
    let lighting = randn(&mut rng, &feature_shape)?.into_dimensionality::<Ix2>()?;
    let lighting_m = randn(&mut rng, &feature_shape)?.into_dimensionality::<Ix2>()?;
    let l2 = config.l2_loss();
    let l2_outcome = CheckOutcome {
        kind: WeightedLossKind::L2,
        tensor: l2.loss(&lighting, &lighting_m, &labels)?,
        reference: l2.reference(lighting.view(), lighting_m.view(), &labels.to_vec())?,
    };
    debug!(?feature_shape, ?l2_outcome, "evaluated weighted L2");

    Ok(CrossCheckReport {
        tolerance: check.tolerance,
        outcomes: vec![l1_outcome, l2_outcome],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LossError;

    fn small_config(seed: u64) -> LossConfig {
        LossConfig {
            check: CrossCheckConfig {
                batch_size: 4,
                channels: 3,
                height: 8,
                width: 8,
                features: 27,
                seed: Some(seed),
                ..CrossCheckConfig::default()
            },
            ..LossConfig::default()
        }
    }

    #[test]
    fn forms_agree_on_random_data() {
        let report = run_cross_check(&small_config(11)).unwrap();
        assert!(report.passed(), "{report:?}");
        assert_eq!(report.outcomes.len(), 2);
        assert!(report.outcome(WeightedLossKind::L1).is_some());
        assert!(report.outcome(WeightedLossKind::L2).is_some());
    }

    #[test]
    fn seeded_runs_repeat() {
        let a = run_cross_check(&small_config(5)).unwrap();
        let b = run_cross_check(&small_config(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_batch_is_reported() {
        let mut config = small_config(0);
        config.check.batch_size = 0;
        assert!(matches!(run_cross_check(&config), Err(LossError::EmptyBatch)));
    }

    #[test]
    fn huge_image_config_is_an_error() {
        let mut config = small_config(2);
        config.check.height = usize::MAX / 2;
        config.check.width = 4;
        assert!(matches!(run_cross_check(&config), Err(LossError::Layout(_))));
    }

    #[test]
    fn nan_outcome_fails() {
        let outcome = CheckOutcome { kind: WeightedLossKind::L1, tensor: f64::NAN, reference: 0.0 };
        assert!(!outcome.passed(1e-4));
    }
}
