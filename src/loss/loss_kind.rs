use std::fmt;

use serde::{Deserialize, Serialize};

/// Names one of the weighted losses.
///
/// - `L1` — per-sample sum of absolute differences over `(N, ...)` tensors.
/// - `L2` — per-sample half sum of squares over `(N, D)` feature vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightedLossKind {
    L1,
    L2,
}

impl fmt::Display for WeightedLossKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightedLossKind::L1 => f.write_str("weighted_l1"),
            WeightedLossKind::L2 => f.write_str("weighted_l2"),
        }
    }
}
