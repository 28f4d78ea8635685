use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::check::cross_check::CrossCheckConfig;
use crate::error::Result;
use crate::loss::{LossWeights, WeightedL1Loss, WeightedL2Loss};

/// Weight pairs for both losses plus the cross-check parameters.
///
/// Stored as pretty-printed JSON. Any missing section falls back to its
/// default, so `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossConfig {
    /// Weights for the image-space L1 loss.
    #[serde(default = "default_l1_weights")]
    pub l1: LossWeights,
    /// Weights for the lighting-coefficient L2 loss.
    #[serde(default = "default_l2_weights")]
    pub l2: LossWeights,
    #[serde(default)]
    pub check: CrossCheckConfig,
}

fn default_l1_weights() -> LossWeights {
    LossWeights::DEFAULT_L1
}

fn default_l2_weights() -> LossWeights {
    LossWeights::DEFAULT_L2
}

impl Default for LossConfig {
    fn default() -> Self {
        LossConfig {
            l1: default_l1_weights(),
            l2: default_l2_weights(),
            check: CrossCheckConfig::default(),
        }
    }
}

impl LossConfig {
    pub fn l1_loss(&self) -> WeightedL1Loss {
        WeightedL1Loss::from_weights(self.l1)
    }

    pub fn l2_loss(&self) -> WeightedL2Loss {
        WeightedL2Loss::from_weights(self.l2)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        debug!(path, "saved loss config");
        Ok(())
    }

    /// Deserializes a config from a JSON file. Weights are validated on load.
    pub fn load_json(path: &str) -> Result<LossConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        debug!(path, ?config, "loaded loss config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config: LossConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LossConfig::default());
        assert_eq!(config.l1.real(), 0.6);
        assert_eq!(config.l2.synthetic(), 0.6);
    }

    #[test]
    fn partial_sections_override() {
        let config: LossConfig =
            serde_json::from_str(r#"{"l2":{"real":1.0,"synthetic":0.0},"check":{"seed":3}}"#).unwrap();
        assert_eq!(config.l2, LossWeights::new(1.0, 0.0).unwrap());
        assert_eq!(config.l1, LossConfig::default().l1);
        assert_eq!(config.check.seed, Some(3));
        assert_eq!(config.check.batch_size, 16);
    }
}
