use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations`           — cap on sampled-example epochs
/// - `error_stop_threshold` — stop once an epoch's SSE is at or below this;
///                            must be non-negative
/// - `minimum_epochs`       — early stopping is suppressed before this epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub iterations: usize,
    pub error_stop_threshold: f64,
    pub minimum_epochs: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: 10_000,
            error_stop_threshold: 0.01,
            minimum_epochs: 0,
        }
    }
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no minimum-epoch floor.
    pub fn new(iterations: usize, error_stop_threshold: f64) -> Self {
        TrainConfig {
            iterations,
            error_stop_threshold,
            minimum_epochs: 0,
        }
    }

    pub fn with_minimum_epochs(mut self, minimum_epochs: usize) -> Self {
        self.minimum_epochs = minimum_epochs;
        self
    }

    /// Deserializes a `TrainConfig` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
