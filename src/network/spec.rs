use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::network::{Network, DEFAULT_INIT_RANGE};

/// Construction parameters for a [`Network`].
///
/// Only describes the architecture; trained weights are never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSpec {
    /// Units per layer, input layer first, output layer last.
    pub widths: Vec<usize>,
    pub learning_rate: f64,
    /// Initial weights and biases are drawn from `[-init_range, init_range)`.
    pub init_range: f64,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec {
            widths: vec![2, 1],
            learning_rate: 0.25,
            init_range: DEFAULT_INIT_RANGE,
        }
    }
}

impl NetworkSpec {
    pub fn new(widths: Vec<usize>, learning_rate: f64) -> NetworkSpec {
        NetworkSpec {
            widths,
            learning_rate,
            init_range: DEFAULT_INIT_RANGE,
        }
    }

    pub fn build(&self) -> Result<Network> {
        self.build_with_rng(&mut rand::thread_rng())
    }

    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        Network::with_rng(&self.widths, self.learning_rate, self.init_range, rng)
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
