use rand::Rng;

use crate::error::{Mismatch, NetworkError, Result};
use crate::layers::dense::Layer;
use crate::network::trace::ForwardTrace;
use crate::train::loop_fn::train_loop;
use crate::train::report::TrainReport;
use crate::train::train_config::TrainConfig;

/// Half-width of the interval initial weights and biases are drawn from.
pub const DEFAULT_INIT_RANGE: f64 = 0.1;

/// A feedforward sigmoid network.
///
/// Layer 0 is a pass-through input layer and owns no parameters; `layers`
/// holds the weighted layers 1..N in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    input_size: usize,
    layers: Vec<Layer>,
    learning_rate: f64,
}

impl Network {
    /// Builds a network with layer widths `widths` (input first, output
    /// last), seeding every weight and bias from the thread RNG.
    pub fn new(widths: &[usize], learning_rate: f64) -> Result<Network> {
        Network::with_rng(widths, learning_rate, DEFAULT_INIT_RANGE, &mut rand::thread_rng())
    }

    /// Like [`Network::new`] with an explicit RNG and initialization range.
    pub fn with_rng<R: Rng + ?Sized>(
        widths: &[usize],
        learning_rate: f64,
        init_range: f64,
        rng: &mut R,
    ) -> Result<Network> {
        validate_widths(widths)?;
        validate_learning_rate(learning_rate)?;
        if !init_range.is_finite() || init_range < 0.0 {
            return Err(NetworkError::InvalidArchitecture(format!(
                "init range must be finite and non-negative, got {init_range}"
            )));
        }

        // Seeded top-down: each layer's weight shape depends on the previous width.
        let layers = widths
            .windows(2)
            .map(|w| Layer::random(w[1], w[0], init_range, rng))
            .collect();

        Ok(Network {
            input_size: widths[0],
            layers,
            learning_rate,
        })
    }

    /// Assembles a network from already-built weighted layers.
    pub fn from_layers(input_size: usize, layers: Vec<Layer>, learning_rate: f64) -> Result<Network> {
        if input_size == 0 {
            return Err(NetworkError::InvalidArchitecture("input width must be positive".into()));
        }
        if layers.is_empty() {
            return Err(NetworkError::InvalidArchitecture(
                "a network needs at least one weighted layer".into(),
            ));
        }
        validate_learning_rate(learning_rate)?;

        let mut prev = input_size;
        for (i, layer) in layers.iter().enumerate() {
            if layer.size() == 0 {
                return Err(NetworkError::InvalidArchitecture(format!("layer {} has zero units", i + 1)));
            }
            if layer.input_size() != prev {
                return Err(NetworkError::InvalidArchitecture(format!(
                    "layer {} reads {} inputs but the previous layer has {prev} units",
                    i + 1,
                    layer.input_size()
                )));
            }
            prev = layer.size();
        }

        Ok(Network {
            input_size,
            layers,
            learning_rate,
        })
    }

    /// Unit count of every layer, input layer first.
    pub fn widths(&self) -> Vec<usize> {
        std::iter::once(self.input_size)
            .chain(self.layers.iter().map(Layer::size))
            .collect()
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(self.input_size, Layer::size)
    }

    /// Weighted layers; `layers()[i - 1]` is layer `i`.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Forward pass that keeps every layer's output for backpropagation.
    pub fn forward(&self, input: &[f64]) -> Result<ForwardTrace> {
        if input.len() != self.input_size {
            return Err(Mismatch::InputWidth {
                expected: self.input_size,
                found: input.len(),
            }
            .into());
        }

        let mut outputs = Vec::with_capacity(self.layers.len() + 1);
        let mut current = input.to_vec();
        for layer in &self.layers {
            let next = layer.feed_from(&current)?;
            outputs.push(std::mem::replace(&mut current, next));
        }
        outputs.push(current);

        Ok(ForwardTrace::new(outputs))
    }

    /// Output vector for `input`; every value lies in (0, 1).
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        Ok(self.forward(input)?.into_output())
    }

    /// Online backpropagation over `examples`/`targets`, sampling with the
    /// thread RNG.
    pub fn train(
        &mut self,
        examples: &[Vec<f64>],
        targets: &[Vec<f64>],
        config: &TrainConfig,
    ) -> Result<TrainReport> {
        train_loop(self, examples, targets, config, &mut rand::thread_rng())
    }

    pub fn train_with_rng<R: Rng + ?Sized>(
        &mut self,
        examples: &[Vec<f64>],
        targets: &[Vec<f64>],
        config: &TrainConfig,
        rng: &mut R,
    ) -> Result<TrainReport> {
        train_loop(self, examples, targets, config, rng)
    }
}

fn validate_widths(widths: &[usize]) -> Result<()> {
    if widths.len() < 2 {
        return Err(NetworkError::InvalidArchitecture(format!(
            "need at least an input and an output layer, got {} widths",
            widths.len()
        )));
    }
    if let Some(i) = widths.iter().position(|&w| w == 0) {
        return Err(NetworkError::InvalidArchitecture(format!("layer {i} has zero units")));
    }
    Ok(())
}

fn validate_learning_rate(learning_rate: f64) -> Result<()> {
    if !learning_rate.is_finite() || learning_rate < 0.0 {
        return Err(NetworkError::InvalidArchitecture(format!(
            "learning rate must be finite and non-negative, got {learning_rate}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn zeroed(widths: &[usize]) -> Network {
        Network::with_rng(widths, 0.5, 0.0, &mut StdRng::seed_from_u64(0)).unwrap()
    }

    #[test]
    fn construction_matches_widths() {
        let net = Network::new(&[3, 5, 2], 0.1).unwrap();
        assert_eq!(net.widths(), vec![3, 5, 2]);
        assert_eq!(net.layers().len(), 2);
        assert_eq!(net.layers()[0].input_size(), 3);
        assert_eq!(net.layers()[1].input_size(), 5);
        assert_eq!(net.output_size(), 2);
    }

    #[test]
    fn parameters_start_small() {
        let net = Network::with_rng(&[4, 6, 3], 0.1, 0.1, &mut StdRng::seed_from_u64(3)).unwrap();
        for layer in net.layers() {
            assert!(layer.bias().abs() <= 0.1);
            assert!(layer.weights().as_slice().iter().all(|w| w.abs() <= 0.1));
        }
    }

    #[test]
    fn rejects_bad_architecture() {
        assert!(Network::new(&[2], 0.1).is_err());
        assert!(Network::new(&[], 0.1).is_err());
        assert!(Network::new(&[2, 0, 1], 0.1).is_err());
        assert!(Network::new(&[2, 1], -0.1).is_err());
        assert!(Network::new(&[2, 1], f64::NAN).is_err());
        assert!(Network::with_rng(&[2, 1], 0.1, -1.0, &mut StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn from_layers_checks_chaining() {
        let ok = Network::from_layers(2, vec![Layer::zeros(3, 2), Layer::zeros(1, 3)], 0.1);
        assert!(ok.is_ok());
        let bad = Network::from_layers(2, vec![Layer::zeros(3, 2), Layer::zeros(1, 2)], 0.1);
        assert!(matches!(bad, Err(NetworkError::InvalidArchitecture(_))));
        assert!(Network::from_layers(2, vec![], 0.1).is_err());
    }

    #[test]
    fn from_layers_rejects_empty_layers() {
        let hidden = Network::from_layers(2, vec![Layer::zeros(0, 2), Layer::zeros(1, 0)], 0.1);
        assert!(matches!(hidden, Err(NetworkError::InvalidArchitecture(_))));
        let output = Network::from_layers(2, vec![Layer::zeros(0, 2)], 0.1);
        assert!(matches!(output, Err(NetworkError::InvalidArchitecture(_))));
    }

    #[test]
    fn zero_parameters_give_half_everywhere() {
        let net = zeroed(&[3, 4, 2]);
        let trace = net.forward(&[1.0, -2.0, 3.0]).unwrap();
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.layer_output(1), &[0.5; 4]);
        assert_eq!(trace.output(), &[0.5, 0.5]);
    }

    #[test]
    fn predict_matches_hand_computation() {
        let hidden = Layer::from_weights(2, 2, vec![1.0, -1.0, 0.5, 0.5], 0.1).unwrap();
        let output = Layer::from_weights(1, 2, vec![2.0, -3.0], -0.2).unwrap();
        let net = Network::from_layers(2, vec![hidden, output], 0.1).unwrap();

        let sig = crate::activation::sigmoid::sigmoid;
        let h0 = sig(1.0 * 0.3 - 1.0 * 0.7 + 0.1);
        let h1 = sig(0.5 * 0.3 + 0.5 * 0.7 + 0.1);
        let expected = sig(2.0 * h0 - 3.0 * h1 - 0.2);

        let out = net.predict(&[0.3, 0.7]).unwrap();
        assert_eq!(out.len(), 1);
        assert_abs_diff_eq!(out[0], expected, epsilon = 1e-12);
    }

    #[test]
    fn predict_rejects_wrong_width_without_mutation() {
        let net = Network::new(&[2, 3, 1], 0.3).unwrap();
        let before = net.clone();
        let err = net.predict(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::ConfigurationMismatch(Mismatch::InputWidth { expected: 2, found: 3 })
        ));
        assert_eq!(net, before);
    }

    #[test]
    fn single_unit_layers() {
        let net = Network::from_layers(1, vec![Layer::from_weights(1, 1, vec![2.0], 0.0).unwrap()], 0.1)
            .unwrap();
        let out = net.predict(&[1.5]).unwrap();
        assert_abs_diff_eq!(out[0], crate::activation::sigmoid::sigmoid(3.0), epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn predict_is_repeatable_and_bounded(
            widths in prop::collection::vec(1usize..6, 2..5),
            seed in any::<u64>(),
            scale in -3.0f64..3.0,
        ) {
            let net = Network::with_rng(&widths, 0.25, 0.1, &mut StdRng::seed_from_u64(seed)).unwrap();
            let input: Vec<f64> = (0..widths[0]).map(|i| scale * (i as f64 + 1.0)).collect();

            let first = net.predict(&input).unwrap();
            let second = net.predict(&input).unwrap();
            prop_assert_eq!(first.len(), widths[widths.len() - 1]);
            prop_assert!(first.iter().zip(second.iter()).all(|(a, b)| a.to_bits() == b.to_bits()));
            prop_assert!(first.iter().all(|&y| y > 0.0 && y < 1.0));
        }
    }
}
