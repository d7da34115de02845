use rand::Rng;

use crate::error::{NetworkError, Result};
use crate::layers::unit::Unit;
use crate::math::matrix::{uniform, Matrix};

/// A weighted layer: `size` units reading `input_size` inputs, with a single
/// bias shared by every unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    weights: Matrix,
    bias: f64,
}

impl Layer {
    /// Allocates a layer with all weights and the bias at zero.
    pub fn zeros(size: usize, input_size: usize) -> Layer {
        Layer {
            weights: Matrix::zeros(size, input_size),
            bias: 0.0,
        }
    }

    /// Seeds weights and bias uniformly from `[-range, range)`.
    pub fn random<R: Rng + ?Sized>(size: usize, input_size: usize, range: f64, rng: &mut R) -> Layer {
        let bias = uniform(rng, range);
        Layer {
            weights: Matrix::random(size, input_size, range, rng),
            bias,
        }
    }

    /// Builds a layer from a row-major weight buffer (`size * input_size`
    /// values, row j belonging to unit j).
    pub fn from_weights(size: usize, input_size: usize, weights: Vec<f64>, bias: f64) -> Result<Layer> {
        if size == 0 || input_size == 0 {
            return Err(NetworkError::InvalidArchitecture(format!(
                "layer dimensions must be positive, got {size} units x {input_size} inputs"
            )));
        }
        let found = weights.len();
        let weights = Matrix::from_flat(size, input_size, weights).ok_or_else(|| {
            NetworkError::InvalidArchitecture(format!(
                "expected {} weights for {size} units x {input_size} inputs, got {found}",
                size * input_size
            ))
        })?;
        Ok(Layer { weights, bias })
    }

    pub fn size(&self) -> usize {
        self.weights.rows
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn unit(&self, j: usize) -> Unit<'_> {
        Unit::new(self.weights.row(j))
    }

    pub fn units(&self) -> impl Iterator<Item = Unit<'_>> + '_ {
        (0..self.size()).map(move |j| self.unit(j))
    }

    /// Transfers the previous layer's outputs through every unit.
    pub fn feed_from(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.units().map(|unit| unit.transfer(input, self.bias)).collect()
    }

    /// Applies the online update for one example: every weight of unit j
    /// moves by `lr * delta[j] * input[i]`, and the shared bias moves by
    /// `lr * delta[j]` once per unit.
    pub fn apply_deltas(&mut self, deltas: &[f64], input: &[f64], lr: f64) {
        debug_assert_eq!(deltas.len(), self.size());
        debug_assert_eq!(input.len(), self.input_size());
        for (j, &delta) in deltas.iter().enumerate() {
            let step = lr * delta;
            for (w, x) in self.weights.row_mut(j).iter_mut().zip(input.iter()) {
                *w += step * x;
            }
            self.bias += step;
        }
    }
}
