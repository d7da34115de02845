use crate::activation::sigmoid::sigmoid;
use crate::error::{Mismatch, Result};
use crate::math::matrix::dot;

/// One unit of a layer: a borrowed view over its row of the layer's weight
/// arena.
#[derive(Debug, Clone, Copy)]
pub struct Unit<'a> {
    weights: &'a [f64],
}

impl<'a> Unit<'a> {
    pub fn new(weights: &'a [f64]) -> Unit<'a> {
        Unit { weights }
    }

    pub fn weights(&self) -> &'a [f64] {
        self.weights
    }

    /// Weighted sum `Σ w_i x_i + bias` over every input.
    pub fn activate(&self, inputs: &[f64], bias: f64) -> Result<f64> {
        if inputs.len() != self.weights.len() {
            return Err(Mismatch::UnitInputs {
                expected: self.weights.len(),
                found: inputs.len(),
            }
            .into());
        }
        Ok(dot(inputs, self.weights) + bias)
    }

    pub fn transfer(&self, inputs: &[f64], bias: f64) -> Result<f64> {
        Ok(sigmoid(self.activate(inputs, bias)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn activate_sums_every_component() {
        let unit = Unit::new(&[0.5, -1.0, 2.0]);
        assert_abs_diff_eq!(unit.activate(&[2.0, 3.0, 0.25], 0.1).unwrap(), -1.4, epsilon = 1e-12);
    }

    #[test]
    fn activate_single_input() {
        let unit = Unit::new(&[3.0]);
        assert_abs_diff_eq!(unit.activate(&[2.0], 0.5).unwrap(), 6.5, epsilon = 1e-12);
    }

    #[test]
    fn transfer_applies_sigmoid() {
        let unit = Unit::new(&[1.0, 1.0]);
        assert_eq!(unit.transfer(&[1.0, -1.0], 0.0).unwrap(), 0.5);
    }

    #[test]
    fn wrong_input_count_is_rejected() {
        let unit = Unit::new(&[1.0, 1.0]);
        let err = unit.activate(&[1.0], 0.0).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::ConfigurationMismatch(Mismatch::UnitInputs { expected: 2, found: 1 })
        ));
    }
}
