use crate::activation::sigmoid::sigmoid_derivative;

pub struct SseLoss;

impl SseLoss {
    /// Scalar SSE: Σ (expected - predicted)² over every component.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, t)| (t - p).powi(2))
            .sum()
    }

    /// Output-layer error terms for a sigmoid output: `p (1 - p) (t - p)`.
    pub fn error_terms(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(&p, &t)| sigmoid_derivative(p) * (t - p))
            .collect()
    }
}
