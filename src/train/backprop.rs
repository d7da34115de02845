use crate::activation::sigmoid::sigmoid_derivative;
use crate::layers::dense::Layer;
use crate::loss::sse::SseLoss;
use crate::network::trace::ForwardTrace;

/// Error terms for every weighted layer, aligned with `layers`.
///
/// The output layer's terms come from the target residual; each hidden
/// layer's terms are computed from the layer directly after it, walking
/// backwards. All terms use the weights as they were during `trace`.
pub fn error_terms(layers: &[Layer], trace: &ForwardTrace, target: &[f64]) -> Vec<Vec<f64>> {
    let n = layers.len();
    let mut deltas = vec![Vec::new(); n];
    if n == 0 {
        return deltas;
    }

    deltas[n - 1] = SseLoss::error_terms(trace.output(), target);

    for h in (0..n - 1).rev() {
        deltas[h] = hidden_error_terms(trace.layer_output(h + 1), &layers[h + 1], &deltas[h + 1]);
    }

    deltas
}

/// `delta[j] = o_j (1 - o_j) Σ_k w_k[j] · next_delta[k]` where `w_k[j]` is
/// the weight unit k of `next` gives to unit j's output.
pub(crate) fn hidden_error_terms(outputs: &[f64], next: &Layer, next_delta: &[f64]) -> Vec<f64> {
    debug_assert_eq!(outputs.len(), next.input_size());
    debug_assert_eq!(next_delta.len(), next.size());
    outputs
        .iter()
        .enumerate()
        .map(|(j, &o)| {
            let downstream: f64 = next_delta
                .iter()
                .enumerate()
                .map(|(k, &d)| next.weights().get(k, j) * d)
                .sum();
            sigmoid_derivative(o) * downstream
        })
        .collect()
}
