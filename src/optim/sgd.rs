use crate::layers::dense::Layer;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one online update to a layer given its error terms and the
    /// input it saw during the forward pass.
    pub fn step(&self, layer: &mut Layer, deltas: &[f64], input: &[f64]) {
        layer.apply_deltas(deltas, input, self.learning_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_learning_rate_is_a_no_op() {
        let mut layer = Layer::from_weights(1, 2, vec![0.3, -0.2], 0.05).unwrap();
        let before = layer.clone();
        Sgd::new(0.0).step(&mut layer, &[0.9], &[1.0, 1.0]);
        assert_eq!(layer, before);
    }
}
