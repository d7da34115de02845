/// Per-layer outputs from one forward pass.
///
/// `outputs[0]` is the input vector itself; `outputs[i]` for `i >= 1` is the
/// output of weighted layer `i`, which is also the input seen by layer
/// `i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardTrace {
    outputs: Vec<Vec<f64>>,
}

impl ForwardTrace {
    pub(crate) fn new(outputs: Vec<Vec<f64>>) -> ForwardTrace {
        debug_assert!(!outputs.is_empty());
        ForwardTrace { outputs }
    }

    /// Output of layer `i` (0 = input layer).
    pub fn layer_output(&self, i: usize) -> &[f64] {
        &self.outputs[i]
    }

    /// Input that weighted layer `i` (`i >= 1`) received.
    pub fn layer_input(&self, i: usize) -> &[f64] {
        &self.outputs[i - 1]
    }

    pub fn output(&self) -> &[f64] {
        self.outputs.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn into_output(mut self) -> Vec<f64> {
        self.outputs.pop().unwrap_or_default()
    }

    /// Number of layers, input layer included.
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}
