use rand::Rng;
use tracing::{debug, info, trace};

use crate::error::{Mismatch, NetworkError, Result};
use crate::loss::sse::SseLoss;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::backprop::error_terms;
use crate::train::report::{StopReason, TrainReport};
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` one sampled example per epoch until `config.iterations`
/// epochs have run or the stop condition fires.
///
/// Each epoch draws an example/target pair uniformly with replacement, runs
/// the forward pass, backpropagates error terms and updates every weighted
/// layer in place. The run stops early once an epoch's SSE is at most
/// `config.error_stop_threshold` and the epoch index has reached
/// `config.minimum_epochs`.
///
/// # Errors
/// Returns `ConfigurationMismatch` if any example or target has the wrong
/// width or the two sets differ in length, and `EmptyTrainingSet` if there
/// is nothing to sample, and `InvalidConfig` for a negative or NaN
/// `error_stop_threshold`. In every case the network is left untouched.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    examples: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainReport> {
    validate_config(config)?;
    validate_training_set(network, examples, targets)?;

    let optimizer = Sgd::new(network.learning_rate());
    debug!(
        samples = examples.len(),
        iterations = config.iterations,
        threshold = config.error_stop_threshold,
        minimum_epochs = config.minimum_epochs,
        "training started"
    );

    let mut last = None;

    for epoch in 0..config.iterations {
        let idx = rng.gen_range(0..examples.len());
        let example = &examples[idx];
        let target = &targets[idx];

        let sse = run_one_epoch(network, example, target, &optimizer)?;
        trace!(epoch, sse, "epoch finished");
        last = Some((epoch, sse));

        if sse <= config.error_stop_threshold && epoch >= config.minimum_epochs {
            info!(epoch, sse, "network done training");
            return Ok(TrainReport {
                stop_reason: StopReason::Converged,
                epochs_run: epoch + 1,
                final_epoch: Some(epoch),
                final_sse: Some(sse),
            });
        }
    }

    debug!(iterations = config.iterations, "iterations exhausted");
    Ok(TrainReport {
        stop_reason: StopReason::IterationsExhausted,
        epochs_run: config.iterations,
        final_epoch: last.map(|(epoch, _)| epoch),
        final_sse: last.map(|(_, sse)| sse),
    })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Forward, backward and update for a single example. Returns the SSE of the
/// prediction made before the update.
fn run_one_epoch(
    network: &mut Network,
    example: &[f64],
    target: &[f64],
    optimizer: &Sgd,
) -> Result<f64> {
    let trace = network.forward(example)?;
    let deltas = error_terms(network.layers(), &trace, target);

    for (i, (layer, delta)) in network.layers_mut().iter_mut().zip(deltas.iter()).enumerate() {
        optimizer.step(layer, delta, trace.layer_input(i + 1));
    }

    Ok(SseLoss::loss(trace.output(), target))
}

fn validate_config(config: &TrainConfig) -> Result<()> {
    if config.error_stop_threshold.is_nan() || config.error_stop_threshold < 0.0 {
        return Err(NetworkError::InvalidConfig(format!(
            "error stop threshold must be non-negative, got {}",
            config.error_stop_threshold
        )));
    }
    Ok(())
}

fn validate_training_set(
    network: &Network,
    examples: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<()> {
    let input_size = network.input_size();
    let output_size = network.output_size();

    if let Some((index, example)) = examples.iter().enumerate().find(|(_, e)| e.len() != input_size) {
        return Err(Mismatch::ExampleWidth {
            index,
            expected: input_size,
            found: example.len(),
        }
        .into());
    }

    if let Some((index, target)) = targets.iter().enumerate().find(|(_, t)| t.len() != output_size) {
        return Err(Mismatch::TargetWidth {
            index,
            expected: output_size,
            found: target.len(),
        }
        .into());
    }

    if examples.len() != targets.len() {
        return Err(Mismatch::SampleCount {
            examples: examples.len(),
            targets: targets.len(),
        }
        .into());
    }

    if examples.is_empty() {
        return Err(NetworkError::EmptyTrainingSet);
    }

    Ok(())
}
