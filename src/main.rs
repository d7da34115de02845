// Trains the logical-OR network and prints its four predictions.
// Optional first argument: a JSON run file
//   { "network": { "widths": [2, 1], "learning_rate": 0.25 },
//     "training": { "iterations": 10000, "error_stop_threshold": 0.01, "minimum_epochs": 500 } }
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sigmanet::{NetworkSpec, TrainConfig};

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RunConfig {
    network: NetworkSpec,
    training: TrainConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            network: NetworkSpec::new(vec![2, 1], 0.25),
            training: TrainConfig::new(10_000, 0.01).with_minimum_epochs(500),
        }
    }
}

fn load_run_config(path: Option<String>) -> sigmanet::Result<RunConfig> {
    let Some(path) = path else {
        return Ok(RunConfig::default());
    };
    let file = std::fs::File::open(path)?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .ok();
}

fn main() -> sigmanet::Result<()> {
    setup_logging("info");

    let run = load_run_config(std::env::args().nth(1))?;
    let mut network = run.network.build()?;

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let expected_outputs = vec![vec![0.0], vec![1.0], vec![1.0], vec![1.0]];

    let report = network.train(&inputs, &expected_outputs, &run.training)?;
    info!(
        stop_reason = ?report.stop_reason,
        epochs = report.epochs_run,
        sse = ?report.final_sse,
        "training finished"
    );

    for input in &inputs {
        println!("Input: {:?} -> Output: {:?}", input, network.predict(input)?);
    }

    Ok(())
}
