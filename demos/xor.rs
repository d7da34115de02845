use rand::{rngs::StdRng, SeedableRng};
use sigmanet::{Network, TrainConfig};

fn main() -> sigmanet::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut network = Network::with_rng(&[2, 3, 1], 0.5, 0.5, &mut rng)?;

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let expected_outputs = vec![
        vec![1.0],
        vec![0.0],
        vec![1.0],
        vec![0.0],
    ];

    let config = TrainConfig::new(200_000, 0.001).with_minimum_epochs(50_000);
    let report = network.train_with_rng(&inputs, &expected_outputs, &config, &mut rng)?;
    println!("{:?} after {} epochs, SSE = {:?}", report.stop_reason, report.epochs_run, report.final_sse);

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.predict(input)?[0]);
    }

    Ok(())
}
