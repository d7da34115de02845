//! A from-scratch feedforward sigmoid network trained one example at a time
//! by backpropagation.
//!
//! ```no_run
//! use sigmanet::{Network, TrainConfig};
//!
//! let mut network = Network::new(&[2, 1], 0.25)?;
//! let examples = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
//! let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![1.0]];
//!
//! let config = TrainConfig::new(10_000, 0.01).with_minimum_epochs(500);
//! network.train(&examples, &targets, &config)?;
//! println!("{:?}", network.predict(&[1.0, 0.0])?);
//! # Ok::<(), sigmanet::NetworkError>(())
//! ```

pub mod math;
pub mod activation;
pub mod error;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid::sigmoid;
pub use error::{Mismatch, NetworkError, Result};
pub use layers::dense::Layer;
pub use layers::unit::Unit;
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use network::trace::ForwardTrace;
pub use loss::sse::SseLoss;
pub use optim::sgd::Sgd;
pub use train::report::{StopReason, TrainReport};
pub use train::train_config::TrainConfig;
