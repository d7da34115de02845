pub mod network;
pub mod spec;
pub mod trace;

pub use network::{Network, DEFAULT_INIT_RANGE};
pub use spec::NetworkSpec;
pub use trace::ForwardTrace;
