use thiserror::Error;

/// Which pair of lengths disagreed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Input vector handed to `predict` / `forward`.
    InputWidth { expected: usize, found: usize },
    /// Training example at `index`.
    ExampleWidth { index: usize, expected: usize, found: usize },
    /// Training target at `index`.
    TargetWidth { index: usize, expected: usize, found: usize },
    /// Number of examples vs. number of targets.
    SampleCount { examples: usize, targets: usize },
    /// Inputs fed to a single unit vs. its weight count.
    UnitInputs { expected: usize, found: usize },
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mismatch::InputWidth { expected, found } => write!(
                f,
                "input length {found} does not match the {expected} input units"
            ),
            Mismatch::ExampleWidth { index, expected, found } => write!(
                f,
                "example {index} has length {found}, expected {expected} input units"
            ),
            Mismatch::TargetWidth { index, expected, found } => write!(
                f,
                "target {index} has length {found}, expected {expected} output units"
            ),
            Mismatch::SampleCount { examples, targets } => write!(
                f,
                "{examples} examples but {targets} targets"
            ),
            Mismatch::UnitInputs { expected, found } => write!(
                f,
                "unit received {found} inputs but holds {expected} weights"
            ),
        }
    }
}

/// Error types for the crate
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("configuration mismatch: {0}")]
    ConfigurationMismatch(Mismatch),

    #[error("invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("invalid training config: {0}")]
    InvalidConfig(String),

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<Mismatch> for NetworkError {
    fn from(m: Mismatch) -> Self {
        NetworkError::ConfigurationMismatch(m)
    }
}

pub type Result<T> = std::result::Result<T, NetworkError>;
