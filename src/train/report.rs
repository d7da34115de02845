use serde::{Deserialize, Serialize};

/// Why `train_loop` returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// An epoch's SSE fell to the threshold after the minimum-epoch floor.
    Converged,
    /// Every allowed iteration ran without the stop condition firing.
    IterationsExhausted,
}

/// Summary of a finished training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub stop_reason: StopReason,
    /// Number of epochs actually executed.
    pub epochs_run: usize,
    /// 0-based index of the last epoch; `None` when no epoch ran.
    pub final_epoch: Option<usize>,
    /// SSE of the last epoch's prediction against its target.
    pub final_sse: Option<f64>,
}

impl TrainReport {
    pub fn converged(&self) -> bool {
        self.stop_reason == StopReason::Converged
    }
}
