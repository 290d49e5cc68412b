//! Simulation result model.
//!
//! Metrics produced by one replay of an assignment. All time values are
//! in abstract unit time steps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{JobId, ServerId};

/// Metrics of one simulated execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// All jobs run one at a time on the slowest server with one core.
    pub baseline_sequential_time: f64,
    /// Number of passes in which at least one server made progress.
    pub total_elapsed_time: u64,
    /// Mean of per-job wait units.
    pub average_wait_time: f64,
    /// Replay passes (counted like `pass_count`, not elapsed steps) each
    /// server spent with an empty queue. Passes in which no server made
    /// progress are included, so this can exceed `total_elapsed_time`.
    pub idle_time_per_server: BTreeMap<ServerId, u64>,
    /// Units each job spent queued behind a running job.
    pub wait_time_per_job: BTreeMap<JobId, u64>,
    /// Value of `total_elapsed_time` when each job was dequeued.
    pub completion_time_per_job: BTreeMap<JobId, u64>,
    /// Passes made by the replay, including passes with no progress.
    pub pass_count: u64,
}

impl SimulationResult {
    /// Longest wait of any single job (0 when there are no jobs).
    pub fn max_wait_time(&self) -> u64 {
        self.wait_time_per_job.values().copied().max().unwrap_or(0)
    }
}
