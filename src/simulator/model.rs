//! Execution-time models.
//!
//! Converts a job's size into the number of time units it occupies its
//! host server. Two variants are provided so the same replay engine
//! serves both the multicore-aware and the multicore-naive formulations.

use serde::{Deserialize, Serialize};

use crate::models::{Job, Server};

/// Execution-time formula used by the simulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionModel {
    /// Multicore jobs parallelize perfectly across all host cores;
    /// others run on one core.
    #[default]
    MulticoreAware,
    /// Every job runs on a single core regardless of its capability.
    SingleCore,
}

impl ExecutionModel {
    /// Time units `job` needs on `server`.
    pub fn execution_time(&self, job: &Job, server: &Server) -> f64 {
        match self {
            Self::MulticoreAware if job.supports_multicore => {
                job.size / server.compute_capacity()
            }
            _ => job.size / server.frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_core_job_ignores_cores() {
        let job = Job::new(1, 100.0);
        let server = Server::new(1, 8, 2.0);
        let t = ExecutionModel::MulticoreAware.execution_time(&job, &server);
        assert!((t - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_multicore_job_uses_all_cores() {
        let job = Job::new(1, 100.0).with_multicore(true);
        let server = Server::new(1, 4, 2.0);
        let t = ExecutionModel::MulticoreAware.execution_time(&job, &server);
        assert!((t - 12.5).abs() < 1e-10);
    }

    #[test]
    fn test_single_core_model_ignores_multicore_flag() {
        let job = Job::new(1, 100.0).with_multicore(true);
        let server = Server::new(1, 4, 2.0);
        let t = ExecutionModel::SingleCore.execution_time(&job, &server);
        assert!((t - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_default_is_multicore_aware() {
        assert_eq!(ExecutionModel::default(), ExecutionModel::MulticoreAware);
    }
}
