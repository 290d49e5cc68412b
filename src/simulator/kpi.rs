//! Simulation quality metrics (KPIs).
//!
//! Derived indicators computed from a [`SimulationResult`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Speed-up | baseline / total elapsed time |
//! | Utilization | 1 - idle / passes, per server |
//! | Avg Utilization | Mean of per-server utilization |
//! | Max Wait | Largest single job wait |

use std::collections::BTreeMap;

use crate::models::{ServerId, SimulationResult};

/// Simulation performance indicators.
#[derive(Debug, Clone)]
pub struct SimulationKpi {
    /// Sequential baseline divided by total elapsed time.
    /// `None` when nothing was executed.
    pub speedup: Option<f64>,
    /// Fraction of passes each server had a job at its queue head.
    pub utilization_by_server: BTreeMap<ServerId, f64>,
    /// Mean of per-server utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Longest wait of any job.
    pub max_wait_time: u64,
    /// Mean wait per job.
    pub average_wait_time: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let speedup = if result.total_elapsed_time == 0 {
            None
        } else {
            Some(result.baseline_sequential_time / result.total_elapsed_time as f64)
        };

        let utilization_by_server: BTreeMap<ServerId, f64> = result
            .idle_time_per_server
            .iter()
            .map(|(&server, &idle)| {
                let utilization = if result.pass_count == 0 {
                    0.0
                } else {
                    1.0 - idle as f64 / result.pass_count as f64
                };
                (server, utilization)
            })
            .collect();

        let avg_utilization = if utilization_by_server.is_empty() {
            0.0
        } else {
            utilization_by_server.values().sum::<f64>() / utilization_by_server.len() as f64
        };

        Self {
            speedup,
            utilization_by_server,
            avg_utilization,
            max_wait_time: result.max_wait_time(),
            average_wait_time: result.average_wait_time,
        }
    }

    /// Whether the result meets the given speed-up and utilization floors.
    pub fn meets_thresholds(&self, min_speedup: f64, min_utilization: f64) -> bool {
        self.speedup.is_some_and(|s| s >= min_speedup) && self.avg_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Job, Server};
    use crate::simulator::simulate;

    fn two_servers() -> Vec<Server> {
        vec![Server::new(1, 1, 1.0), Server::new(2, 1, 1.0)]
    }

    #[test]
    fn test_kpi_balanced() {
        let jobs = vec![Job::new(1, 10.0), Job::new(2, 10.0)];
        let assignment = Assignment::new().with_placement(1, 1).with_placement(2, 2);
        let result = simulate(&assignment, &jobs, &two_servers()).unwrap();

        let kpi = SimulationKpi::calculate(&result);
        // baseline 20 / total 10
        assert!((kpi.speedup.unwrap() - 2.0).abs() < 1e-10);
        assert!((kpi.utilization_by_server[&1] - 1.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 1.0).abs() < 1e-10);
        assert_eq!(kpi.max_wait_time, 0);
    }

    #[test]
    fn test_kpi_stacked() {
        let jobs = vec![Job::new(1, 10.0), Job::new(2, 10.0)];
        let assignment = Assignment::new().with_placement(1, 1).with_placement(2, 1);
        let result = simulate(&assignment, &jobs, &two_servers()).unwrap();

        let kpi = SimulationKpi::calculate(&result);
        assert!((kpi.speedup.unwrap() - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_server[&1] - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_server[&2] - 0.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.5).abs() < 1e-10);
        assert_eq!(kpi.max_wait_time, 10);
    }

    #[test]
    fn test_kpi_empty() {
        let servers = vec![Server::new(1, 1, 1.0)];
        let result = simulate(&Assignment::new(), &[], &servers).unwrap();

        let kpi = SimulationKpi::calculate(&result);
        assert!(kpi.speedup.is_none());
        assert!((kpi.avg_utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let jobs = vec![Job::new(1, 10.0), Job::new(2, 10.0)];
        let assignment = Assignment::new().with_placement(1, 1).with_placement(2, 1);
        let result = simulate(&assignment, &jobs, &two_servers()).unwrap();

        let kpi = SimulationKpi::calculate(&result);
        assert!(kpi.meets_thresholds(1.0, 0.5));
        assert!(!kpi.meets_thresholds(1.5, 0.0));
        assert!(!kpi.meets_thresholds(1.0, 0.9));
    }
}
