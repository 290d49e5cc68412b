//! Fitness evaluation.
//!
//! Scores a simulated assignment in [0, 1] relative to two reference
//! times:
//!
//! - the **sequential baseline** (worst case, all jobs on the slowest
//!   server with one core), scored 0;
//! - the **ideal time** (total work on the fastest server divided by the
//!   number of servers), scored 1.
//!
//! The ideal time is a rough proxy for perfect load distribution, not a
//! tight lower bound.

use crate::error::{Error, Result};
use crate::models::{Assignment, Job, Server, SimulationResult};
use crate::simulator::{ExecutionModel, Simulator};

/// Ideal completion time of the job set.
///
/// Picks the server with the highest `frequency * core_count` (first one
/// on ties), sums the execution time of every job on it under `model`,
/// and divides by the number of servers.
///
/// # Errors
/// [`Error::NoServers`] if `servers` is empty.
pub fn ideal_time(jobs: &[Job], servers: &[Server], model: ExecutionModel) -> Result<f64> {
    let fastest = servers
        .iter()
        .reduce(|best, s| {
            if s.compute_capacity() > best.compute_capacity() {
                s
            } else {
                best
            }
        })
        .ok_or(Error::NoServers)?;

    let total: f64 = jobs
        .iter()
        .map(|job| model.execution_time(job, fastest))
        .sum();
    Ok(total / servers.len() as f64)
}

/// Fitness of `assignment` under the multicore-aware model.
///
/// # Errors
/// Propagates simulator errors (invalid assignment, no servers).
pub fn fitness(
    assignment: &Assignment,
    jobs: &[Job],
    servers: &[Server],
    ideal_time: f64,
) -> Result<f64> {
    let result = Simulator::new(jobs, servers)?.simulate(assignment)?;
    Ok(score(&result, ideal_time))
}

/// Scores a simulation result against an ideal time.
///
/// - `total > baseline` → 0
/// - `baseline == ideal` → 1 if `total <= ideal`, else 0
/// - otherwise `(baseline - total) / (baseline - ideal)` clamped to [0, 1]
pub fn score(result: &SimulationResult, ideal_time: f64) -> f64 {
    let baseline = result.baseline_sequential_time;
    let total = result.total_elapsed_time as f64;

    if total > baseline {
        return 0.0;
    }

    let span = baseline - ideal_time;
    if span == 0.0 {
        return if total <= ideal_time { 1.0 } else { 0.0 };
    }

    let value = (baseline - total) / span;
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Fitness evaluator with the ideal time cached for a run.
///
/// # Example
///
/// ```
/// use ga_placement::fitness::FitnessEvaluator;
/// use ga_placement::models::{Assignment, Job, Server};
///
/// let jobs = vec![Job::new(1, 10.0), Job::new(2, 10.0)];
/// let servers = vec![Server::new(1, 1, 1.0), Server::new(2, 1, 1.0)];
/// let evaluator = FitnessEvaluator::new(&jobs, &servers).unwrap();
///
/// let split = Assignment::new().with_placement(1, 1).with_placement(2, 2);
/// let (fitness, _) = evaluator.evaluate(&split).unwrap();
/// assert!((fitness - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    simulator: Simulator,
    ideal_time: f64,
}

impl FitnessEvaluator {
    /// Creates an evaluator using the multicore-aware model.
    pub fn new(jobs: &[Job], servers: &[Server]) -> Result<Self> {
        Self::with_model(jobs, servers, ExecutionModel::default())
    }

    /// Creates an evaluator using the given execution model for both the
    /// simulation and the ideal time.
    pub fn with_model(jobs: &[Job], servers: &[Server], model: ExecutionModel) -> Result<Self> {
        let simulator = Simulator::new(jobs, servers)?.with_model(model);
        let ideal_time = ideal_time(jobs, servers, model)?;
        Ok(Self {
            simulator,
            ideal_time,
        })
    }

    /// Cached ideal time.
    pub fn ideal_time(&self) -> f64 {
        self.ideal_time
    }

    /// Underlying simulator.
    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Simulates and scores an assignment.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<(f64, SimulationResult)> {
        let result = self.simulator.simulate(assignment)?;
        Ok((score(&result, self.ideal_time), result))
    }

    /// Scores an existing simulation result.
    pub fn score(&self, result: &SimulationResult) -> f64 {
        score(result, self.ideal_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn result_with(baseline: f64, total: u64) -> SimulationResult {
        SimulationResult {
            baseline_sequential_time: baseline,
            total_elapsed_time: total,
            average_wait_time: 0.0,
            idle_time_per_server: BTreeMap::new(),
            wait_time_per_job: BTreeMap::new(),
            completion_time_per_job: BTreeMap::new(),
            pass_count: total,
        }
    }

    #[test]
    fn test_ideal_time_uses_fastest_server() {
        let jobs = vec![Job::new(1, 40.0), Job::new(2, 80.0).with_multicore(true)];
        let servers = vec![Server::new(1, 2, 2.0), Server::new(2, 4, 2.0)];

        // Fastest: 4 cores × 2.0 = 8.0. Job 1: 40/2 = 20, job 2: 80/8 = 10.
        let ideal = ideal_time(&jobs, &servers, ExecutionModel::MulticoreAware).unwrap();
        assert!((ideal - 15.0).abs() < 1e-10);

        // Single-core model: 20 + 40 = 60, over 2 servers.
        let ideal = ideal_time(&jobs, &servers, ExecutionModel::SingleCore).unwrap();
        assert!((ideal - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_ideal_time_no_servers() {
        let jobs = vec![Job::new(1, 1.0)];
        assert!(matches!(
            ideal_time(&jobs, &[], ExecutionModel::default()),
            Err(Error::NoServers)
        ));
    }

    #[test]
    fn test_score_worse_than_baseline_is_zero() {
        assert!((score(&result_with(10.0, 11), 2.0) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_linear_between_references() {
        // (20 - 14) / (20 - 8) = 0.5
        assert!((score(&result_with(20.0, 14), 8.0) - 0.5).abs() < 1e-10);
        assert!((score(&result_with(20.0, 20), 8.0) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_clamped_above_ideal() {
        assert!((score(&result_with(20.0, 5), 8.0) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_degenerate_span() {
        assert!((score(&result_with(15.0, 15), 15.0) - 1.0).abs() < 1e-10);
        assert!((score(&result_with(15.0, 14), 15.0) - 1.0).abs() < 1e-10);
        assert!((score(&result_with(15.5, 15), 15.5) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_always_in_unit_interval() {
        for total in 0..40 {
            let f = score(&result_with(30.0, total), 6.0);
            assert!((0.0..=1.0).contains(&f));
            if total > 30 {
                assert!((f - 0.0).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_two_job_single_server_scenario() {
        let jobs = vec![Job::new(1, 10.0), Job::new(2, 20.0)];
        let servers = vec![Server::new(1, 1, 2.0)];
        let assignment = Assignment::new().with_placement(1, 1).with_placement(2, 1);

        // baseline = ideal = 15, total = 15
        let ideal = ideal_time(&jobs, &servers, ExecutionModel::default()).unwrap();
        assert!((ideal - 15.0).abs() < 1e-10);
        let f = fitness(&assignment, &jobs, &servers, ideal).unwrap();
        assert!((f - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_evaluator_prefers_balanced_assignment() {
        let jobs = vec![Job::new(1, 10.0), Job::new(2, 10.0)];
        let servers = vec![Server::new(1, 1, 1.0), Server::new(2, 1, 1.0)];
        let evaluator = FitnessEvaluator::new(&jobs, &servers).unwrap();
        assert!((evaluator.ideal_time() - 10.0).abs() < 1e-10);

        let split = Assignment::new().with_placement(1, 1).with_placement(2, 2);
        let stacked = Assignment::new().with_placement(1, 1).with_placement(2, 1);

        let (f_split, r_split) = evaluator.evaluate(&split).unwrap();
        let (f_stacked, _) = evaluator.evaluate(&stacked).unwrap();
        assert!((f_split - 1.0).abs() < 1e-10);
        assert!((f_stacked - 0.0).abs() < 1e-10);
        assert!((evaluator.score(&r_split) - f_split).abs() < 1e-10);
    }
}
