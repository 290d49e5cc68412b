//! Placement GA problem definition.
//!
//! Bridges the domain models (`Job`, `Server`) and the simulator-backed
//! fitness evaluator to the generation loop in [`GaRunner`](super::GaRunner).

use rand::Rng;

use super::operators::{random_assignment, reassign_mutation, single_point_crossover};
use crate::error::{Error, Result};
use crate::fitness::FitnessEvaluator;
use crate::models::{Assignment, Job, Population, Server, SimulationResult};
use crate::simulator::ExecutionModel;
use crate::validation::validate_input;

/// GA problem definition for job placement.
///
/// Owns a validated copy of the job and server sets and a fitness
/// evaluator whose sequential baseline and ideal time are computed once.
///
/// # Example
/// ```
/// use ga_placement::ga::{GaConfig, GaRunner, PlacementProblem};
/// use ga_placement::models::{Job, Server};
///
/// let jobs = vec![Job::new(1, 10.0), Job::new(2, 20.0), Job::new(3, 15.0)];
/// let servers = vec![Server::new(1, 2, 2.0), Server::new(2, 4, 3.0)];
/// let problem = PlacementProblem::new(&jobs, &servers).unwrap();
///
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_generation_count(5)
///     .with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PlacementProblem {
    evaluator: FitnessEvaluator,
}

impl PlacementProblem {
    /// Creates a problem using the multicore-aware execution model.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if the job or server set fails validation.
    pub fn new(jobs: &[Job], servers: &[Server]) -> Result<Self> {
        Self::with_model(jobs, servers, ExecutionModel::default())
    }

    /// Creates a problem using the given execution model.
    pub fn with_model(jobs: &[Job], servers: &[Server], model: ExecutionModel) -> Result<Self> {
        if let Err(errors) = validate_input(jobs, servers) {
            tracing::warn!(
                problems = errors.len(),
                first = errors.first().map(|e| e.message.as_str()).unwrap_or_default(),
                "rejecting placement problem input"
            );
            return Err(Error::InvalidInput(errors));
        }
        let evaluator = FitnessEvaluator::with_model(jobs, servers, model)?;
        Ok(Self { evaluator })
    }

    /// Jobs in load order.
    pub fn jobs(&self) -> &[Job] {
        self.evaluator.simulator().jobs()
    }

    /// Servers in load order.
    pub fn servers(&self) -> &[Server] {
        self.evaluator.simulator().servers()
    }

    /// Fitness evaluator (with cached baseline and ideal time).
    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Creates a random individual.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> Assignment {
        random_assignment(self.jobs(), self.servers(), rng)
    }

    /// Builds `size` independent individuals with [`create_individual`](Self::create_individual).
    pub fn initial_population<R: Rng>(&self, size: usize, rng: &mut R) -> Population {
        (0..size).map(|_| self.create_individual(rng)).collect()
    }

    /// Simulates and scores an individual.
    pub fn evaluate(&self, individual: &Assignment) -> Result<(f64, SimulationResult)> {
        self.evaluator.evaluate(individual)
    }

    /// Recombines two parents into two children.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &Assignment,
        parent2: &Assignment,
        rng: &mut R,
    ) -> (Assignment, Assignment) {
        single_point_crossover(parent1, parent2, rng)
    }

    /// Redraws servers of an individual with per-gene probability `rate`.
    pub fn mutate<R: Rng>(&self, individual: &mut Assignment, rate: f64, rng: &mut R) {
        reassign_mutation(individual, rate, self.servers(), rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn make_test_problem() -> (Vec<Job>, Vec<Server>) {
        let jobs = vec![
            Job::new(1, 120.0),
            Job::new(2, 300.0).with_multicore(true),
            Job::new(3, 45.0),
            Job::new(4, 80.0).with_multicore(true),
        ];
        let servers = vec![
            Server::new(1, 4, 2.0),
            Server::new(2, 8, 3.5),
            Server::new(3, 16, 2.4),
        ];
        (jobs, servers)
    }

    #[test]
    fn test_rejects_invalid_input() {
        let (jobs, _) = make_test_problem();
        let servers = vec![Server::new(1, 4, 2.0), Server::new(1, 8, 3.0)];

        let err = PlacementProblem::new(&jobs, &servers).unwrap_err();
        match err {
            Error::InvalidInput(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::DuplicateId));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_individual_is_valid() {
        let (jobs, servers) = make_test_problem();
        let problem = PlacementProblem::new(&jobs, &servers).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let individual = problem.create_individual(&mut rng);
        let (fitness, result) = problem.evaluate(&individual).unwrap();
        assert!((0.0..=1.0).contains(&fitness));
        assert_eq!(result.wait_time_per_job.len(), 4);
    }

    #[test]
    fn test_initial_population_size() {
        let (jobs, servers) = make_test_problem();
        let problem = PlacementProblem::new(&jobs, &servers).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let population = problem.initial_population(30, &mut rng);
        assert_eq!(population.len(), 30);
        assert!(population.iter().all(|a| a.len() == 4));
    }

    #[test]
    fn test_rejects_empty_job_set() {
        let (_, servers) = make_test_problem();
        let err = PlacementProblem::new(&[], &servers).unwrap_err();
        match err {
            Error::InvalidInput(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::EmptyInput));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_crossover_and_mutation() {
        let (jobs, servers) = make_test_problem();
        let problem = PlacementProblem::new(&jobs, &servers).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let p1 = problem.create_individual(&mut rng);
        let p2 = problem.create_individual(&mut rng);
        let (mut c1, c2) = problem.crossover(&p1, &p2, &mut rng);
        problem.mutate(&mut c1, 0.5, &mut rng);

        assert!(problem.evaluate(&c1).is_ok());
        assert!(problem.evaluate(&c2).is_ok());
    }

    #[test]
    fn test_model_changes_fitness_landscape() {
        let (jobs, servers) = make_test_problem();
        let aware = PlacementProblem::new(&jobs, &servers).unwrap();
        let naive =
            PlacementProblem::with_model(&jobs, &servers, ExecutionModel::SingleCore).unwrap();

        let all_on_2: Assignment = jobs.iter().map(|j| (j.id, 2)).collect();
        let (_, r_aware) = aware.evaluate(&all_on_2).unwrap();
        let (_, r_naive) = naive.evaluate(&all_on_2).unwrap();
        assert!(r_aware.total_elapsed_time < r_naive.total_elapsed_time);
        assert!(
            (r_aware.baseline_sequential_time - r_naive.baseline_sequential_time).abs() < 1e-10
        );
    }
}
