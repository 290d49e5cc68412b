//! Generation loop.
//!
//! # Algorithm
//!
//! For each of `generation_count` generations:
//! 1. Evaluate every individual (simulate + score).
//! 2. Record the fittest individual of the generation.
//! 3. Breed a full replacement population: pairs of tournament-selected
//!    parents produce two children each by crossover and mutation, until
//!    the population size is reached (surplus is truncated).
//!
//! Replacement is fully generational with no elitism. The result carries
//! the fittest individual of the final evaluation and, separately, the
//! fittest individual seen in any generation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::operators::tournament_select;
use super::{GaConfig, PlacementProblem};
use crate::error::{Error, Result};
use crate::models::{Assignment, Population, SimulationResult};

/// Best individual of one generation, as seen by observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Zero-based generation index.
    pub generation: usize,
    /// Highest fitness in the generation.
    pub best_fitness: f64,
    /// Simulation metrics of the fittest individual.
    pub best_result: SimulationResult,
}

/// Outcome of a search run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Fittest individual of the final generation's evaluation.
    pub best: Assignment,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Simulation metrics of `best`.
    pub best_result: SimulationResult,
    /// Fittest individual over all generations (earliest on ties).
    pub best_ever: Assignment,
    /// Fitness of `best_ever`.
    pub best_ever_fitness: f64,
    /// Generation in which `best_ever` was evaluated.
    pub best_ever_generation: usize,
    /// One report per generation.
    pub history: Vec<GenerationReport>,
    /// Number of generations run.
    pub generations: usize,
}

/// Runs the placement GA.
pub struct GaRunner;

impl GaRunner {
    /// Runs a search from a random initial population.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] for out-of-range parameters; simulator
    /// errors abort the run.
    pub fn run(problem: &PlacementProblem, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_observer(problem, config, |_| {})
    }

    /// Runs a search, calling `observer` after each generation's evaluation.
    pub fn run_with_observer<F>(
        problem: &PlacementProblem,
        config: &GaConfig,
        observer: F,
    ) -> Result<GaResult>
    where
        F: FnMut(&GenerationReport),
    {
        config.validate()?;
        let mut rng = seeded_rng(config);
        let population = problem.initial_population(config.population_size, &mut rng);
        evolve(problem, config, population, &mut rng, observer)
    }

    /// Runs a search from a caller-supplied initial population.
    ///
    /// The population length (not `config.population_size`) fixes the
    /// size of every generation.
    ///
    /// # Errors
    /// [`Error::EmptyPopulationFitness`] if `population` is empty.
    pub fn run_with_population<F>(
        problem: &PlacementProblem,
        config: &GaConfig,
        population: Population,
        observer: F,
    ) -> Result<GaResult>
    where
        F: FnMut(&GenerationReport),
    {
        config.validate()?;
        let mut rng = seeded_rng(config);
        evolve(problem, config, population, &mut rng, observer)
    }
}

fn seeded_rng(config: &GaConfig) -> SmallRng {
    match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

#[instrument(
    level = "info",
    skip_all,
    fields(population_size = population.len(), generation_count = config.generation_count)
)]
fn evolve<R, F>(
    problem: &PlacementProblem,
    config: &GaConfig,
    mut population: Population,
    rng: &mut R,
    mut observer: F,
) -> Result<GaResult>
where
    R: Rng,
    F: FnMut(&GenerationReport),
{
    let mut history = Vec::with_capacity(config.generation_count);
    let mut last: Option<(Assignment, f64, SimulationResult)> = None;
    let mut best_ever: Option<(Assignment, f64, usize)> = None;

    for generation in 0..config.generation_count {
        let evaluations = evaluate_population(problem, &population, config.parallel)?;
        let fitness: Vec<f64> = evaluations.iter().map(|(f, _)| *f).collect();

        let best_idx = fittest(&fitness).ok_or(Error::EmptyPopulationFitness { generation })?;
        let (best_fitness, best_result) = evaluations
            .into_iter()
            .nth(best_idx)
            .ok_or(Error::EmptyPopulationFitness { generation })?;

        tracing::debug!(
            generation,
            best_fitness,
            total_elapsed_time = best_result.total_elapsed_time,
            average_wait_time = best_result.average_wait_time,
            "generation evaluated"
        );

        let report = GenerationReport {
            generation,
            best_fitness,
            best_result: best_result.clone(),
        };
        observer(&report);
        history.push(report);

        let best = population[best_idx].clone();
        let improved = match &best_ever {
            Some((_, fitness, _)) => best_fitness > *fitness,
            None => true,
        };
        if improved {
            best_ever = Some((best.clone(), best_fitness, generation));
        }
        last = Some((best, best_fitness, best_result));

        population = next_generation(problem, &population, &fitness, config, rng);
    }

    let (best, best_fitness, best_result) = last.ok_or(Error::EmptyPopulationFitness {
        generation: config.generation_count,
    })?;
    let (best_ever, best_ever_fitness, best_ever_generation) =
        best_ever.unwrap_or_else(|| (best.clone(), best_fitness, 0));

    tracing::info!(
        generations = history.len(),
        best_fitness,
        best_ever_fitness,
        total_elapsed_time = best_result.total_elapsed_time,
        "search finished"
    );

    Ok(GaResult {
        best,
        best_fitness,
        best_result,
        best_ever,
        best_ever_fitness,
        best_ever_generation,
        generations: history.len(),
        history,
    })
}

/// Index of the first maximal fitness.
fn fittest(fitness: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, &f) in fitness.iter().enumerate() {
        match best {
            Some(b) if fitness[b] >= f => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Breeds a replacement population of the same size.
fn next_generation<R: Rng>(
    problem: &PlacementProblem,
    population: &[Assignment],
    fitness: &[f64],
    config: &GaConfig,
    rng: &mut R,
) -> Population {
    let size = population.len();
    let k = config.effective_tournament_size(size);
    let mut next = Vec::with_capacity(size + 1);

    while next.len() < size {
        let (Some(i), Some(j)) = (
            tournament_select(fitness, k, rng),
            tournament_select(fitness, k, rng),
        ) else {
            break;
        };

        let (mut child1, mut child2) = problem.crossover(&population[i], &population[j], rng);
        problem.mutate(&mut child1, config.mutation_rate, rng);
        problem.mutate(&mut child2, config.mutation_rate, rng);
        next.push(child1);
        next.push(child2);
    }

    next.truncate(size);
    next
}

#[cfg(feature = "parallel")]
fn evaluate_population(
    problem: &PlacementProblem,
    population: &[Assignment],
    parallel: bool,
) -> Result<Vec<(f64, SimulationResult)>> {
    use rayon::prelude::*;

    if parallel {
        population
            .par_iter()
            .map(|individual| problem.evaluate(individual))
            .collect()
    } else {
        population
            .iter()
            .map(|individual| problem.evaluate(individual))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_population(
    problem: &PlacementProblem,
    population: &[Assignment],
    _parallel: bool,
) -> Result<Vec<(f64, SimulationResult)>> {
    population
        .iter()
        .map(|individual| problem.evaluate(individual))
        .collect()
}
