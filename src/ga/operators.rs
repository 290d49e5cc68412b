//! Genetic operators for job placement.
//!
//! All operators act on [`Assignment`]s in ascending job-ID order. Every
//! individual of a population covers the same job set, so a gene position
//! always refers to the same job and no operator can duplicate or drop a
//! job.
//!
//! # Operators
//!
//! - [`random_assignment`]: every job on a uniformly random server
//! - [`tournament_select`]: fittest of `k` distinct sampled individuals
//! - [`single_point_crossover`]: prefix/suffix exchange at one cut
//! - [`reassign_mutation`]: per-gene random server redraw

use rand::prelude::IndexedRandom;
use rand::seq::index::sample;
use rand::Rng;

use crate::models::{Assignment, Job, Server};

/// Places every job on a uniformly random server.
///
/// Returns an empty assignment when `servers` is empty.
pub fn random_assignment<R: Rng>(jobs: &[Job], servers: &[Server], rng: &mut R) -> Assignment {
    jobs.iter()
        .filter_map(|job| servers.choose(rng).map(|server| (job.id, server.id)))
        .collect()
}

/// Tournament selection.
///
/// Samples `tournament_size` distinct indices without replacement
/// (clamped to the population size) and returns the one with the highest
/// fitness. Ties go to the first sampled. `None` for an empty population.
pub fn tournament_select<R: Rng>(
    fitness: &[f64],
    tournament_size: usize,
    rng: &mut R,
) -> Option<usize> {
    if fitness.is_empty() {
        return None;
    }
    let k = tournament_size.clamp(1, fitness.len());

    let mut winner: Option<usize> = None;
    for idx in sample(rng, fitness.len(), k).iter() {
        match winner {
            Some(w) if fitness[w] >= fitness[idx] => {}
            _ => winner = Some(idx),
        }
    }
    winner
}

/// Single-point crossover.
///
/// Draws a cut uniformly from `[1, n-1]`. The first child takes the
/// first `cut` genes of `p1` and the rest of `p2`; the second child is the
/// complement. Individuals with fewer than two genes (or parents of
/// different lengths) are returned unchanged.
pub fn single_point_crossover<R: Rng>(
    p1: &Assignment,
    p2: &Assignment,
    rng: &mut R,
) -> (Assignment, Assignment) {
    let n = p1.len();
    if n < 2 || p2.len() != n {
        return (p1.clone(), p2.clone());
    }
    let cut = rng.random_range(1..n);

    let mut child1 = Assignment::new();
    let mut child2 = Assignment::new();
    for (pos, ((job, s1), (other_job, s2))) in p1.iter().zip(p2.iter()).enumerate() {
        debug_assert_eq!(job, other_job, "parents cover different job sets");
        if pos < cut {
            child1.assign(job, s1);
            child2.assign(job, s2);
        } else {
            child1.assign(job, s2);
            child2.assign(job, s1);
        }
    }
    (child1, child2)
}

/// Redraws the server of each gene with probability `rate`.
///
/// Job IDs are never touched. Returns the number of redrawn genes (a
/// redraw may pick the same server again).
pub fn reassign_mutation<R: Rng>(
    assignment: &mut Assignment,
    rate: f64,
    servers: &[Server],
    rng: &mut R,
) -> usize {
    let mut redrawn = 0;
    for server_id in assignment.servers_mut() {
        if rng.random::<f64>() < rate {
            if let Some(server) = servers.choose(rng) {
                *server_id = server.id;
                redrawn += 1;
            }
        }
    }
    redrawn
}
