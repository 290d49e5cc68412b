//! Random problem instances.
//!
//! Generates job and server sets with the value ranges used by the
//! reference data generators. Useful for demos, tests and tuning GA
//! parameters; persisting the records is left to the caller (all models
//! are serde-serializable).
//!
//! | Field | Distribution |
//! |-------|--------------|
//! | job size | uniform 1.0..1000.0 |
//! | job memory (MB) | uniform 1.0..4000.0 |
//! | job bandwidth (Mbps) | uniform 1.0..150.0 |
//! | job multicore | fair coin |
//! | server cores | one of 4, 8, 16, 32, 64 |
//! | server frequency (GHz) | uniform 2.0..4.0, two decimals |
//! | server memory (GB) | one of 4, 8, 16, 32, 64, 128 |
//! | server bandwidth (Mbps) | one of 100, 150, 200, 250, 300, 500, 1000 |

use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Job, Server};

const CORE_COUNTS: [u32; 5] = [4, 8, 16, 32, 64];
const MEMORY_CAPACITIES: [f64; 6] = [4.0, 8.0, 16.0, 32.0, 64.0, 128.0];
const BANDWIDTH_CAPACITIES: [f64; 7] = [100.0, 150.0, 200.0, 250.0, 300.0, 500.0, 1000.0];

/// A generated problem instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Jobs with IDs `1..=job_count`.
    pub jobs: Vec<Job>,
    /// Servers with IDs `1..=server_count`.
    pub servers: Vec<Server>,
}

/// Builder for random datasets.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    job_count: usize,
    server_count: usize,
    seed: Option<u64>,
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self {
            job_count: 100,
            server_count: 10,
            seed: None,
        }
    }
}

impl DatasetGenerator {
    /// Creates a generator for 100 jobs and 10 servers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of jobs.
    pub fn with_job_count(mut self, job_count: usize) -> Self {
        self.job_count = job_count;
        self
    }

    /// Sets the number of servers.
    pub fn with_server_count(mut self, server_count: usize) -> Self {
        self.server_count = server_count;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates a dataset.
    pub fn generate(&self) -> Dataset {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.generate_with(&mut rng)
    }

    /// Generates a dataset from the given RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Dataset {
        let jobs = (1..=self.job_count as u64)
            .map(|id| random_job(id, rng))
            .collect();
        let servers = (1..=self.server_count as u64)
            .map(|id| random_server(id, rng))
            .collect();
        Dataset { jobs, servers }
    }
}

fn random_job<R: Rng>(id: u64, rng: &mut R) -> Job {
    Job::new(id, rng.random_range(1.0..1000.0))
        .with_memory(rng.random_range(1.0..4000.0))
        .with_bandwidth(rng.random_range(1.0..150.0))
        .with_multicore(rng.random_bool(0.5))
}

fn random_server<R: Rng>(id: u64, rng: &mut R) -> Server {
    let core_count = *CORE_COUNTS.choose(rng).unwrap_or(&CORE_COUNTS[0]);
    let frequency = (rng.random_range(2.0..4.0_f64) * 100.0).round() / 100.0;
    let memory = *MEMORY_CAPACITIES.choose(rng).unwrap_or(&MEMORY_CAPACITIES[0]);
    let bandwidth = *BANDWIDTH_CAPACITIES
        .choose(rng)
        .unwrap_or(&BANDWIDTH_CAPACITIES[0]);

    Server::new(id, core_count, frequency)
        .with_memory_capacity(memory)
        .with_bandwidth_capacity(bandwidth)
}
