//! Job model.
//!
//! A job is a unit of computational work placed on exactly one server.
//! Its `size` is expressed in work units on a reference single core
//! running at unit frequency, so execution time on a server is derived
//! from the server's frequency (and core count for multicore jobs).

use serde::{Deserialize, Serialize};

/// Job identifier.
pub type JobId = u64;

/// A job to be placed on a server.
///
/// Memory and bandwidth demands are carried for reporting but are not
/// enforced as constraints by the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// Work units required on a single core at unit frequency.
    pub size: f64,
    /// Required memory (MB).
    pub memory: f64,
    /// Required bandwidth (Mbps).
    pub bandwidth: f64,
    /// Whether the job parallelizes across all cores of its host.
    pub supports_multicore: bool,
}

impl Job {
    /// Creates a single-core job with the given ID and size.
    ///
    /// Memory and bandwidth default to 1.0 (the smallest generated demand).
    pub fn new(id: JobId, size: f64) -> Self {
        Self {
            id,
            size,
            memory: 1.0,
            bandwidth: 1.0,
            supports_multicore: false,
        }
    }

    /// Sets the memory demand (MB).
    pub fn with_memory(mut self, memory: f64) -> Self {
        self.memory = memory;
        self
    }

    /// Sets the bandwidth demand (Mbps).
    pub fn with_bandwidth(mut self, bandwidth: f64) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Sets multicore support.
    pub fn with_multicore(mut self, supports_multicore: bool) -> Self {
        self.supports_multicore = supports_multicore;
        self
    }
}
