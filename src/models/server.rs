//! Server model.
//!
//! Servers are the heterogeneous hosts jobs are placed on. Each one has
//! a core count and a clock frequency that together determine how fast
//! it executes a job.

use serde::{Deserialize, Serialize};

/// Server identifier.
pub type ServerId = u64;

/// A server that executes jobs from a FCFS queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// Unique server identifier.
    pub id: ServerId,
    /// Number of cores.
    pub core_count: u32,
    /// Clock frequency (GHz).
    pub frequency: f64,
    /// Memory capacity. Not enforced.
    pub memory_capacity: f64,
    /// Bandwidth capacity (Mbps). Not enforced.
    pub bandwidth_capacity: f64,
}

impl Server {
    /// Creates a new server.
    pub fn new(id: ServerId, core_count: u32, frequency: f64) -> Self {
        Self {
            id,
            core_count,
            frequency,
            memory_capacity: 1.0,
            bandwidth_capacity: 1.0,
        }
    }

    /// Sets the memory capacity.
    pub fn with_memory_capacity(mut self, memory_capacity: f64) -> Self {
        self.memory_capacity = memory_capacity;
        self
    }

    /// Sets the bandwidth capacity (Mbps).
    pub fn with_bandwidth_capacity(mut self, bandwidth_capacity: f64) -> Self {
        self.bandwidth_capacity = bandwidth_capacity;
        self
    }

    /// Aggregate compute capacity: `frequency * core_count`.
    pub fn compute_capacity(&self) -> f64 {
        self.frequency * f64::from(self.core_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_builder() {
        let s = Server::new(2, 16, 3.2)
            .with_memory_capacity(64.0)
            .with_bandwidth_capacity(500.0);

        assert_eq!(s.id, 2);
        assert_eq!(s.core_count, 16);
        assert!((s.frequency - 3.2).abs() < 1e-10);
        assert!((s.memory_capacity - 64.0).abs() < 1e-10);
        assert!((s.bandwidth_capacity - 500.0).abs() < 1e-10);
    }

    #[test]
    fn test_compute_capacity() {
        let s = Server::new(1, 4, 2.5);
        assert!((s.compute_capacity() - 10.0).abs() < 1e-10);
    }
}
