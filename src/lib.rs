//! Job placement search for heterogeneous servers.
//!
//! Finds a good assignment of a fixed job set to a fixed server set with
//! a genetic algorithm whose fitness signal comes from a discrete-time
//! replay of job execution.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Server`, `Assignment`,
//!   `SimulationResult`
//! - **`validation`**: Input integrity checks (duplicate IDs, non-positive
//!   fields, empty sets)
//! - **`simulator`**: FCFS-per-server time-step replay, execution-time
//!   models, KPIs
//! - **`fitness`**: Normalized [0, 1] score between the sequential
//!   baseline and the ideal time
//! - **`ga`**: Configuration, operators and the generation loop
//! - **`dataset`**: Seeded random problem instances
//!
//! # Example
//!
//! ```
//! use ga_placement::dataset::DatasetGenerator;
//! use ga_placement::ga::{GaConfig, GaRunner, PlacementProblem};
//!
//! let data = DatasetGenerator::new()
//!     .with_job_count(12)
//!     .with_server_count(3)
//!     .with_seed(1)
//!     .generate();
//! let problem = PlacementProblem::new(&data.jobs, &data.servers).unwrap();
//! let config = GaConfig::default()
//!     .with_population_size(10)
//!     .with_generation_count(5)
//!     .with_seed(1);
//!
//! let result = GaRunner::run(&problem, &config).unwrap();
//! assert!((0.0..=1.0).contains(&result.best_fitness));
//! ```
//!
//! Not a real-time scheduler: there is no model of network topology, job
//! dependencies, preemption or server failure, and the search gives no
//! optimality guarantee.

pub mod dataset;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod models;
pub mod simulator;
pub mod validation;

pub use error::{Error, InvalidAssignment, Result};
