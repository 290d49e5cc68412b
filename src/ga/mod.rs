//! GA-based placement search.
//!
//! Evolves a population of job → server assignments. Fitness comes from
//! replaying each assignment in the discrete-time simulator and scoring
//! the elapsed time against the sequential baseline and the ideal time.
//!
//! # Encoding
//!
//! One gene per job: the server the job runs on. Genes are ordered by
//! job ID, identically across the population.
//!
//! # Submodules
//!
//! - [`operators`]: initialization, tournament selection, single-point
//!   crossover, reassign mutation

mod config;
pub mod operators;
mod problem;
mod runner;

pub use config::GaConfig;
pub use problem::PlacementProblem;
pub use runner::{GaResult, GaRunner, GenerationReport};
