//! Crate error type.

use crate::models::{JobId, ServerId};
use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the simulator, the fitness evaluator and the search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("InvalidAssignment: {0}")]
    InvalidAssignment(#[from] InvalidAssignment),
    #[error("EmptyPopulationFitness: no fitness values in generation {generation}")]
    EmptyPopulationFitness { generation: usize },
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),
    #[error("InvalidInput: {} problem(s), first: {}", .0.len(), first_message(.0))]
    InvalidInput(Vec<ValidationError>),
    #[error("NoServers: at least one server is required")]
    NoServers,
}

/// Ways an assignment can break the one-server-per-job invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAssignment {
    #[error("job {0} is not placed on any server")]
    MissingJob(JobId),
    #[error("job {0} is not part of the job set")]
    UnknownJob(JobId),
    #[error("job {job_id} is placed on unknown server {server_id}")]
    UnknownServer { job_id: JobId, server_id: ServerId },
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("none")
}
