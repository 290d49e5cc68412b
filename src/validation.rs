//! Input validation for placement problems.
//!
//! Checks the job and server sets once, before any search starts.
//! Detects:
//! - Empty job or server sets
//! - Duplicate IDs
//! - Non-positive or non-finite numeric fields
//!
//! Malformed records are the loader's responsibility to skip; this
//! module reports whatever reached the core so the search never runs on
//! an inconsistent problem.

use crate::models::{Job, Server};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs or two servers share the same ID.
    DuplicateId,
    /// A numeric field is zero, negative, NaN or infinite.
    NonPositiveValue,
    /// The job set or the server set is empty.
    EmptyInput,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the job and server sets of a placement problem.
///
/// Checks:
/// 1. At least one job and one server
/// 2. No duplicate job IDs
/// 3. No duplicate server IDs
/// 4. Job size, memory and bandwidth are positive and finite
/// 5. Server core count is positive; frequency and capacities are
///    positive and finite
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(jobs: &[Job], servers: &[Server]) -> ValidationResult {
    let mut errors = Vec::new();

    if jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Job set is empty",
        ));
    }
    if servers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Server set is empty",
        ));
    }

    let mut job_ids = HashSet::new();
    for job in jobs {
        if !job_ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
        for (field, value) in [
            ("size", job.size),
            ("memory", job.memory),
            ("bandwidth", job.bandwidth),
        ] {
            if !is_positive(value) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveValue,
                    format!("Job {} has invalid {field}: {value}", job.id),
                ));
            }
        }
    }

    let mut server_ids = HashSet::new();
    for server in servers {
        if !server_ids.insert(server.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate server ID: {}", server.id),
            ));
        }
        if server.core_count == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("Server {} has no cores", server.id),
            ));
        }
        for (field, value) in [
            ("frequency", server.frequency),
            ("memory_capacity", server.memory_capacity),
            ("bandwidth_capacity", server.bandwidth_capacity),
        ] {
            if !is_positive(value) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveValue,
                    format!("Server {} has invalid {field}: {value}", server.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
