//! Assignment (candidate solution) model.
//!
//! An assignment maps every job to exactly one server. It is keyed by
//! job ID, so a job can never be placed twice; coverage of the full job
//! set is checked by the simulator before a replay.
//!
//! Genetic operators walk the map in ascending job-ID order. Because all
//! individuals of a population cover the same job set, that order is the
//! same for every individual and positional operators (single-point
//! crossover) only recombine server choices per job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{JobId, ServerId};

/// A population of candidate assignments.
pub type Population = Vec<Assignment>;

/// A complete job → server placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    placements: BTreeMap<JobId, ServerId>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a job on a server, returning the previous server if the job
    /// was already placed.
    pub fn assign(&mut self, job_id: JobId, server_id: ServerId) -> Option<ServerId> {
        self.placements.insert(job_id, server_id)
    }

    /// Sets the server of a job (builder form of [`assign`](Self::assign)).
    pub fn with_placement(mut self, job_id: JobId, server_id: ServerId) -> Self {
        self.placements.insert(job_id, server_id);
        self
    }

    /// Server the job is placed on, if any.
    pub fn server_for(&self, job_id: JobId) -> Option<ServerId> {
        self.placements.get(&job_id).copied()
    }

    /// Number of placed jobs.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether no job is placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Iterates `(job_id, server_id)` in ascending job-ID order.
    pub fn iter(&self) -> impl Iterator<Item = (JobId, ServerId)> + '_ {
        self.placements.iter().map(|(&job, &server)| (job, server))
    }

    /// Placed job IDs in ascending order.
    pub fn job_ids(&self) -> impl Iterator<Item = JobId> + '_ {
        self.placements.keys().copied()
    }

    /// Mutable access to the server choices, in ascending job-ID order.
    ///
    /// Job IDs are not reachable through this iterator, which keeps
    /// mutation operators from ever altering the covered job set.
    pub fn servers_mut(&mut self) -> impl Iterator<Item = &mut ServerId> + '_ {
        self.placements.values_mut()
    }
}

impl FromIterator<(JobId, ServerId)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (JobId, ServerId)>>(iter: I) -> Self {
        Self {
            placements: iter.into_iter().collect(),
        }
    }
}
