//! Discrete-time replay of an assignment.
//!
//! # Algorithm
//!
//! 1. Group jobs into one FCFS queue per server, in job load order.
//! 2. Repeat passes over all servers (in load order) until every queue
//!    is drained. Per server and pass:
//!    - empty queue: one unit of idle time;
//!    - head job below its requirement: one unit of execution for the
//!      head, one unit of wait for every job queued behind it;
//!    - head job at or above its requirement: the job is dequeued. The
//!      next job does not start until the following pass.
//! 3. The elapsed-time counter advances once per pass in which at least
//!    one server made progress.
//!
//! Requirements are real-valued and compared against integer counters,
//! so a job completes on the first integer step at or after its
//! requirement.
//!
//! # Complexity
//! O(T * s) where T is the number of passes and s the number of servers.
//! Wait time is settled when a job reaches the head of its queue, which
//! yields the same per-job totals as charging every queued job per step.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use crate::error::{Error, InvalidAssignment, Result};
use crate::models::{Assignment, Job, JobId, Server, ServerId, SimulationResult};

use super::ExecutionModel;

/// Job waiting in or running from a server queue.
#[derive(Debug, Clone)]
struct QueuedJob {
    /// Index into the job set.
    job: usize,
    /// Time units the job needs on its server.
    required: f64,
    /// Time units executed so far.
    elapsed: u64,
}

/// Replays assignments over a fixed job and server set.
///
/// The sequential baseline only depends on the job and server sets, so it
/// is computed once at construction and reused for every replay.
///
/// # Example
///
/// ```
/// use ga_placement::models::{Assignment, Job, Server};
/// use ga_placement::simulator::Simulator;
///
/// let jobs = vec![Job::new(1, 10.0), Job::new(2, 20.0)];
/// let servers = vec![Server::new(1, 1, 2.0)];
/// let simulator = Simulator::new(&jobs, &servers).unwrap();
///
/// let assignment = Assignment::new().with_placement(1, 1).with_placement(2, 1);
/// let result = simulator.simulate(&assignment).unwrap();
/// assert_eq!(result.total_elapsed_time, 15);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    jobs: Vec<Job>,
    servers: Vec<Server>,
    model: ExecutionModel,
    job_ids: HashSet<JobId>,
    server_index: HashMap<ServerId, usize>,
    baseline: f64,
}

impl Simulator {
    /// Creates a simulator using the multicore-aware execution model.
    ///
    /// # Errors
    /// [`Error::NoServers`] if `servers` is empty.
    pub fn new(jobs: &[Job], servers: &[Server]) -> Result<Self> {
        let baseline = baseline_sequential_time(jobs, servers)?;
        Ok(Self {
            jobs: jobs.to_vec(),
            servers: servers.to_vec(),
            model: ExecutionModel::default(),
            job_ids: jobs.iter().map(|j| j.id).collect(),
            server_index: servers
                .iter()
                .enumerate()
                .map(|(idx, s)| (s.id, idx))
                .collect(),
            baseline,
        })
    }

    /// Sets the execution-time model.
    pub fn with_model(mut self, model: ExecutionModel) -> Self {
        self.model = model;
        self
    }

    /// Jobs in load order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Servers in load order.
    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    /// Execution-time model in use.
    pub fn model(&self) -> ExecutionModel {
        self.model
    }

    /// Cached sequential baseline.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Per-server FCFS queues (job IDs in service order) for an assignment.
    ///
    /// Servers without jobs map to an empty queue.
    pub fn queues(&self, assignment: &Assignment) -> Result<BTreeMap<ServerId, Vec<JobId>>> {
        let placement = self.place(assignment)?;
        let mut queues: BTreeMap<ServerId, Vec<JobId>> =
            self.servers.iter().map(|s| (s.id, Vec::new())).collect();
        for (job, &server) in self.jobs.iter().zip(&placement) {
            queues
                .entry(self.servers[server].id)
                .or_default()
                .push(job.id);
        }
        Ok(queues)
    }

    /// Replays an assignment and returns its metrics.
    ///
    /// # Errors
    /// [`Error::InvalidAssignment`] if the assignment misses a job, names a
    /// job outside the job set, or places a job on an unknown server.
    pub fn simulate(&self, assignment: &Assignment) -> Result<SimulationResult> {
        let placement = self.place(assignment)?;

        let mut queues: Vec<VecDeque<QueuedJob>> = vec![VecDeque::new(); self.servers.len()];
        for (idx, (job, &server)) in self.jobs.iter().zip(&placement).enumerate() {
            queues[server].push_back(QueuedJob {
                job: idx,
                required: self.model.execution_time(job, &self.servers[server]),
                elapsed: 0,
            });
        }

        let mut busy = vec![0u64; self.servers.len()];
        let mut idle = vec![0u64; self.servers.len()];
        let mut wait = vec![0u64; self.jobs.len()];
        let mut completion = vec![0u64; self.jobs.len()];
        let mut remaining = self.jobs.len();
        let mut total_elapsed = 0u64;
        let mut passes = 0u64;

        while remaining > 0 {
            passes += 1;
            let mut progressed = false;

            for (server, queue) in queues.iter_mut().enumerate() {
                let Some(head) = queue.front_mut() else {
                    idle[server] += 1;
                    continue;
                };

                if (head.elapsed as f64) < head.required {
                    head.elapsed += 1;
                    busy[server] += 1;
                    progressed = true;
                } else {
                    completion[head.job] = total_elapsed;
                    queue.pop_front();
                    remaining -= 1;
                    // Everything executed on this server so far was time
                    // the new head spent queued.
                    if let Some(next) = queue.front() {
                        wait[next.job] = busy[server];
                    }
                }
            }

            if progressed {
                total_elapsed += 1;
            }
        }

        let total_wait: u64 = wait.iter().sum();
        let average_wait_time = if self.jobs.is_empty() {
            0.0
        } else {
            total_wait as f64 / self.jobs.len() as f64
        };

        tracing::trace!(
            total_elapsed,
            passes,
            average_wait_time,
            "simulation finished"
        );

        Ok(SimulationResult {
            baseline_sequential_time: self.baseline,
            total_elapsed_time: total_elapsed,
            average_wait_time,
            idle_time_per_server: self
                .servers
                .iter()
                .zip(&idle)
                .map(|(s, &units)| (s.id, units))
                .collect(),
            wait_time_per_job: self
                .jobs
                .iter()
                .zip(&wait)
                .map(|(j, &units)| (j.id, units))
                .collect(),
            completion_time_per_job: self
                .jobs
                .iter()
                .zip(&completion)
                .map(|(j, &step)| (j.id, step))
                .collect(),
            pass_count: passes,
        })
    }

    /// Resolves the server index of every job, in job load order.
    fn place(&self, assignment: &Assignment) -> Result<Vec<usize>> {
        let placement = self
            .jobs
            .iter()
            .map(|job| {
                let server_id = assignment
                    .server_for(job.id)
                    .ok_or(InvalidAssignment::MissingJob(job.id))?;
                self.server_index.get(&server_id).copied().ok_or(
                    InvalidAssignment::UnknownServer {
                        job_id: job.id,
                        server_id,
                    },
                )
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if let Some(extra) = assignment.job_ids().find(|id| !self.job_ids.contains(id)) {
            return Err(InvalidAssignment::UnknownJob(extra).into());
        }

        Ok(placement)
    }
}

/// Replays `assignment` with the multicore-aware model.
///
/// Convenience form of [`Simulator::simulate`] for one-off calls; a search
/// should build one [`Simulator`] and reuse it.
pub fn simulate(
    assignment: &Assignment,
    jobs: &[Job],
    servers: &[Server],
) -> Result<SimulationResult> {
    Simulator::new(jobs, servers)?.simulate(assignment)
}

/// Time to run every job one after another on the lowest-frequency
/// server, using one core regardless of multicore support.
///
/// # Errors
/// [`Error::NoServers`] if `servers` is empty.
pub fn baseline_sequential_time(jobs: &[Job], servers: &[Server]) -> Result<f64> {
    let slowest = servers
        .iter()
        .min_by(|a, b| a.frequency.total_cmp(&b.frequency))
        .ok_or(Error::NoServers)?;
    Ok(jobs.iter().map(|job| job.size / slowest.frequency).sum())
}
