//! Discrete-time execution simulator and KPI evaluation.
//!
//! Turns an [`Assignment`](crate::models::Assignment) into concrete
//! performance metrics by replaying FCFS execution on every server in
//! unit time steps.
//!
//! # Execution model
//!
//! [`ExecutionModel`] selects how long a job occupies its host:
//! multicore-aware (multicore jobs use every core) or single-core.
//!
//! # KPI
//!
//! [`SimulationKpi`] derives speed-up and utilization from a result.

mod engine;
mod kpi;
mod model;

pub use engine::{baseline_sequential_time, simulate, Simulator};
pub use kpi::SimulationKpi;
pub use model::ExecutionModel;
