//! Placement domain models.
//!
//! Typed records for the problem inputs (`Job`, `Server`), the candidate
//! solution (`Assignment`) and the simulator output (`SimulationResult`).
//! Inputs are immutable for the duration of a search and are checked
//! once by [`crate::validation`].

mod assignment;
mod job;
mod server;
mod simulation;

pub use assignment::{Assignment, Population};
pub use job::{Job, JobId};
pub use server::{Server, ServerId};
pub use simulation::SimulationResult;
