//! Employee-Assignment Engine
//!
//! Owns the lifecycle of [`EmployeeAssignment`](shared::models::EmployeeAssignment)
//! records: create, partial update, complete and evaluate.
//!
//! # Invariants
//!
//! - At most one record per (employee, assignment) pair
//! - `duration == end_time - start_time` whenever both are set, else null
//! - A stored evaluation score is within `[0, 5]`
//!
//! Every input is validated before anything is written; mutations run
//! inside a single repository transaction.

mod service;
pub mod rules;

pub use service::EmployeeAssignmentEngine;
pub use rules::{ScoreError, derive_duration, parse_score};
