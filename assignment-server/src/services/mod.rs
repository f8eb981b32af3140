//! Services
//!
//! - [`Registry`] - organizations, employees, assignments and users

pub mod registry;

pub use registry::Registry;
