//! Debug practice - a scenario runner for learning step-debugging
//!
//! A handful of small utilities (average, maximum, user records, Fibonacci,
//! grades) and a driver that prints their results in labelled scenarios.
//! One utility carries a deliberate off-by-one defect for the learner to
//! find with a debugger.

pub mod cli;
pub mod commands;
pub mod common;
pub mod exercises;
pub mod scenarios;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use scenarios::{Driver, Scenario, Selection};
