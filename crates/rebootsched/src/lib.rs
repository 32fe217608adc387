//! Reboot scheduling for a processor whose rate degrades after each reboot.
//!
//! Given a per-day capability profile and a per-day rate profile (indexed by
//! days since the last reboot), find the reboot days that maximise the total
//! data processed, and the per-day trace that attains it.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - `api` and `prelude` are the intended import surfaces for callers.

pub mod api;
pub mod brute;
pub mod problem;
pub mod sample;
pub mod scenarios;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use problem::{Day, Problem, ProblemError, Series};
pub use solver::{solve, solve_with, Schedule, SolveCfg, Strategy};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::problem::{Day, Problem, ProblemError};
    pub use crate::sample::{draw_problem, DayCount, ProblemCfg, ReplayToken};
    pub use crate::solver::{solve, solve_with, Schedule, SolveCfg, Strategy};
}
