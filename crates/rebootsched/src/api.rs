//! Curated internal API for the CLI and experiments (UNSTABLE).
//!
//! Breaking changes are allowed; prefer these re-exports over deep paths.

// Input
pub use crate::problem::{Day, Problem, ProblemError, Series};
// Solver pipeline
pub use crate::solver::{
    partition, reboot_days, replay, segment_yield, solve, solve_with, Decision, Memo, Partition,
    Schedule, SolveCfg, Strategy, Tables,
};
// Oracle and instances
pub use crate::brute::{best_schedule, best_yield, BRUTE_FORCE_MAX_DAYS};
pub use crate::sample::{draw_problem, DayCount, ProblemCfg, ReplayToken};
pub use crate::scenarios;
