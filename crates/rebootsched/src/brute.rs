//! Exhaustive reference solver over reboot subsets.
//!
//! Tries every subset of interior days `1..=n-2` as the reboot plan and
//! replays it. Exponential; meant as an oracle for small horizons only.

use crate::problem::{Day, Problem, ProblemError};
use crate::solver::{replay, Schedule};

/// Largest horizon the oracle will enumerate (2^(n-2) plans).
pub const BRUTE_FORCE_MAX_DAYS: usize = 20;

/// Best plan found by enumeration. Ties keep the first plan in subset order,
/// which need not be the plan `solve` reports; only totals are comparable.
pub fn best_schedule(problem: &Problem) -> Result<Schedule, ProblemError> {
    let n = problem.days();
    if n > BRUTE_FORCE_MAX_DAYS {
        return Err(ProblemError::TooLargeForBruteForce {
            days: n,
            max: BRUTE_FORCE_MAX_DAYS,
        });
    }
    let interior = n.saturating_sub(2);
    let mut best: Option<Schedule> = None;
    for mask in 0u32..(1u32 << interior) {
        let reboots: Vec<Day> = (0..interior)
            .filter(|bit| mask & (1 << bit) != 0)
            .map(|bit| Day(bit + 1))
            .collect();
        let processed = replay(problem, &reboots);
        let total: f64 = processed.iter().sum();
        if best.as_ref().map_or(true, |b| total > b.total) {
            best = Some(Schedule {
                total,
                reboots,
                processed,
            });
        }
    }
    // mask 0 always runs, so `best` is set
    best.ok_or(ProblemError::Empty)
}

pub fn best_yield(problem: &Problem) -> Result<f64, ProblemError> {
    best_schedule(problem).map(|s| s.total)
}
