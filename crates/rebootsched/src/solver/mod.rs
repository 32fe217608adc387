//! Interval scheduler: optimal reboot plan for a rate-degrading processor.
//!
//! Purpose
//! - Maximise the data processed over an `n`-day horizon when every reboot
//!   costs its whole day but restarts the rate profile at offset 0.
//! - Recover one optimal reboot plan and the per-day processed amounts.
//!
//! Pipeline
//! - `segment`: no-reboot yield of a closed range.
//! - `partition`: best yield per range, at most one reboot split per range,
//!   recorded in `tables`. O(n³) time, O(n²) space.
//! - `reconstruct`: reboot days from the decision table, then a forward replay.
//!
//! The replay sum equals the partitioner total exactly for integer-valued
//! inputs (every partial sum is an exact `f64`); fractional inputs agree up to
//! summation-order rounding.

mod partition;
mod reconstruct;
mod segment;
mod tables;

pub use partition::{partition, Partition, Strategy};
pub use reconstruct::{reboot_days, replay};
pub use segment::segment_yield;
pub use tables::{Decision, Memo, Tables};

use crate::problem::{Day, Problem};

/// Solver configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveCfg {
    pub strategy: Strategy,
}

/// Optimal total, the reboot plan that attains it, and the per-day trace.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    pub total: f64,
    pub reboots: Vec<Day>,
    pub processed: Vec<f64>,
}

impl Schedule {
    /// Console form: the total on the first line, per-day amounts space-separated
    /// on the second. Values are truncated to integers.
    pub fn render(&self) -> String {
        let days: Vec<String> = self
            .processed
            .iter()
            .map(|&v| (v.trunc() as i64).to_string())
            .collect();
        format!("{}\n{}", self.total.trunc() as i64, days.join(" "))
    }
}

/// Solve with the default (bottom-up) strategy.
pub fn solve(problem: &Problem) -> Schedule {
    solve_with(problem, SolveCfg::default())
}

pub fn solve_with(problem: &Problem, cfg: SolveCfg) -> Schedule {
    let n = problem.days();
    let Partition { total, tables } = partition(problem, cfg.strategy);
    let reboots = if n == 0 {
        Vec::new()
    } else {
        reboot_days(&tables, 0, n - 1)
    };
    let processed = replay(problem, &reboots);
    debug_assert!({
        let replayed: f64 = processed.iter().sum();
        (replayed - total).abs() <= 1e-9 * total.max(1.0)
    });
    tracing::debug!(
        days = n,
        total,
        reboots = reboots.len(),
        evaluated = tables.evaluated(),
        strategy = ?cfg.strategy,
        "solved"
    );
    Schedule {
        total,
        reboots,
        processed,
    }
}

#[cfg(test)]
mod tests;
