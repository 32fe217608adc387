//! Optimal partitioner: best yield of each day-range, optionally split by one reboot.
//!
//! A range `[i, j]` starts right after a reboot (or at the horizon start) and
//! ends right before the next one. Rebooting on an interior day `k` sacrifices
//! that day and leaves two independent ranges `[i, k-1]` and `[k+1, j]`, both
//! starting again at rate offset 0.
//!
//! Tie-break
//! - Candidates are scanned with ascending `k` and only a strictly larger sum
//!   replaces the incumbent. No reboot wins every tie, and among reboots the
//!   smallest `k` wins. Both strategies below share `evaluate_range`, so they
//!   agree cell by cell.

use super::segment::segment_yield;
use super::tables::{Decision, Memo, Tables};
use crate::problem::{Day, Problem};

/// How the range table is filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Iterate ranges by increasing length. No recursion; every range is filled.
    #[default]
    BottomUp,
    /// Top-down recursion from `[0, n-1]` with memoization. Only reachable ranges
    /// are filled; recursion depth is bounded by `n`.
    Memoized,
}

/// Filled tables plus the optimal yield of the full horizon.
#[derive(Clone, Debug, PartialEq)]
pub struct Partition {
    pub total: f64,
    pub tables: Tables,
}

/// Solve every subproblem needed for `[0, n-1]`.
pub fn partition(problem: &Problem, strategy: Strategy) -> Partition {
    match strategy {
        Strategy::BottomUp => fill_bottom_up(problem),
        Strategy::Memoized => MemoRunner::new(problem).run(),
    }
}

/// Best value and decision for `[i, j]` given a way to read sub-range optima.
fn evaluate_range<F>(problem: &Problem, i: usize, j: usize, mut best: F) -> (f64, Decision)
where
    F: FnMut(usize, usize) -> f64,
{
    let mut value = segment_yield(problem, i, j);
    let mut decision = Decision::NoReboot;
    for k in (i + 1)..j {
        let candidate = best(i, k - 1) + best(k + 1, j);
        if candidate > value {
            value = candidate;
            decision = Decision::RebootAt(Day(k));
        }
    }
    (value, decision)
}

fn fill_bottom_up(problem: &Problem) -> Partition {
    let n = problem.days();
    let mut tables = Tables::new(n);
    let mut total = 0.0;
    for len in 1..=n {
        for i in 0..=(n - len) {
            let j = i + len - 1;
            let (value, decision) = evaluate_range(problem, i, j, |a, b| match tables.lookup(a, b) {
                Memo::Computed(v) => v,
                Memo::Unset => unreachable!("range {a}..={b} is shorter and already filled"),
            });
            tables.store(i, j, value, decision);
            total = value;
        }
    }
    Partition { total, tables }
}

/// Top-down recursion carrying the problem and the tables under construction.
struct MemoRunner<'a> {
    problem: &'a Problem,
    tables: Tables,
}

impl<'a> MemoRunner<'a> {
    fn new(problem: &'a Problem) -> Self {
        Self {
            problem,
            tables: Tables::new(problem.days()),
        }
    }

    fn run(mut self) -> Partition {
        let n = self.problem.days();
        let total = if n == 0 { 0.0 } else { self.best(0, n - 1) };
        Partition {
            total,
            tables: self.tables,
        }
    }

    fn best(&mut self, i: usize, j: usize) -> f64 {
        if let Memo::Computed(v) = self.tables.lookup(i, j) {
            return v;
        }
        let problem = self.problem;
        let (value, decision) = evaluate_range(problem, i, j, |a, b| self.best(a, b));
        self.tables.store(i, j, value, decision);
        value
    }
}
