//! Memo and decision tables over closed day-ranges `[i, j]`.
//!
//! Both tables are dense `n×n` matrices; only the upper triangle (`i ≤ j`) is
//! ever written. Cells are tagged values rather than numeric sentinels.

use nalgebra::DMatrix;

use crate::problem::Day;

/// Best yield of a range, once computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Memo {
    Unset,
    Computed(f64),
}

/// Reboot chosen for a range (strictly inside it), if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    NoReboot,
    RebootAt(Day),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tables {
    memo: DMatrix<Memo>,
    decisions: DMatrix<Decision>,
}

impl Tables {
    pub fn new(days: usize) -> Self {
        Self {
            memo: DMatrix::from_element(days, days, Memo::Unset),
            decisions: DMatrix::from_element(days, days, Decision::NoReboot),
        }
    }

    pub fn days(&self) -> usize {
        self.memo.nrows()
    }

    /// Memo cell for `[i, j]`; an empty range (`i > j`) is always `Computed(0.0)`.
    #[inline]
    pub fn lookup(&self, i: usize, j: usize) -> Memo {
        if i > j {
            Memo::Computed(0.0)
        } else {
            self.memo[(i, j)]
        }
    }

    /// Recorded decision for `[i, j]`; empty or unvisited ranges read as `NoReboot`.
    #[inline]
    pub fn decision(&self, i: usize, j: usize) -> Decision {
        if i > j {
            Decision::NoReboot
        } else {
            self.decisions[(i, j)]
        }
    }

    /// Number of ranges evaluated so far.
    pub fn evaluated(&self) -> usize {
        self.memo
            .iter()
            .filter(|m| matches!(m, Memo::Computed(_)))
            .count()
    }

    /// Write-once store of a range result.
    pub(crate) fn store(&mut self, i: usize, j: usize, value: f64, decision: Decision) {
        debug_assert!(i <= j);
        debug_assert_eq!(self.memo[(i, j)], Memo::Unset, "range {i}..={j} stored twice");
        self.memo[(i, j)] = Memo::Computed(value);
        self.decisions[(i, j)] = decision;
    }
}
