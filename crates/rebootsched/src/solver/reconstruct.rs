//! Traceback of reboot days and the day-by-day replay of a reboot plan.

use super::tables::{Decision, Tables};
use crate::problem::{Day, Problem};

enum Work {
    Range(usize, usize),
    Emit(Day),
}

/// Reboot days recorded for `[i, j]`, ascending.
///
/// Visits the same ranges as the partitioner recursion: `[i, k-1]`, then `k`,
/// then `[k+1, j]`. Uses an explicit stack, so depth is not limited by `n`.
pub fn reboot_days(tables: &Tables, i: usize, j: usize) -> Vec<Day> {
    let mut out = Vec::new();
    let mut stack = vec![Work::Range(i, j)];
    while let Some(work) = stack.pop() {
        match work {
            Work::Emit(day) => out.push(day),
            Work::Range(lo, hi) => {
                if let Decision::RebootAt(k) = tables.decision(lo, hi) {
                    stack.push(Work::Range(k.0 + 1, hi));
                    stack.push(Work::Emit(k));
                    stack.push(Work::Range(lo, k.0 - 1));
                }
            }
        }
    }
    out
}

/// Data processed on each day when rebooting on the given (ascending) days.
///
/// A reboot day processes nothing and the following day uses rate offset 0.
/// Days not in ascending order after the first out-of-order entry are ignored.
pub fn replay(problem: &Problem, reboots: &[Day]) -> Vec<f64> {
    let mut pending = reboots.iter().peekable();
    let mut offset = 0;
    (0..problem.days())
        .map(|day| {
            if pending.next_if(|r| r.0 == day).is_some() {
                offset = 0;
                0.0
            } else {
                let v = problem.processed(day, offset);
                offset += 1;
                v
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traceback_is_in_order() {
        let mut t = Tables::new(7);
        t.store(0, 6, 0.0, Decision::RebootAt(Day(3)));
        t.store(0, 2, 0.0, Decision::RebootAt(Day(1)));
        t.store(4, 6, 0.0, Decision::RebootAt(Day(5)));
        assert_eq!(reboot_days(&t, 0, 6), vec![Day(1), Day(3), Day(5)]);
        assert!(reboot_days(&t, 4, 3).is_empty());
    }

    #[test]
    fn replay_zeroes_reboot_days_and_restarts_rate() {
        let p = Problem::from_slices(&[10.0, 1.0, 7.0, 7.0], &[8.0, 4.0, 2.0, 1.0]).unwrap();
        assert_eq!(replay(&p, &[]), vec![8.0, 1.0, 2.0, 1.0]);
        assert_eq!(replay(&p, &[Day(1)]), vec![8.0, 0.0, 7.0, 4.0]);
        assert_eq!(replay(&p, &[Day(1), Day(2)]), vec![8.0, 0.0, 0.0, 7.0]);
    }
}
