//! No-reboot yield of a closed day-range.

use crate::problem::Problem;

/// Total processed over `[i, j]` with the rate profile starting at offset 0 on day `i`
/// and no reboot inside. Day `i + k` contributes `min(capability[i + k], rate[k])`.
/// An empty range (`i > j`) yields 0.
pub fn segment_yield(problem: &Problem, i: usize, j: usize) -> f64 {
    if i > j {
        return 0.0;
    }
    problem.capability()[i..=j]
        .iter()
        .zip(problem.rate())
        .map(|(&cap, &rate)| cap.min(rate))
        .sum()
}
