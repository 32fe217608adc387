//! Built-in reference instances with pinned optima.
//!
//! Both optima were checked against an exhaustive search over reboot subsets.

use crate::problem::Problem;

/// Four days: optimum 19 with a reboot on day 1, per-day `8 0 7 4`.
pub fn small() -> Problem {
    Problem::from_parts(vec![10.0, 1.0, 7.0, 7.0], vec![8.0, 4.0, 2.0, 1.0])
}

/// Ten days: optimum 365 with a reboot on day 4.
pub fn reference() -> Problem {
    Problem::from_parts(
        vec![20.0, 80.0, 20.0, 60.0, 20.0, 60.0, 80.0, 10.0, 40.0, 10.0],
        vec![100.0, 90.0, 50.0, 45.0, 40.0, 35.0, 20.0, 15.0, 10.0, 5.0],
    )
}
