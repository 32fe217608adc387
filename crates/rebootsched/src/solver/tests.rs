//! End-to-end checks of `solve` on pinned instances and edge cases.

use super::*;
use crate::scenarios;

fn problem(x: &[f64], s: &[f64]) -> Problem {
    Problem::from_slices(x, s).unwrap()
}

#[test]
fn small_scenario_reboots_on_day_one() {
    let sched = solve(&scenarios::small());
    assert_eq!(sched.total, 19.0);
    assert_eq!(sched.reboots, vec![Day(1)]);
    assert_eq!(sched.processed, vec![8.0, 0.0, 7.0, 4.0]);
}

#[test]
fn reference_scenario_matches_pinned_result() {
    let sched = solve(&scenarios::reference());
    assert_eq!(sched.total, 365.0);
    assert_eq!(sched.reboots, vec![Day(4)]);
    assert_eq!(
        sched.processed,
        vec![20.0, 80.0, 20.0, 45.0, 0.0, 60.0, 80.0, 10.0, 40.0, 10.0]
    );
    assert_eq!(
        sched.render(),
        "365\n20 80 20 45 0 60 80 10 40 10"
    );
}

#[test]
fn single_day_is_min_of_profiles() {
    let sched = solve(&problem(&[5.0], &[3.0]));
    assert_eq!(sched.total, 3.0);
    assert!(sched.reboots.is_empty());
    assert_eq!(sched.processed, vec![3.0]);
}

#[test]
fn two_days_never_reboot() {
    let sched = solve(&problem(&[5.0, 5.0], &[1.0, 9.0]));
    assert_eq!(sched.total, 6.0);
    assert!(sched.reboots.is_empty());
}

#[test]
fn repeated_reboots_on_steep_profile() {
    let sched = solve(&problem(&[4.0; 6], &[4.0, 1.0, 1.0, 1.0, 1.0, 1.0]));
    assert_eq!(sched.total, 13.0);
    assert_eq!(sched.reboots, vec![Day(1), Day(3)]);
    assert_eq!(sched.processed, vec![4.0, 0.0, 4.0, 0.0, 4.0, 1.0]);
}

#[test]
fn strategies_agree_and_runs_are_repeatable() {
    let p = problem(
        &[3.0, 9.0, 2.0, 8.0, 8.0, 1.0, 7.0, 6.0, 9.0, 2.0, 5.0, 4.0],
        &[9.0, 7.0, 4.0, 3.0, 2.0, 2.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    );
    let a = solve_with(&p, SolveCfg { strategy: Strategy::BottomUp });
    let b = solve_with(&p, SolveCfg { strategy: Strategy::Memoized });
    assert_eq!(a, b);
    assert_eq!(a, solve(&p));
    assert!(a.total >= segment_yield(&p, 0, p.days() - 1));
    assert_eq!(a.processed.iter().sum::<f64>(), a.total);
}

#[test]
fn render_truncates_fractional_values() {
    let sched = Schedule {
        total: 7.9,
        reboots: vec![],
        processed: vec![3.5, 4.4],
    };
    assert_eq!(sched.render(), "7\n3 4");
}
