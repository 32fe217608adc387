//! Console run of the built-in instances.
//!
//! Prints, per instance, the optimal total on one line and the per-day amounts
//! on the next, followed by the reboot days and the solve time.

use std::time::Instant;

use rebootsched::scenarios;
use rebootsched::solve;

fn main() {
    for (name, problem) in [("small", scenarios::small()), ("reference", scenarios::reference())] {
        let start = Instant::now();
        let sched = solve(&problem);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        let reboots: Vec<String> = sched.reboots.iter().map(|d| d.to_string()).collect();
        println!("# {name} days={}", problem.days());
        println!("{}", sched.render());
        println!("reboots=[{}] solve_time_ms={elapsed_ms:.3}", reboots.join(", "));
    }
}
