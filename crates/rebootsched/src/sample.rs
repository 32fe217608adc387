//! Random scheduling instances (replay tokens).
//!
//! Purpose
//! - Reproducible instances for benches, property checks and the CLI
//!   `random`/`verify` commands.
//!
//! Model
//! - Capabilities are uniform integers in `0..=capability_max`.
//! - Rates are uniform integers in `0..=rate_max`, optionally sorted
//!   non-increasing to mimic a processor that slows down after each reboot.
//! - Integer draws keep every partial sum exact in `f64`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::problem::Problem;

/// Horizon length distribution.
#[derive(Clone, Copy, Debug)]
pub enum DayCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl DayCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            DayCount::Fixed(n) => n.max(1),
            DayCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Instance sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ProblemCfg {
    pub days: DayCount,
    pub capability_max: u32,
    pub rate_max: u32,
    /// Sort the rate profile non-increasing?
    pub decreasing_rate: bool,
}
impl Default for ProblemCfg {
    fn default() -> Self {
        Self {
            days: DayCount::Fixed(10),
            capability_max: 100,
            rate_max: 100,
            decreasing_rate: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one instance. The same `(cfg, tok)` always gives the same problem.
pub fn draw_problem(cfg: ProblemCfg, tok: ReplayToken) -> Problem {
    let mut rng = tok.to_std_rng();
    let n = cfg.days.sample(&mut rng);
    let capability: Vec<f64> = (0..n)
        .map(|_| f64::from(rng.gen_range(0..=cfg.capability_max)))
        .collect();
    let mut rate: Vec<f64> = (0..n)
        .map(|_| f64::from(rng.gen_range(0..=cfg.rate_max)))
        .collect();
    if cfg.decreasing_rate {
        rate.sort_by(|a, b| b.total_cmp(a));
    }
    Problem::from_parts(capability, rate)
}
