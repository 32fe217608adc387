use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rebootsched::api::{
    best_yield, draw_problem, scenarios, solve_with, DayCount, Problem, ProblemCfg, ReplayToken,
    Schedule, SolveCfg, Strategy,
};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Reboot schedule solver and experiment runner")]
struct Cmd {
    /// Optional VK ticket UUID; propagated to outputs and logs
    #[arg(long)]
    vk: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a built-in instance and print the result
    Demo {
        #[arg(long, value_enum, default_value_t = ScenarioArg::Reference)]
        scenario: ScenarioArg,
    },
    /// Solve an instance read from a .csv/.parquet file with `capability` and `rate` columns
    Solve {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = StrategyArg::BottomUp)]
        strategy: StrategyArg,
        /// Write the schedule as JSON (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Solve a random instance drawn from a replay token
    Random {
        #[arg(long)]
        days: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = StrategyArg::BottomUp)]
        strategy: StrategyArg,
    },
    /// Cross-check the solver against exhaustive search on random instances
    Verify {
        #[arg(long, default_value_t = 8)]
        days: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 100)]
        count: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScenarioArg {
    Small,
    Reference,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    BottomUp,
    Memoized,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::BottomUp => Strategy::BottomUp,
            StrategyArg::Memoized => Strategy::Memoized,
        }
    }
}

/// JSON form of a solved schedule.
#[derive(Serialize)]
struct ScheduleDoc<'a> {
    days: usize,
    total: f64,
    reboots: Vec<usize>,
    processed: &'a [f64],
}

impl<'a> ScheduleDoc<'a> {
    fn new(sched: &'a Schedule) -> Self {
        Self {
            days: sched.processed.len(),
            total: sched.total,
            reboots: sched.reboots.iter().map(|d| d.0).collect(),
            processed: &sched.processed,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo { scenario } => demo(scenario),
        Action::Solve {
            input,
            strategy,
            out,
        } => solve_file(&input, strategy, out.as_deref(), cmd.vk),
        Action::Random {
            days,
            seed,
            index,
            strategy,
        } => random(days, seed, index, strategy),
        Action::Verify { days, seed, count } => verify(days, seed, count),
        Action::Report => report(cmd.vk),
    }
}

fn run(problem: &Problem, strategy: StrategyArg) -> Schedule {
    let sched = solve_with(
        problem,
        SolveCfg {
            strategy: strategy.into(),
        },
    );
    tracing::info!(
        days = problem.days(),
        total = sched.total,
        reboots = ?sched.reboots.iter().map(|d| d.0).collect::<Vec<_>>(),
        strategy = ?strategy,
        "solved"
    );
    println!("{}", sched.render());
    sched
}

fn demo(scenario: ScenarioArg) -> Result<()> {
    let problem = match scenario {
        ScenarioArg::Small => scenarios::small(),
        ScenarioArg::Reference => scenarios::reference(),
    };
    tracing::info!(scenario = ?scenario, "demo");
    run(&problem, StrategyArg::BottomUp);
    Ok(())
}

fn solve_file(
    input: &Path,
    strategy: StrategyArg,
    out: Option<&Path>,
    vk: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), vk = ?vk, "solve");
    let problem = input::read_problem(input)?;
    let sched = run(&problem, strategy);
    if let Some(out) = out {
        write_schedule(out, &sched)?;
        let params = json!({
            "input": input.to_string_lossy(),
            "strategy": format!("{strategy:?}"),
            "days": problem.days(),
        });
        let prov = provenance::write_sidecar(out, provenance::Payload::new(params, vk))?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote schedule");
    }
    Ok(())
}

fn write_schedule(out: &Path, sched: &Schedule) -> Result<()> {
    provenance::create_parent(out)?;
    let doc = serde_json::to_vec_pretty(&ScheduleDoc::new(sched))?;
    std::fs::write(out, doc).with_context(|| format!("writing {}", out.display()))
}

fn random(days: usize, seed: u64, index: u64, strategy: StrategyArg) -> Result<()> {
    if days == 0 {
        bail!("--days must be at least 1");
    }
    let cfg = ProblemCfg {
        days: DayCount::Fixed(days),
        ..ProblemCfg::default()
    };
    tracing::info!(days, seed, index, "random");
    let problem = draw_problem(cfg, ReplayToken { seed, index });
    run(&problem, strategy);
    Ok(())
}

fn verify(days: usize, seed: u64, count: u64) -> Result<()> {
    let cfg = ProblemCfg {
        days: DayCount::Uniform { min: 1, max: days },
        ..ProblemCfg::default()
    };
    for index in 0..count {
        let problem = draw_problem(cfg, ReplayToken { seed, index });
        let expected = best_yield(&problem)?;
        for strategy in [Strategy::BottomUp, Strategy::Memoized] {
            let got = solve_with(&problem, SolveCfg { strategy }).total;
            if got != expected {
                bail!(
                    "mismatch at seed={seed} index={index} strategy={strategy:?}: solver={got} brute_force={expected}"
                );
            }
        }
    }
    tracing::info!(days, seed, count, "verify_ok");
    println!("verified {count} instances (up to {days} days)");
    Ok(())
}

fn report(vk: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "solver_version": rebootsched::VERSION,
        "vk": vk,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_solve_flags() {
        let cmd = Cmd::try_parse_from([
            "cli", "--vk", "abc", "solve", "--input", "x.csv", "--strategy", "memoized",
        ])
        .unwrap();
        assert_eq!(cmd.vk.as_deref(), Some("abc"));
        match cmd.action {
            Action::Solve {
                input,
                strategy,
                out,
            } => {
                assert_eq!(input, PathBuf::from("x.csv"));
                assert!(matches!(strategy, StrategyArg::Memoized));
                assert!(out.is_none());
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn solve_file_writes_schedule_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ref.csv");
        let p = scenarios::reference();
        let mut csv = String::from("capability,rate\n");
        for (c, r) in p.capability().iter().zip(p.rate()) {
            csv.push_str(&format!("{c},{r}\n"));
        }
        std::fs::write(&input, csv).unwrap();
        let out = dir.path().join("out").join("schedule.json");

        solve_file(&input, StrategyArg::BottomUp, Some(&out), None).unwrap();

        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["total"], 365.0);
        assert_eq!(doc["reboots"], json!([4]));
        assert_eq!(doc["days"], 10);
        assert!(dir.path().join("out").join("schedule.provenance.json").exists());
    }

    #[test]
    fn verify_passes_on_small_horizons() {
        verify(7, 3, 20).unwrap();
    }
}
