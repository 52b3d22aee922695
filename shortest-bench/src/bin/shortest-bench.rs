use anyhow::Context;
use clap::Parser;
use shortest::Point3;
use shortest_bench::{run_trials, BenchConfig, SystemClock, TrialConfig};

#[derive(Debug, Parser)]
#[command(author, version)]
#[command(about = "Times exact against pruned closest-point search", long_about = None)]
struct Opt {
    /// number of trials
    #[arg(long, default_value_t = 1000)]
    trials: usize,

    /// candidates per trial
    #[arg(long, default_value_t = 1000)]
    count: usize,

    /// lower bound of every generated coordinate
    #[arg(long, default_value_t = -1_000_000.0, allow_negative_numbers = true)]
    min: f64,

    /// upper bound of every generated coordinate
    #[arg(long, default_value_t = 1_000_000.0, allow_negative_numbers = true)]
    max: f64,

    /// point to search from, as x,y,z
    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    source: Point3<f64>,

    /// master seed for reproducible candidate sets
    #[arg(long)]
    seed: Option<u64>,

    /// print one line per trial
    #[arg(long)]
    each: bool,

    /// run trials on all cores
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::parse();

    let config = BenchConfig {
        trials: opt.trials,
        trial: TrialConfig {
            source: opt.source,
            count: opt.count,
            min: opt.min,
            max: opt.max,
        },
        seed: opt.seed,
        parallel: opt.parallel,
    };

    let run = run_trials(&config, &SystemClock::new()).context("benchmark failed")?;

    if opt.each {
        for (i, outcome) in run.outcomes.iter().enumerate() {
            println!("#{i:<5} {outcome}");
        }
    }
    println!("{}", run.summary);

    Ok(())
}
