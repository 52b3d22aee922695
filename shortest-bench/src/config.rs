use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    clock::Clock,
    error::HarnessError,
    summary::Summary,
    trial::{run_trial, TrialConfig, TrialOutcome},
};

/// Everything needed to run a batch of trials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchConfig {
    pub trials: usize,
    pub trial: TrialConfig,
    /// Master seed. Drawn from the OS when absent.
    pub seed: Option<u64>,
    /// Spread trials over the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), HarnessError> {
        let TrialConfig { count, min, max, .. } = self.trial;
        if self.trials == 0 {
            return Err(HarnessError::ZeroTrials);
        }
        if count == 0 {
            return Err(HarnessError::ZeroCount);
        }
        if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
            return Err(HarnessError::InvalidRange { min, max });
        }

        // Squared distances between any candidate and the source must stay finite
        let source = self.trial.source;
        let coords = source.to_array();
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(HarnessError::InvalidSource(source));
        }
        let lo = coords.iter().copied().fold(min, f64::min);
        let hi = coords.iter().copied().fold(max, f64::max);
        let span = hi - lo;
        if !(span <= max_span()) {
            return Err(HarnessError::SpanTooLarge { span, max: max_span() });
        }
        Ok(())
    }
}

/// Largest per-axis gap allowed between any two coordinates. Squaring it on all three axes
/// stays below `f64::MAX`.
pub fn max_span() -> f64 {
    f64::MAX.sqrt() / 2.0
}

/// Per-trial outcomes together with their summary.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRun {
    pub outcomes: Vec<TrialOutcome>,
    pub summary: Summary,
}

/// Runs `config.trials` independent trials timed on `clock`.
///
/// Every trial gets its own generator seeded from the master generator before any trial runs,
/// so the candidate sets depend only on the master seed and not on scheduling.
pub fn run_trials<C: Clock + ?Sized>(
    config: &BenchConfig,
    clock: &C,
) -> Result<BenchRun, HarnessError> {
    config.validate()?;

    let mut master = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let seeds: Vec<u64> = (0..config.trials).map(|_| master.gen()).collect();

    info!(
        "running {} trials of {} candidates in [{}, {}] from {}",
        config.trials, config.trial.count, config.trial.min, config.trial.max, config.trial.source
    );

    let trial = |seed: &u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(*seed);
        run_trial(&mut rng, clock, &config.trial)
    };

    #[cfg(feature = "parallel")]
    let outcomes: Result<Vec<_>, _> = if config.parallel {
        use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
        seeds.par_iter().map(trial).collect()
    } else {
        seeds.iter().map(trial).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let outcomes: Result<Vec<_>, _> = {
        if config.parallel {
            warn!("built without the `parallel` feature, running trials sequentially");
        }
        seeds.iter().map(trial).collect()
    };
    let outcomes = outcomes?;

    let summary =
        Summary::from_outcomes(&outcomes, config.trial.count).ok_or(HarnessError::ZeroTrials)?;
    if summary.agreements < summary.trials {
        warn!(
            "pruned search disagreed with exact search in {} of {} trials",
            summary.trials - summary.agreements,
            summary.trials
        );
    }
    info!("done, speed-up {:?}", summary.speedup());

    Ok(BenchRun { outcomes, summary })
}
