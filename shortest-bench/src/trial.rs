use std::{fmt, hint::black_box, time::Duration};

use log::{debug, warn};
use rand::Rng;
use shortest::{closest_point_brute, closest_point_pruned, Nearest, Point3, SearchError};

use crate::{
    clock::{time, Clock},
    generate::generate_candidates,
};

/// Parameters of a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialConfig {
    pub source: Point3<f64>,
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

/// What one trial measured.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialOutcome {
    pub exact_time: Duration,
    pub pruned_time: Duration,
    pub exact: Nearest<f64>,
    /// A failed pruned search is part of what is being measured, so it is kept rather than
    /// propagated.
    pub pruned: Result<Nearest<f64>, SearchError>,
}

impl TrialOutcome {
    /// Whether both searches selected the same candidate.
    pub fn agrees(&self) -> bool {
        matches!(self.pruned, Ok(ref p) if p.index == self.exact.index)
    }
}

/// Generates a fresh candidate set and times both searches over it.
pub fn run_trial<R: Rng + ?Sized, C: Clock + ?Sized>(
    rng: &mut R,
    clock: &C,
    config: &TrialConfig,
) -> Result<TrialOutcome, SearchError> {
    let points = generate_candidates(rng, config.count, config.min, config.max);
    let source = config.source;

    let (exact_time, exact) = time(clock, || {
        closest_point_brute(black_box(&source), black_box(&points))
    });
    let (pruned_time, pruned) = time(clock, || {
        closest_point_pruned(black_box(&source), black_box(&points))
    });
    let exact = exact?;

    let outcome = TrialOutcome {
        exact_time,
        pruned_time,
        exact,
        pruned,
    };
    debug!("{outcome}");
    match &outcome.pruned {
        Err(e) => warn!("pruned search failed: {e}"),
        Ok(p) if p.index != exact.index => warn!(
            "pruned search picked {} at {} instead of {} at {}",
            p.point, p.distance, exact.point, exact.distance
        ),
        Ok(_) => {}
    }

    Ok(outcome)
}

impl fmt::Display for TrialOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exact {:.4} ms -> {} d={:.3} | pruned {:.4} ms -> ",
            self.exact_time.as_secs_f64() * 1e3,
            self.exact.point,
            self.exact.distance,
            self.pruned_time.as_secs_f64() * 1e3,
        )?;
        match &self.pruned {
            Ok(p) if self.agrees() => write!(f, "{} d={:.3}", p.point, p.distance),
            Ok(p) => write!(f, "{} d={:.3} (differs)", p.point, p.distance),
            Err(e) => write!(f, "failed: {e}"),
        }
    }
}
