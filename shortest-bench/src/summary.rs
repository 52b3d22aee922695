use std::{fmt, time::Duration};

use num_format::{Locale, ToFormattedString};

use crate::trial::TrialOutcome;

/// Averages over a batch of trials.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub trials: usize,
    pub candidates: usize,
    pub mean_exact: Duration,
    pub mean_pruned: Duration,
    /// Trials where both searches selected the same candidate
    pub agreements: usize,
    /// Trials where the pruned search returned an error
    pub pruned_failures: usize,
}

impl Summary {
    /// Returns `None` for an empty batch.
    pub fn from_outcomes(outcomes: &[TrialOutcome], candidates: usize) -> Option<Summary> {
        if outcomes.is_empty() {
            return None;
        }

        let trials = outcomes.len();
        let total_exact: Duration = outcomes.iter().map(|o| o.exact_time).sum();
        let total_pruned: Duration = outcomes.iter().map(|o| o.pruned_time).sum();

        Some(Summary {
            trials,
            candidates,
            mean_exact: mean(total_exact, trials),
            mean_pruned: mean(total_pruned, trials),
            agreements: outcomes.iter().filter(|o| o.agrees()).count(),
            pruned_failures: outcomes.iter().filter(|o| o.pruned.is_err()).count(),
        })
    }

    /// Mean exact time over mean pruned time. `None` when the pruned mean is zero.
    pub fn speedup(&self) -> Option<f64> {
        let pruned = self.mean_pruned.as_secs_f64();
        (pruned > 0.0).then(|| self.mean_exact.as_secs_f64() / pruned)
    }
}

/// Saturates at `u64::MAX` nanoseconds, about 584 years.
fn mean(total: Duration, n: usize) -> Duration {
    let nanos = total.as_nanos() / n as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(56))?;
        writeln!(
            f,
            "Trials                : {} x {} candidates",
            self.trials.to_formatted_string(&Locale::en),
            self.candidates.to_formatted_string(&Locale::en)
        )?;
        writeln!(
            f,
            "Average Exact Time    : {:.6} ms",
            self.mean_exact.as_secs_f64() * 1e3
        )?;
        writeln!(
            f,
            "Average Pruned Time   : {:.6} ms",
            self.mean_pruned.as_secs_f64() * 1e3
        )?;
        match self.speedup() {
            Some(ratio) => writeln!(f, "Improvement Ratio     : {ratio:.3}")?,
            None => writeln!(f, "Improvement Ratio     : n/a")?,
        }
        writeln!(
            f,
            "Agreement             : {} / {}",
            self.agreements.to_formatted_string(&Locale::en),
            self.trials.to_formatted_string(&Locale::en)
        )?;
        write!(
            f,
            "Pruned Failures       : {}",
            self.pruned_failures.to_formatted_string(&Locale::en)
        )
    }
}

#[cfg(test)]
mod tests {
    use shortest::{Nearest, Point3, SearchError};

    use super::*;

    fn outcome(exact_ms: u64, pruned_ms: u64, pruned_index: Option<usize>) -> TrialOutcome {
        let hit = Nearest {
            index: 0,
            point: Point3::new(1.0, 1.0, 1.0),
            distance: 3.0_f64.sqrt(),
        };
        TrialOutcome {
            exact_time: Duration::from_millis(exact_ms),
            pruned_time: Duration::from_millis(pruned_ms),
            exact: hit,
            pruned: match pruned_index {
                Some(index) => Ok(Nearest { index, ..hit }),
                None => Err(SearchError::NoCandidatePassedFilter),
            },
        }
    }

    #[test]
    fn means_use_actual_trial_count() {
        let outcomes = [
            outcome(4, 2, Some(0)),
            outcome(6, 2, Some(3)),
            outcome(8, 2, None),
        ];
        let summary = Summary::from_outcomes(&outcomes, 1_000).unwrap();

        assert_eq!(summary.trials, 3);
        assert_eq!(summary.mean_exact, Duration::from_millis(6));
        assert_eq!(summary.mean_pruned, Duration::from_millis(2));
        assert!((summary.speedup().unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(summary.agreements, 1);
        assert_eq!(summary.pruned_failures, 1);
    }

    #[test]
    fn zero_pruned_time_has_no_ratio() {
        let summary = Summary::from_outcomes(&[outcome(1, 0, Some(0))], 1).unwrap();
        assert_eq!(summary.speedup(), None);
        assert!(summary.to_string().contains("Improvement Ratio     : n/a"));
    }

    #[test]
    fn mean_saturates() {
        assert_eq!(mean(Duration::MAX, 1), Duration::from_nanos(u64::MAX));
        assert_eq!(mean(Duration::from_secs(9), 3), Duration::from_secs(3));
    }

    #[test]
    fn empty_batch() {
        assert_eq!(Summary::from_outcomes(&[], 10), None);
    }

    #[test]
    fn report_formats_counts() {
        let outcomes = vec![outcome(2, 1, Some(0)); 1_500];
        let report = Summary::from_outcomes(&outcomes, 1_000_000)
            .unwrap()
            .to_string();
        assert!(report.contains("1,500 x 1,000,000 candidates"));
        assert!(report.contains("Improvement Ratio     : 2.000"));
        assert!(report.contains("Agreement             : 1,500 / 1,500"));
    }
}
