//! Timing harness comparing [`shortest::closest_point_brute`] with
//! [`shortest::closest_point_pruned`] over randomly generated candidate sets.
//!
//! Randomness and time are both injected: trials take any [`rand::Rng`] and any [`Clock`], so a
//! seeded generator and a [`StepClock`] make a whole run deterministic.

pub mod clock;
pub mod config;
pub mod error;
pub mod generate;
pub mod summary;
pub mod trial;

pub use clock::{time, Clock, StepClock, SystemClock};
pub use config::{run_trials, BenchConfig, BenchRun};
pub use error::HarnessError;
pub use generate::generate_candidates;
pub use summary::Summary;
pub use trial::{run_trial, TrialConfig, TrialOutcome};
