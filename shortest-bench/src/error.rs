use shortest::{Point3, SearchError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HarnessError {
    #[error("at least one trial is required")]
    ZeroTrials,

    #[error("at least one candidate per trial is required")]
    ZeroCount,

    #[error("invalid coordinate range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    #[error("source {0} has a non-finite coordinate")]
    InvalidSource(Point3<f64>),

    /// Candidates and source spread so far apart that squared distances would overflow.
    #[error("coordinates span {span}, more than the {max} that keeps squared distances finite")]
    SpanTooLarge { span: f64, max: f64 },

    #[error(transparent)]
    Search(#[from] SearchError),
}
