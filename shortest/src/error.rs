/// Why a search could not select a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("candidate set is empty")]
    EmptyInput,

    /// Every candidate failed the coordinate-magnitude filter of the pruned search.
    #[error("no candidate passed the pruning filter")]
    NoCandidatePassedFilter,

    /// The set is not empty but every distance was NaN or infinite.
    #[error("no candidate has a finite distance to the source")]
    NoComparableCandidate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePointError {
    #[error("expected three comma separated components, got {0:?}")]
    WrongArity(String),

    #[error("invalid coordinate {0:?}")]
    InvalidComponent(String),
}
