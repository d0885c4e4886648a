/// Indicates how an observed run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Summary of an observed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// How the run terminated.
    pub status: Status,

    /// Number of advances performed during this run.
    pub steps: usize,
}
