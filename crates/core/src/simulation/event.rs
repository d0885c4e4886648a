use crate::State;

/// Event emitted for each sample an observed run visits.
///
/// The first event of a run carries the sample the run starts from, and one
/// more follows each advance. On a fresh simulation the first event is step 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Index of the sample within the simulation history.
    pub step: usize,

    /// The recorded sample.
    pub state: State,
}
