use thiserror::Error;

use crate::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// Errors that can occur when constructing a [`Simulation`](crate::Simulation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument `{name}`: {source}")]
    InvalidArgument {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },
}

impl Error {
    /// Returns the name of the argument that failed validation.
    #[must_use]
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { name, .. } => *name,
        }
    }
}

/// Checks that a named argument is strictly positive.
pub(crate) fn strictly_positive(name: &'static str, value: f64) -> Result<f64, Error> {
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| Error::InvalidArgument { name, source })
}
