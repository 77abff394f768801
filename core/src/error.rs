//! Errors of the enumeration engine.
//!
//! Legality rejections are not errors; they are reported as
//! [`declgen_types::Verdict`] values and only counted. The errors here cover
//! invalid run parameters and failures of the output collaborator.

use declgen_types::OperationKind;
use thiserror::Error;

/// Invalid run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("the seed type name is empty")]
    EmptySeed,

    #[error("the seed type name `{0}` is not an identifier or `::`-qualified name")]
    InvalidSeed(String),

    #[error("no operations are enabled")]
    NoOperations,

    #[error("operation `{0}` is listed more than once")]
    DuplicateOperation(OperationKind),

    #[error("the {0} budget must be at least 1")]
    ZeroBudget(&'static str),
}

/// Failure reported by a [`crate::TestCaseSink`].
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write test case output")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

/// Failure of a generator run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid generator options")]
    Options(#[from] OptionsError),

    #[error("test case sink failed at case #{index}")]
    Sink {
        index: usize,
        #[source]
        source: SinkError,
    },

    #[error("the generator has already run")]
    AlreadyRun,
}
