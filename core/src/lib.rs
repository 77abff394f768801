//! Composition and enumeration engine for declarator types.
//!
//! The [`Generator`] walks the composition space of
//! [`declgen_types`] depth first from a single terminal seed, numbers every
//! accepted construction, deduplicates them by canonical form and hands the
//! resulting [`TestCase`] records to a [`TestCaseSink`].

pub mod engine;
pub mod error;
pub mod options;
pub mod record;
pub mod sink;

pub use engine::{Budget, Generator, Phase, RunSummary};
pub use error::{GenerateError, OptionsError, SinkError};
pub use options::GeneratorOptions;
pub use record::{Outcome, TestCase};
pub use sink::{RecordingSink, SinkEvent, TestCaseSink};
