//! declgen - exhaustive generator of derived C-family declarator types.
//!
//! This crate re-exports the type-expression algebra ([`algebra`]) and the
//! enumeration engine ([`engine`]) under one roof.
//!
//! # Example
//!
//! ```
//! use declgen::{Generator, GeneratorOptions, RecordingSink};
//!
//! let mut generator = Generator::new(GeneratorOptions {
//!     max_depth: 1,
//!     ..Default::default()
//! })
//! .unwrap();
//! let mut sink = RecordingSink::new();
//! generator.run(&mut sink).unwrap();
//! assert_eq!(sink.cases()[0].declarator(), Some("const int"));
//! ```

pub use declgen_core as engine;
pub use declgen_types as algebra;

pub use declgen_core::{
    Budget, GenerateError, Generator, GeneratorOptions, OptionsError, Outcome, Phase,
    RecordingSink, RunSummary, SinkError, SinkEvent, TestCase, TestCaseSink,
};
pub use declgen_types::{
    CompositionPolicy, CvStyle, OperationKind, Rejection, TypeKind, TypeNode, Verdict,
    can_compose,
};
