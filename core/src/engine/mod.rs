//! Depth-first enumeration of the composition space.
//!
//! Starting from the seed, every node below the depth limit is offered each
//! configured operation in order. Accepted compositions are numbered,
//! normalized, checked against the memo of canonical forms and expanded
//! immediately, so numbering follows a pre-order walk.
//!
//! ## Design Principles
//!
//! - **Deterministic**: the same options always produce the same sequence
//! - **Bounded**: recursion depth is capped by `max_depth`; two budgets cap
//!   the number of visited nodes and fresh assertions
//! - **Reentrant**: the memo and counters live in per-run state owned by
//!   the call to [`Generator::run`]
//!
//! ## Example
//!
//! ```
//! use declgen_core::{Generator, GeneratorOptions, RecordingSink};
//!
//! let options = GeneratorOptions { max_depth: 2, ..Default::default() };
//! let mut generator = Generator::new(options).unwrap();
//! let mut sink = RecordingSink::new();
//! let summary = generator.run(&mut sink).unwrap();
//! assert_eq!(summary.visited, sink.cases().len());
//! ```

mod run;


use crate::{GenerateError, GeneratorOptions, OptionsError, TestCaseSink};
use core::fmt;
use declgen_types::{CompositionPolicy, OperationKind, TypeNode};
use run::RunState;

/// Lifecycle of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Expanding,
    Done,
}

/// A ceiling that can halt a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Nodes,
    Assertions,
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Budget::Nodes => f.write_str("node"),
            Budget::Assertions => f.write_str("assertion"),
        }
    }
}

/// Counters of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Accepted compositions, each numbered and emitted.
    pub visited: usize,
    pub fresh: usize,
    pub duplicates: usize,
    pub disallowed: usize,
    pub pruned: usize,
    /// The budget that stopped the run, if any.
    pub halted: Option<Budget>,
}

/// Drives one enumeration run.
#[derive(Debug)]
pub struct Generator {
    options: GeneratorOptions,
    policy: CompositionPolicy,
    operations: Vec<OperationKind>,
    phase: Phase,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            policy: options.policy(),
            operations: options.effective_operations(),
            options,
            phase: Phase::Idle,
        })
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn policy(&self) -> &CompositionPolicy {
        &self.policy
    }

    /// Operation ordering in effect, after any sibling collapse.
    pub fn operations(&self) -> &[OperationKind] {
        &self.operations
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The terminal every construction starts from, at depth 0.
    pub fn seed(&self) -> TypeNode {
        TypeNode::basic(self.options.seed.as_str())
    }

    /// Walk the composition space, handing every accepted node to `sink`.
    ///
    /// A generator runs once; a second call fails with
    /// [`GenerateError::AlreadyRun`].
    pub fn run<S: TestCaseSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<RunSummary, GenerateError> {
        if self.phase != Phase::Idle {
            return Err(GenerateError::AlreadyRun);
        }
        self.phase = Phase::Expanding;
        tracing::debug!(
            seed = %self.options.seed,
            max_depth = self.options.max_depth,
            operations = self.operations.len(),
            "Starting enumeration"
        );

        let mut state = RunState::new(self, sink);
        let result = state.expand(&self.seed());
        let summary = state.into_summary();
        self.phase = Phase::Done;
        result?;

        if let Some(budget) = summary.halted {
            tracing::warn!(
                visited = summary.visited,
                fresh = summary.fresh,
                "Enumeration halted: {budget} budget exhausted"
            );
        }
        tracing::info!(
            visited = summary.visited,
            fresh = summary.fresh,
            duplicates = summary.duplicates,
            disallowed = summary.disallowed,
            pruned = summary.pruned,
            "Enumeration finished"
        );
        Ok(summary)
    }
}
