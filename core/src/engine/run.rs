use super::{Budget, Generator, RunSummary};
use crate::{GenerateError, Outcome, TestCase, TestCaseSink};
use declgen_types::{TypeNode, Verdict, can_compose};
use hashbrown::HashMap;

/// Mutable state of one run: the memo, the counters and the sink.
///
/// Each accepted node updates it exactly once, after its legality check
/// and before its own expansion.
pub(super) struct RunState<'g, 's, S: TestCaseSink + ?Sized> {
    generator: &'g Generator,
    sink: &'s mut S,
    /// Canonical form to the index of the first case that reached it.
    memo: HashMap<TypeNode, usize>,
    summary: RunSummary,
}

impl<'g, 's, S: TestCaseSink + ?Sized> RunState<'g, 's, S> {
    pub(super) fn new(generator: &'g Generator, sink: &'s mut S) -> Self {
        Self {
            generator,
            sink,
            memo: HashMap::new(),
            summary: RunSummary::default(),
        }
    }

    pub(super) fn into_summary(self) -> RunSummary {
        self.summary
    }

    /// Offer every operation to `node` and visit each accepted child.
    pub(super) fn expand(&mut self, node: &TypeNode) -> Result<(), GenerateError> {
        let generator = self.generator;
        if node.depth() >= generator.options.max_depth {
            return Ok(());
        }
        for &op in &generator.operations {
            if self.summary.halted.is_some() {
                break;
            }
            match can_compose(op, node, &generator.policy) {
                Verdict::Accept => {}
                Verdict::Disallow(reason) => {
                    tracing::trace!(%op, operand = %node, %reason, "Disallowed");
                    self.summary.disallowed += 1;
                    continue;
                }
                Verdict::Prune(reason) => {
                    tracing::trace!(%op, operand = %node, %reason, "Pruned");
                    self.summary.pruned += 1;
                    continue;
                }
            }
            if let Some(budget) = self.exhausted_budget() {
                self.summary.halted = Some(budget);
                break;
            }
            self.visit(op.compose(node.clone()))?;
        }
        Ok(())
    }

    fn exhausted_budget(&self) -> Option<Budget> {
        let options = &self.generator.options;
        if self.summary.visited >= options.node_budget {
            Some(Budget::Nodes)
        } else if self.summary.fresh >= options.assertion_budget {
            Some(Budget::Assertions)
        } else {
            None
        }
    }

    fn visit(&mut self, node: TypeNode) -> Result<(), GenerateError> {
        self.summary.visited += 1;
        let index = self.summary.visited;
        let canonical = node.normalize(&self.generator.policy);

        let outcome = match self.memo.get(&canonical) {
            Some(&first_index) => {
                self.summary.duplicates += 1;
                Outcome::Duplicate { first_index }
            }
            None => {
                self.summary.fresh += 1;
                self.memo.insert(canonical.clone(), index);
                Outcome::Fresh {
                    declarator: canonical.declare(self.generator.policy.cv_style),
                }
            }
        };
        tracing::debug!(index, depth = node.depth(), %node, "Visited");

        let case = TestCase {
            index,
            depth: node.depth(),
            alias: node.alias(),
            definition: node.definition(),
            description: node.describe(false),
            canonical,
            node,
            outcome,
        };

        self.sink
            .open_case(&case)
            .map_err(|source| GenerateError::Sink { index, source })?;
        for line in case.lines() {
            self.sink
                .emit_line(index, &line)
                .map_err(|source| GenerateError::Sink { index, source })?;
        }
        self.expand(&case.node)?;
        self.sink
            .close_case(index)
            .map_err(|source| GenerateError::Sink { index, source })
    }
}
