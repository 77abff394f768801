//! Run parameters of the enumeration engine.

use crate::OptionsError;
use declgen_types::{CompositionPolicy, CvStyle, OperationKind};

/// Configuration of one generator run.
///
/// Every field is a static run parameter; nothing is consulted again after
/// [`crate::Generator::new`] has validated it.
///
/// # Example
///
/// ```
/// use declgen_core::GeneratorOptions;
///
/// let options = GeneratorOptions {
///     max_depth: 3,
///     essential_variations: true,
///     ..Default::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Terminal type every construction starts from.
    ///
    /// Default: `int`
    pub seed: String,

    /// Nodes at this depth are emitted but not expanded.
    ///
    /// Default: 6
    pub max_depth: usize,

    /// Ceiling on the number of nodes visited.
    ///
    /// Default: 7200
    pub node_budget: usize,

    /// Ceiling on the number of fresh (non-duplicate) assertions.
    ///
    /// Default: 7200
    pub assertion_budget: usize,

    /// Operations offered to every node, in this order.
    ///
    /// Default: every operation except `ConstVolatile`, which is reached by
    /// nesting `Const` and `Volatile`.
    pub operations: Vec<OperationKind>,

    /// Keep one representative per sibling group of operations.
    ///
    /// Default: false
    pub essential_variations: bool,

    /// Prune constructions that normalization would erase, instead of
    /// emitting them as duplicates.
    ///
    /// Default: false
    pub prune_insignificant: bool,

    /// Drop member-function ref-qualifiers under a pointer-to-member.
    ///
    /// Default: false
    pub elide_member_ref_qualifiers: bool,

    /// Spelling of cv-qualifiers in declarators.
    ///
    /// Default: `CvStyle::West`
    pub cv_style: CvStyle,
}

impl GeneratorOptions {
    pub fn default_operations() -> Vec<OperationKind> {
        OperationKind::ALL
            .into_iter()
            .filter(|op| *op != OperationKind::ConstVolatile)
            .collect()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.seed.is_empty() {
            return Err(OptionsError::EmptySeed);
        }
        if !is_qualified_identifier(&self.seed) {
            return Err(OptionsError::InvalidSeed(self.seed.clone()));
        }
        if self.operations.is_empty() {
            return Err(OptionsError::NoOperations);
        }
        for (i, op) in self.operations.iter().enumerate() {
            if self.operations[..i].contains(op) {
                return Err(OptionsError::DuplicateOperation(*op));
            }
        }
        if self.node_budget == 0 {
            return Err(OptionsError::ZeroBudget("node"));
        }
        if self.assertion_budget == 0 {
            return Err(OptionsError::ZeroBudget("assertion"));
        }
        Ok(())
    }

    /// The policy handed to the algebra.
    pub fn policy(&self) -> CompositionPolicy {
        CompositionPolicy {
            prune_insignificant: self.prune_insignificant,
            essential_variations: self.essential_variations,
            elide_member_ref_qualifiers: self.elide_member_ref_qualifiers,
            cv_style: self.cv_style,
            ..Default::default()
        }
    }

    /// The operation ordering actually used, after the essential-variations
    /// collapse.
    pub fn effective_operations(&self) -> Vec<OperationKind> {
        if self.essential_variations {
            OperationKind::collapse_siblings(&self.operations)
        } else {
            self.operations.clone()
        }
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            seed: "int".to_string(),
            max_depth: 6,
            node_budget: 7200,
            assertion_budget: 7200,
            operations: Self::default_operations(),
            essential_variations: false,
            prune_insignificant: false,
            elide_member_ref_qualifiers: false,
            cv_style: CvStyle::West,
        }
    }
}

/// `name`, `ns::name` or `::ns::name`, with C identifiers between the `::`.
fn is_qualified_identifier(seed: &str) -> bool {
    let seed = seed.strip_prefix("::").unwrap_or(seed);
    seed.split("::").all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}
