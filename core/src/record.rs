//! Test-case records produced by the engine.

use declgen_types::TypeNode;

/// Whether a case asserts its canonical form or refers to an earlier case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// First construction reaching this canonical form.
    Fresh { declarator: String },
    /// The canonical form was first reached by case `first_index`.
    Duplicate { first_index: usize },
}

/// One accepted construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Sequential index, starting at 1 in traversal order.
    pub index: usize,
    pub depth: usize,
    /// The raw construction.
    pub node: TypeNode,
    pub canonical: TypeNode,
    /// Alias bound to the raw construction.
    pub alias: String,
    /// Alias-based spelling of the construction step.
    pub definition: String,
    /// English description of the construction as built.
    pub description: String,
    pub outcome: Outcome,
}

impl TestCase {
    pub fn is_fresh(&self) -> bool {
        matches!(self.outcome, Outcome::Fresh { .. })
    }

    /// The canonical declarator, for fresh cases.
    pub fn declarator(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Fresh { declarator } => Some(declarator),
            Outcome::Duplicate { .. } => None,
        }
    }

    /// Source lines for this case, without indentation.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(4);
        if self.node == self.canonical {
            lines.push(format!("// #{} {}", self.index, self.node));
        } else {
            lines.push(format!("// #{} {} => {}", self.index, self.node, self.canonical));
        }
        lines.push(format!(
            "using {} = {}; // {}",
            self.alias, self.definition, self.description
        ));
        match &self.outcome {
            Outcome::Fresh { declarator } => {
                lines.push(format!(
                    "assert((std::is_same<{}, {}>::value));",
                    self.alias, declarator
                ));
                lines.push(format!(
                    "assert(typedecl<{}>() == \"{}\");",
                    self.alias, declarator
                ));
            }
            Outcome::Duplicate { first_index } => {
                lines.push(format!("// same canonical form as #{first_index}"));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn case(outcome: Outcome) -> TestCase {
        let node = TypeNode::pointer(TypeNode::const_(TypeNode::basic("int")));
        TestCase {
            index: 2,
            depth: node.depth(),
            canonical: node.clone(),
            alias: node.alias(),
            definition: node.definition(),
            description: node.describe(false),
            node,
            outcome,
        }
    }

    #[test]
    fn test_fresh_case_lines() {
        let case = case(Outcome::Fresh {
            declarator: "const int*".into(),
        });
        assert_eq!(
            case.lines(),
            [
                r#"// #2 Pointer(Const(BasicType("int")))"#,
                "using A2 = A1*; // pointer to const int",
                "assert((std::is_same<A2, const int*>::value));",
                r#"assert(typedecl<A2>() == "const int*");"#,
            ]
        );
        assert_eq!(case.declarator(), Some("const int*"));
    }

    #[test]
    fn test_duplicate_case_lines() {
        let case = case(Outcome::Duplicate { first_index: 1 });
        assert!(!case.is_fresh());
        assert_eq!(case.lines()[2], "// same canonical form as #1");
        assert_eq!(case.lines().len(), 3);
    }
}
