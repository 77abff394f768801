//! Composition-legality checks.
//!
//! Every check answers with a [`Verdict`]: accept the construction, disallow
//! it because the modeled language rejects it, or prune it because policy
//! excludes it. Rejections are routine control signals, never errors.

use super::{
    ArrayDimensions, ArrayExtent, CompositionPolicy, MemberQualifier, MemberQualifiers, OperationKind,
    TypeNode, UnboundedArrayFinder,
};
use core::fmt;

/// Why a composition was not accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// A reference cannot be qualified, pointed to, referenced or arrayed.
    ModifiesReference,
    /// The cv-qualifier is already present on the operand.
    RedundantQualifier,
    /// cv-qualifying a function type has no effect.
    QualifiedFunctionType,
    /// Top-level cv on a non-array parameter does not change the function type.
    InsignificantParameterQualifier,
    /// Pointers and references cannot name a member-qualified function type.
    IndirectQualifiedFunction,
    /// The pointer chain is already as deep as the policy allows.
    IndirectionLimit,
    ArrayOfFunctions,
    ArrayOfUnsizedArrays,
    /// The nearest existing dimension, reached through an indirection, is of
    /// unknown bound.
    ArrayOverUnsizedArray,
    /// The declarator already carries as many array dimensions as allowed.
    DimensionLimit,
    ReturnsArrayOrFunction,
    /// A parameter cannot have a member-qualified function type.
    QualifiedFunctionParameter,
    /// A parameter cannot include a pointer or reference to an array of
    /// unknown bound.
    UnboundedArrayParameter,
    /// Member-function qualifiers need a (possibly cv-qualified) function type.
    NotAFunction,
    DuplicateMemberQualifier,
    /// Volatile member qualification is only generated on top of const.
    VolatileWithoutConst,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Rejection::ModifiesReference => "a reference cannot be modified",
            Rejection::RedundantQualifier => "qualifier already present",
            Rejection::QualifiedFunctionType => "cv-qualifying a function type has no effect",
            Rejection::InsignificantParameterQualifier => {
                "top-level cv-qualifier on a parameter is insignificant"
            }
            Rejection::IndirectQualifiedFunction => {
                "pointer or reference to a qualified function type"
            }
            Rejection::IndirectionLimit => "pointer nesting limit reached",
            Rejection::ArrayOfFunctions => "array of functions",
            Rejection::ArrayOfUnsizedArrays => "array of arrays of unknown bound",
            Rejection::ArrayOverUnsizedArray => {
                "array declarator nesting an array of unknown bound"
            }
            Rejection::DimensionLimit => "array dimension limit reached",
            Rejection::ReturnsArrayOrFunction => "function returning an array or a function",
            Rejection::QualifiedFunctionParameter => "parameter of qualified function type",
            Rejection::UnboundedArrayParameter => {
                "parameter includes pointer or reference to array of unknown bound"
            }
            Rejection::NotAFunction => "member qualifier applied to a non-function type",
            Rejection::DuplicateMemberQualifier => "member qualifier already present",
            Rejection::VolatileWithoutConst => "volatile member qualifier without const",
        };
        f.write_str(msg)
    }
}

/// Outcome of a legality check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    Accept,
    /// Not a legal type in the modeled language.
    Disallow(Rejection),
    /// Legal, but excluded by generation policy.
    Prune(Rejection),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }

}

/// Decide whether `op` may be applied to `operand`.
pub fn can_compose(op: OperationKind, operand: &TypeNode, policy: &CompositionPolicy) -> Verdict {
    use Rejection::*;
    use Verdict::{Accept, Disallow, Prune};

    if let Some(qualifier) = op.member_qualifier() {
        return check_member_qualifier(qualifier, operand, policy);
    }

    if let Some(signature) = op.signature() {
        if !signature.is_argument() {
            // References to arrays and functions are fine as return types.
            if operand.is_array() || operand.is_function() {
                return Disallow(ReturnsArrayOrFunction);
            }
            return Accept;
        }
        return check_parameter(operand, policy);
    }

    if operand.is_reference() {
        return Disallow(ModifiesReference);
    }

    if let Some(quals) = op.cv_qualifiers() {
        if operand.cv_qualifiers().intersects(quals) {
            return Prune(RedundantQualifier);
        }
        if operand.is_function() && policy.prune_insignificant {
            return Prune(QualifiedFunctionType);
        }
        return Accept;
    }

    match op {
        OperationKind::Pointer | OperationKind::LValueReference | OperationKind::RValueReference => {
            if operand.is_qualified_function() {
                return Disallow(IndirectQualifiedFunction);
            }
            if op == OperationKind::Pointer && operand.pointer_levels() >= policy.max_pointer_levels {
                return Prune(IndirectionLimit);
            }
            Accept
        }
        OperationKind::PointerToMember => {
            if operand.pointer_levels() >= policy.max_pointer_levels {
                return Prune(IndirectionLimit);
            }
            Accept
        }
        OperationKind::UnsizedArray | OperationKind::SizedArray => {
            if operand.is_function() {
                return Disallow(ArrayOfFunctions);
            }
            if operand.is_unsized_array() {
                return Disallow(ArrayOfUnsizedArrays);
            }
            let dims = ArrayDimensions::of(operand);
            if dims.last() == Some(&ArrayExtent::Unsized) {
                return Prune(ArrayOverUnsizedArray);
            }
            if dims.len() >= policy.max_array_dimensions {
                return Prune(DimensionLimit);
            }
            Accept
        }
        _ => unreachable!("{op} is checked above"),
    }
}

fn check_parameter(param: &TypeNode, policy: &CompositionPolicy) -> Verdict {
    if param.is_qualified_function() {
        return Verdict::Disallow(Rejection::QualifiedFunctionParameter);
    }

    // The parameter is adjusted before its type is checked: an array decays
    // to a pointer to its element.
    let stripped = param.strip_cv();
    let adjusted = match (stripped.is_array(), stripped.operand()) {
        (true, Some(element)) => element,
        _ => param,
    };
    if UnboundedArrayFinder::contains(adjusted) {
        return Verdict::Disallow(Rejection::UnboundedArrayParameter);
    }

    if param.is_cv_qualified() && !param.is_array() && policy.prune_insignificant {
        return Verdict::Prune(Rejection::InsignificantParameterQualifier);
    }
    Verdict::Accept
}

fn check_member_qualifier(
    qualifier: MemberQualifier,
    operand: &TypeNode,
    policy: &CompositionPolicy,
) -> Verdict {
    let Some(present) = operand.member_qualifiers() else {
        return Verdict::Disallow(Rejection::NotAFunction);
    };

    if qualifier.is_ref() {
        if present.intersects(MemberQualifiers::REF) {
            return Verdict::Disallow(Rejection::DuplicateMemberQualifier);
        }
        return Verdict::Accept;
    }

    if present.contains(qualifier.flag()) {
        return Verdict::Disallow(Rejection::DuplicateMemberQualifier);
    }
    if qualifier == MemberQualifier::Volatile
        && policy.essential_variations
        && !present.contains(MemberQualifiers::CONST)
    {
        return Verdict::Prune(Rejection::VolatileWithoutConst);
    }
    Verdict::Accept
}

impl TypeNode {
    /// Re-check every construction step of this tree against the rules that
    /// disallow a composition.
    ///
    /// Pruning rules are ignored: a pruned construction is still a legal
    /// type. Nodes that no operation builds (the terminal, decayed
    /// parameters) are not checked themselves, only their operands.
    pub fn audit(&self, policy: &CompositionPolicy) -> Result<(), Rejection> {
        let mut node = self;
        while let Some(operand) = node.operand() {
            let verdict = OperationKind::of(node).map(|op| can_compose(op, operand, policy));
            if let Some(Verdict::Disallow(rejection)) = verdict {
                return Err(rejection);
            }
            node = operand;
        }
        Ok(())
    }
}
