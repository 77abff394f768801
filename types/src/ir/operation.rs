//! The composable operations of the algebra.

use super::{CvQualifiers, MemberQualifier, Signature, TypeKind, TypeNode};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// One way of wrapping an operand into a larger type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationKind {
    Const,
    Volatile,
    ConstVolatile,
    Pointer,
    LValueReference,
    RValueReference,
    PointerToMember,
    UnsizedArray,
    SizedArray,
    Function0Ret,
    Function1Ret,
    Function2Ret,
    Function0RetVariadic,
    Function1RetVariadic,
    Function2RetVariadic,
    Function1Arg,
    Function2ArgSlot1,
    Function2ArgSlot2,
    Function1ArgVariadic,
    Function2ArgSlot1Variadic,
    Function2ArgSlot2Variadic,
    ConstQualified,
    VolatileQualified,
    LValueRefQualified,
    RValueRefQualified,
}

/// Operations that relate identically to every other operation; the
/// essential-variations policy keeps one representative per group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SiblingGroup {
    CvQualifier,
    Reference,
    RefQualifier,
}

impl OperationKind {
    pub const ALL: [OperationKind; 25] = [
        OperationKind::Const,
        OperationKind::Volatile,
        OperationKind::ConstVolatile,
        OperationKind::Pointer,
        OperationKind::LValueReference,
        OperationKind::RValueReference,
        OperationKind::PointerToMember,
        OperationKind::UnsizedArray,
        OperationKind::SizedArray,
        OperationKind::Function0Ret,
        OperationKind::Function1Ret,
        OperationKind::Function2Ret,
        OperationKind::Function0RetVariadic,
        OperationKind::Function1RetVariadic,
        OperationKind::Function2RetVariadic,
        OperationKind::Function1Arg,
        OperationKind::Function2ArgSlot1,
        OperationKind::Function2ArgSlot2,
        OperationKind::Function1ArgVariadic,
        OperationKind::Function2ArgSlot1Variadic,
        OperationKind::Function2ArgSlot2Variadic,
        OperationKind::ConstQualified,
        OperationKind::VolatileQualified,
        OperationKind::LValueRefQualified,
        OperationKind::RValueRefQualified,
    ];

    /// Stable kebab-case name, used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Const => "const",
            OperationKind::Volatile => "volatile",
            OperationKind::ConstVolatile => "const-volatile",
            OperationKind::Pointer => "pointer",
            OperationKind::LValueReference => "lvalue-reference",
            OperationKind::RValueReference => "rvalue-reference",
            OperationKind::PointerToMember => "pointer-to-member",
            OperationKind::UnsizedArray => "unsized-array",
            OperationKind::SizedArray => "sized-array",
            OperationKind::Function0Ret => "function0-ret",
            OperationKind::Function1Ret => "function1-ret",
            OperationKind::Function2Ret => "function2-ret",
            OperationKind::Function0RetVariadic => "function0-ret-variadic",
            OperationKind::Function1RetVariadic => "function1-ret-variadic",
            OperationKind::Function2RetVariadic => "function2-ret-variadic",
            OperationKind::Function1Arg => "function1-arg",
            OperationKind::Function2ArgSlot1 => "function2-arg-slot1",
            OperationKind::Function2ArgSlot2 => "function2-arg-slot2",
            OperationKind::Function1ArgVariadic => "function1-arg-variadic",
            OperationKind::Function2ArgSlot1Variadic => "function2-arg-slot1-variadic",
            OperationKind::Function2ArgSlot2Variadic => "function2-arg-slot2-variadic",
            OperationKind::ConstQualified => "const-qualified",
            OperationKind::VolatileQualified => "volatile-qualified",
            OperationKind::LValueRefQualified => "lvalue-ref-qualified",
            OperationKind::RValueRefQualified => "rvalue-ref-qualified",
        }
    }

    pub fn sibling_group(self) -> Option<SiblingGroup> {
        match self {
            OperationKind::Const | OperationKind::Volatile | OperationKind::ConstVolatile => {
                Some(SiblingGroup::CvQualifier)
            }
            OperationKind::LValueReference | OperationKind::RValueReference => {
                Some(SiblingGroup::Reference)
            }
            OperationKind::LValueRefQualified | OperationKind::RValueRefQualified => {
                Some(SiblingGroup::RefQualifier)
            }
            _ => None,
        }
    }

    /// Qualifiers added by a cv-qualifier operation.
    pub fn cv_qualifiers(self) -> Option<CvQualifiers> {
        match self {
            OperationKind::Const => Some(CvQualifiers::CONST),
            OperationKind::Volatile => Some(CvQualifiers::VOLATILE),
            OperationKind::ConstVolatile => Some(CvQualifiers::all()),
            _ => None,
        }
    }

    pub fn member_qualifier(self) -> Option<MemberQualifier> {
        match self {
            OperationKind::ConstQualified => Some(MemberQualifier::Const),
            OperationKind::VolatileQualified => Some(MemberQualifier::Volatile),
            OperationKind::LValueRefQualified => Some(MemberQualifier::LValueRef),
            OperationKind::RValueRefQualified => Some(MemberQualifier::RValueRef),
            _ => None,
        }
    }

    pub fn signature(self) -> Option<Signature> {
        let signature = match self {
            OperationKind::Function0Ret => Signature::returning(0, false),
            OperationKind::Function1Ret => Signature::returning(1, false),
            OperationKind::Function2Ret => Signature::returning(2, false),
            OperationKind::Function0RetVariadic => Signature::returning(0, true),
            OperationKind::Function1RetVariadic => Signature::returning(1, true),
            OperationKind::Function2RetVariadic => Signature::returning(2, true),
            OperationKind::Function1Arg => Signature::taking(1, 0, false),
            OperationKind::Function2ArgSlot1 => Signature::taking(2, 0, false),
            OperationKind::Function2ArgSlot2 => Signature::taking(2, 1, false),
            OperationKind::Function1ArgVariadic => Signature::taking(1, 0, true),
            OperationKind::Function2ArgSlot1Variadic => Signature::taking(2, 0, true),
            OperationKind::Function2ArgSlot2Variadic => Signature::taking(2, 1, true),
            _ => return None,
        };
        Some(signature)
    }

    /// Build the node for this operation applied to `operand`.
    ///
    /// No legality check is made here; see [`crate::can_compose`].
    pub fn compose(self, operand: TypeNode) -> TypeNode {
        if let Some(quals) = self.cv_qualifiers() {
            return TypeNode::cv_qualified(quals, operand);
        }
        if let Some(qualifier) = self.member_qualifier() {
            return TypeNode::member_qualified(qualifier, operand);
        }
        if let Some(signature) = self.signature() {
            return TypeNode::function(signature, operand);
        }
        match self {
            OperationKind::Pointer => TypeNode::pointer(operand),
            OperationKind::LValueReference => TypeNode::lvalue_reference(operand),
            OperationKind::RValueReference => TypeNode::rvalue_reference(operand),
            OperationKind::PointerToMember => TypeNode::pointer_to_member(operand),
            OperationKind::UnsizedArray => TypeNode::unsized_array(operand),
            OperationKind::SizedArray => TypeNode::next_sized_array(operand),
            _ => unreachable!("{self} is handled above"),
        }
    }

    /// The operation that built `node`, if it was built by one.
    ///
    /// Terminals and decayed parameters have none.
    pub fn of(node: &TypeNode) -> Option<OperationKind> {
        let op = match node.kind() {
            TypeKind::Basic(_) | TypeKind::PointerActingAsArray { .. } => return None,
            TypeKind::CvQualified { quals, .. } => {
                match (quals.contains(CvQualifiers::CONST), quals.contains(CvQualifiers::VOLATILE)) {
                    (true, true) => OperationKind::ConstVolatile,
                    (true, false) => OperationKind::Const,
                    (false, true) => OperationKind::Volatile,
                    (false, false) => return None,
                }
            }
            TypeKind::Pointer(_) => OperationKind::Pointer,
            TypeKind::LValueReference(_) => OperationKind::LValueReference,
            TypeKind::RValueReference(_) => OperationKind::RValueReference,
            TypeKind::PointerToMember(_) => OperationKind::PointerToMember,
            TypeKind::Array { extent, .. } => match extent.size() {
                Some(_) => OperationKind::SizedArray,
                None => OperationKind::UnsizedArray,
            },
            TypeKind::Function { signature, .. } => {
                return OperationKind::ALL
                    .into_iter()
                    .find(|op| op.signature() == Some(*signature));
            }
            TypeKind::MemberQualified { qualifier, .. } => match qualifier {
                MemberQualifier::Const => OperationKind::ConstQualified,
                MemberQualifier::Volatile => OperationKind::VolatileQualified,
                MemberQualifier::LValueRef => OperationKind::LValueRefQualified,
                MemberQualifier::RValueRef => OperationKind::RValueRefQualified,
            },
        };
        Some(op)
    }

    /// Keep only the first operation of each sibling group, preserving order.
    pub fn collapse_siblings(ops: &[OperationKind]) -> Vec<OperationKind> {
        let mut seen: Vec<SiblingGroup> = Vec::new();
        let mut kept = Vec::with_capacity(ops.len());
        for &op in ops {
            if let Some(group) = op.sibling_group() {
                if seen.contains(&group) {
                    continue;
                }
                seen.push(group);
            }
            kept.push(op);
        }
        kept
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown operation name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownOperation(pub alloc::string::String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation `{}`", self.0)
    }
}

impl core::error::Error for UnknownOperation {}

impl FromStr for OperationKind {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.into()))
    }
}
