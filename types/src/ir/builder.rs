//! Constructors for type-expression nodes.
//!
//! These build nodes directly, without any legality check. The enumeration
//! engine goes through [`crate::can_compose`] first and then
//! [`crate::OperationKind::compose`]; tests and callers that already know
//! their construction is valid use these helpers.

use super::{
    ArrayDimensions, ArrayExtent, CvQualifiers, FIRST_SIZED_EXTENT, MemberQualifier, Signature,
    TypeKind, TypeNode,
};
use alloc::boxed::Box;
use alloc::string::String;

impl TypeNode {
    pub fn basic(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Basic(name.into()))
    }

    pub fn cv_qualified(quals: CvQualifiers, operand: TypeNode) -> Self {
        Self::new(TypeKind::CvQualified {
            quals,
            operand: Box::new(operand),
        })
    }

    /// `operand const`. Trailing underscore because `const` is a keyword.
    pub fn const_(operand: TypeNode) -> Self {
        Self::cv_qualified(CvQualifiers::CONST, operand)
    }

    pub fn volatile(operand: TypeNode) -> Self {
        Self::cv_qualified(CvQualifiers::VOLATILE, operand)
    }

    pub fn pointer(operand: TypeNode) -> Self {
        Self::new(TypeKind::Pointer(Box::new(operand)))
    }

    pub fn pointer_acting_as_array(extent: ArrayExtent, operand: TypeNode) -> Self {
        Self::new(TypeKind::PointerActingAsArray {
            extent,
            operand: Box::new(operand),
        })
    }

    pub fn lvalue_reference(operand: TypeNode) -> Self {
        Self::new(TypeKind::LValueReference(Box::new(operand)))
    }

    pub fn rvalue_reference(operand: TypeNode) -> Self {
        Self::new(TypeKind::RValueReference(Box::new(operand)))
    }

    pub fn pointer_to_member(operand: TypeNode) -> Self {
        Self::new(TypeKind::PointerToMember(Box::new(operand)))
    }

    pub fn array(extent: ArrayExtent, element: TypeNode) -> Self {
        Self::new(TypeKind::Array {
            extent,
            element: Box::new(element),
        })
    }

    pub fn unsized_array(element: TypeNode) -> Self {
        Self::array(ArrayExtent::Unsized, element)
    }

    pub fn sized_array(extent: u32, element: TypeNode) -> Self {
        Self::array(ArrayExtent::Sized(extent), element)
    }

    /// Sized array whose extent follows the nesting convention: the first
    /// dimension is [`FIRST_SIZED_EXTENT`] and each outer one is one less
    /// than the outermost sized dimension already present.
    pub fn next_sized_array(element: TypeNode) -> Self {
        let extent = ArrayDimensions::of(&element)
            .iter()
            .rev()
            .find_map(|dim| dim.size())
            .map_or(FIRST_SIZED_EXTENT, |outer| outer.saturating_sub(1).max(1));
        Self::sized_array(extent, element)
    }

    pub fn function(signature: Signature, operand: TypeNode) -> Self {
        Self::new(TypeKind::Function {
            signature,
            operand: Box::new(operand),
        })
    }

    /// Function returning `ret` and taking `arity` filler arguments.
    pub fn function_returning(arity: u8, variadic: bool, ret: TypeNode) -> Self {
        Self::function(Signature::returning(arity, variadic), ret)
    }

    /// Function returning the filler type and taking `param` at `slot`.
    pub fn function_taking(arity: u8, slot: u8, variadic: bool, param: TypeNode) -> Self {
        Self::function(Signature::taking(arity, slot, variadic), param)
    }

    pub fn member_qualified(qualifier: MemberQualifier, operand: TypeNode) -> Self {
        Self::new(TypeKind::MemberQualified {
            qualifier,
            operand: Box::new(operand),
        })
    }
}
