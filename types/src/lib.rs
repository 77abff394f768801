//! Type-expression algebra for derived C-family declarators.
//!
//! Types are immutable trees built one operation at a time from a terminal
//! type: cv-qualifiers, pointers, references, arrays, functions,
//! pointers-to-member and member-function qualifiers. Every construction is
//! gated by [`can_compose`], every tree has a canonical form
//! ([`TypeNode::normalize`]) and every canonical tree can be spelled as a
//! declarator ([`TypeNode::declare`]).
//!
//! # Example
//!
//! ```
//! use declgen_types::{CompositionPolicy, CvStyle, OperationKind, TypeNode, can_compose};
//!
//! let policy = CompositionPolicy::default();
//! let int = TypeNode::basic("int");
//! assert!(can_compose(OperationKind::UnsizedArray, &int, &policy).is_accept());
//!
//! let array = OperationKind::UnsizedArray.compose(int);
//! let ret = TypeNode::function_returning(0, false, TypeNode::lvalue_reference(array));
//! assert_eq!(ret.normalize(&policy).declare(CvStyle::West), "int(&())[]");
//! ```

#![no_std]
extern crate alloc;

// Intermediate Representation - node kinds, rules and rendering
pub mod ir;

// Re-export IR types for convenience
pub use ir::{
    ArrayDimensions, ArrayExtent, CompositionPolicy, CvQualifiers, CvStyle, FILLER_ARGUMENT,
    FILLER_RETURN, FIRST_SIZED_EXTENT, MEMBER_CLASS, MemberQualifier, MemberQualifiers,
    Normalizer, OperandPosition, OperationKind, Rejection, SiblingGroup, Signature, TypeFlags,
    TypeFolder, TypeKind, TypeNode, TypeVisitor, UnboundedArrayFinder, UnknownOperation,
    Verdict, alias_name, can_compose,
};
