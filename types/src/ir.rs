//! Intermediate Representation (IR) for derived C-family declarator types.
//!
//! ## Structure
//!
//! - **Core types**: `TypeNode`, `TypeKind` - the logical structure of types
//! - **Qualifiers**: bitsets for object cv-qualifiers and member-function
//!   qualifiers
//! - **Operations**: the composable operation kinds and their legality checks
//! - **Generic algorithms**: Visitor and folder patterns over types; the
//!   normalizer is a folder
//! - **Text**: declarators, English descriptions and alias-based definitions

pub mod builder;
pub mod declarator;
pub mod display;
pub mod fold;
pub mod legality;
pub mod operation;
pub mod policy;
pub mod qualifiers;
pub mod ty;
pub mod visit;

pub use display::alias_name;
pub use fold::{Normalizer, TypeFolder};
pub use legality::{Rejection, Verdict, can_compose};
pub use operation::{OperationKind, SiblingGroup, UnknownOperation};
pub use policy::{CompositionPolicy, CvStyle};
pub use qualifiers::{CvQualifiers, MemberQualifier, MemberQualifiers};
pub use ty::{
    ArrayExtent, FILLER_ARGUMENT, FILLER_RETURN, FIRST_SIZED_EXTENT, MEMBER_CLASS,
    OperandPosition, Signature, TypeFlags, TypeKind, TypeNode,
};
pub use visit::{ArrayDimensions, TypeVisitor, UnboundedArrayFinder};
