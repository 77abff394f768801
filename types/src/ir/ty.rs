use super::{CvQualifiers, MemberQualifier, MemberQualifiers};
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use bitflags::bitflags;

/// Type spelled in every argument slot that does not hold the operand.
pub const FILLER_ARGUMENT: &str = "char";

/// Return type of functions that take their operand as an argument.
pub const FILLER_RETURN: &str = "void";

/// Class named by pointer-to-member declarators.
pub const MEMBER_CLASS: &str = "C";

/// Extent of the first sized array dimension; nested dimensions count down.
pub const FIRST_SIZED_EXTENT: u32 = 5;

bitflags! {
    /// Shape of a type once its top-level cv-qualifiers are stripped.
    ///
    /// Computed once when a node is built and cached, so legality checks can
    /// look through qualifier chains without walking them.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TypeFlags: u16 {
        const REFERENCE = 1 << 0;
        const INDIRECTION = 1 << 1;
        const ARRAY = 1 << 2;
        const UNSIZED_ARRAY = 1 << 3;
        const FUNCTION = 1 << 4;
        const QUALIFIED_FUNCTION = 1 << 5;
        const CV_QUALIFIED = 1 << 6;
    }
}

/// Bound of one array dimension.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrayExtent {
    Unsized,
    Sized(u32),
}

impl ArrayExtent {
    pub fn size(self) -> Option<u32> {
        match self {
            ArrayExtent::Unsized => None,
            ArrayExtent::Sized(n) => Some(n),
        }
    }
}

impl fmt::Display for ArrayExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayExtent::Unsized => Ok(()),
            ArrayExtent::Sized(n) => write!(f, "{}", n),
        }
    }
}

/// Where the operand of a function node sits in the function type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperandPosition {
    /// The operand is the return type.
    Return,
    /// The operand is the parameter at `slot` (zero-based).
    Argument { slot: u8 },
}

/// Shape of a function node: operand position, parameter count, ellipsis.
///
/// For [`OperandPosition::Return`] every parameter is a filler; for
/// [`OperandPosition::Argument`] `arity` includes the operand's slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    pub position: OperandPosition,
    pub arity: u8,
    pub variadic: bool,
}

impl Signature {
    pub fn returning(arity: u8, variadic: bool) -> Self {
        Self {
            position: OperandPosition::Return,
            arity,
            variadic,
        }
    }

    pub fn taking(arity: u8, slot: u8, variadic: bool) -> Self {
        debug_assert!(slot < arity);
        Self {
            position: OperandPosition::Argument { slot },
            arity,
            variadic,
        }
    }

    pub fn is_argument(&self) -> bool {
        matches!(self.position, OperandPosition::Argument { .. })
    }

    /// Comma-separated parameter list, with `operand` placed in its slot.
    ///
    /// `filler` is spelled in every other slot. `operand` is ignored for
    /// return-position signatures.
    pub fn parameters(&self, operand: &str, filler: &str) -> String {
        let mut params: Vec<&str> = Vec::with_capacity(self.arity as usize + 1);
        for i in 0..self.arity {
            match self.position {
                OperandPosition::Argument { slot } if slot == i => params.push(operand),
                _ => params.push(filler),
            }
        }
        if self.variadic {
            params.push("...");
        }
        params.join(", ")
    }
}

/// Logical structure of a type expression.
///
/// Every interior variant owns exactly one operand.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Terminal type named by a single token, e.g. `int`.
    Basic(String),

    /// Object cv-qualification.
    CvQualified {
        quals: CvQualifiers,
        operand: Box<TypeNode>,
    },

    Pointer(Box<TypeNode>),

    /// Pointer produced by decaying an array parameter.
    ///
    /// Remembers the extent of the dimension it replaced so nested-array
    /// bookkeeping survives the decay.
    PointerActingAsArray {
        extent: ArrayExtent,
        operand: Box<TypeNode>,
    },

    LValueReference(Box<TypeNode>),

    RValueReference(Box<TypeNode>),

    /// Pointer to a member of [`MEMBER_CLASS`].
    PointerToMember(Box<TypeNode>),

    Array {
        extent: ArrayExtent,
        element: Box<TypeNode>,
    },

    Function {
        signature: Signature,
        operand: Box<TypeNode>,
    },

    /// One member-function qualifier wrapping a function type.
    MemberQualified {
        qualifier: MemberQualifier,
        operand: Box<TypeNode>,
    },
}

impl TypeKind {
    /// The single child, absent only for [`TypeKind::Basic`].
    pub fn operand(&self) -> Option<&TypeNode> {
        match self {
            TypeKind::Basic(_) => None,
            TypeKind::CvQualified { operand, .. }
            | TypeKind::Pointer(operand)
            | TypeKind::PointerActingAsArray { operand, .. }
            | TypeKind::LValueReference(operand)
            | TypeKind::RValueReference(operand)
            | TypeKind::PointerToMember(operand)
            | TypeKind::Function { operand, .. }
            | TypeKind::MemberQualified { operand, .. } => Some(operand),
            TypeKind::Array { element, .. } => Some(element),
        }
    }

    /// Compute the shape flags of a node with this kind.
    pub fn compute_flags(&self) -> TypeFlags {
        match self {
            TypeKind::Basic(_) => TypeFlags::empty(),

            // Qualifiers are transparent: keep the operand's shape.
            TypeKind::CvQualified { operand, .. } => operand.flags | TypeFlags::CV_QUALIFIED,

            TypeKind::Pointer(_)
            | TypeKind::PointerActingAsArray { .. }
            | TypeKind::PointerToMember(_) => TypeFlags::INDIRECTION,

            TypeKind::LValueReference(_) | TypeKind::RValueReference(_) => TypeFlags::REFERENCE,

            TypeKind::Array { extent, .. } => match extent {
                ArrayExtent::Unsized => TypeFlags::ARRAY | TypeFlags::UNSIZED_ARRAY,
                ArrayExtent::Sized(_) => TypeFlags::ARRAY,
            },

            TypeKind::Function { .. } => TypeFlags::FUNCTION,

            TypeKind::MemberQualified { .. } => {
                TypeFlags::FUNCTION | TypeFlags::QUALIFIED_FUNCTION
            }
        }
    }
}

/// An immutable type-expression tree.
///
/// `depth` is the distance from the leaf and `flags` the cached shape; both
/// are derived from the kind when the node is built, so structural equality
/// of nodes is equality of their kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeNode {
    kind: TypeKind,
    depth: usize,
    flags: TypeFlags,
}

impl TypeNode {
    pub fn new(kind: TypeKind) -> Self {
        let depth = kind.operand().map_or(0, |operand| operand.depth + 1);
        let flags = kind.compute_flags();
        Self { kind, depth, flags }
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn into_kind(self) -> TypeKind {
        self.kind
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn flags(&self) -> TypeFlags {
        self.flags
    }

    pub fn operand(&self) -> Option<&TypeNode> {
        self.kind.operand()
    }

    /// The node below any top-level cv-qualifiers.
    pub fn strip_cv(&self) -> &TypeNode {
        let mut node = self;
        while let TypeKind::CvQualified { operand, .. } = &node.kind {
            node = operand;
        }
        node
    }

    /// Union of the top-level cv-qualifier chain.
    pub fn cv_qualifiers(&self) -> CvQualifiers {
        let mut quals = CvQualifiers::empty();
        let mut node = self;
        while let TypeKind::CvQualified {
            quals: layer,
            operand,
        } = &node.kind
        {
            quals |= *layer;
            node = operand;
        }
        quals
    }

    pub fn is_reference(&self) -> bool {
        self.flags.contains(TypeFlags::REFERENCE)
    }

    pub fn is_array(&self) -> bool {
        self.flags.contains(TypeFlags::ARRAY)
    }

    pub fn is_unsized_array(&self) -> bool {
        self.flags.contains(TypeFlags::UNSIZED_ARRAY)
    }

    /// True for plain and member-qualified function types.
    pub fn is_function(&self) -> bool {
        self.flags.contains(TypeFlags::FUNCTION)
    }

    pub fn is_qualified_function(&self) -> bool {
        self.flags.contains(TypeFlags::QUALIFIED_FUNCTION)
    }

    pub fn is_cv_qualified(&self) -> bool {
        self.flags.contains(TypeFlags::CV_QUALIFIED)
    }

    /// Number of consecutive pointer levels, looking through cv-qualifiers.
    pub fn pointer_levels(&self) -> usize {
        let mut levels = 0;
        let mut node = self.strip_cv();
        while node.flags.contains(TypeFlags::INDIRECTION) {
            levels += 1;
            match node.operand() {
                Some(operand) => node = operand.strip_cv(),
                None => break,
            }
        }
        levels
    }

    /// Collected qualifiers when this node is a function type, possibly
    /// under cv-qualifiers (which have no effect on it); `None` otherwise.
    pub fn member_qualifiers(&self) -> Option<MemberQualifiers> {
        let mut quals = MemberQualifiers::empty();
        let mut node = self;
        loop {
            match &node.kind {
                TypeKind::MemberQualified { qualifier, operand } => {
                    quals |= qualifier.flag();
                    node = operand;
                }
                TypeKind::CvQualified { operand, .. } => node = operand,
                TypeKind::Function { .. } => return Some(quals),
                _ => return None,
            }
        }
    }

    /// The function node under a chain of member qualifiers and
    /// cv-qualifiers.
    pub fn underlying_function(&self) -> &TypeNode {
        let mut node = self;
        while let TypeKind::MemberQualified { operand, .. } | TypeKind::CvQualified { operand, .. } =
            &node.kind
        {
            node = operand;
        }
        node
    }
}
