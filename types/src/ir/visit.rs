use super::{ArrayExtent, TypeKind, TypeNode};
use alloc::vec::Vec;

/// Trait for visiting type trees.
///
/// Implement this trait to traverse types without rebuilding them.
/// The default implementation handles recursion automatically.
///
/// # Example
///
/// ```
/// use declgen_types::{TypeNode, TypeKind, TypeVisitor};
///
/// struct PointerCounter {
///     count: usize,
/// }
///
/// impl TypeVisitor for PointerCounter {
///     fn visit(&mut self, node: &TypeNode) {
///         if matches!(node.kind(), TypeKind::Pointer(_)) {
///             self.count += 1;
///         }
///         self.super_visit(node);
///     }
/// }
///
/// let ty = TypeNode::pointer(TypeNode::const_(TypeNode::pointer(TypeNode::basic("int"))));
/// let mut counter = PointerCounter { count: 0 };
/// counter.visit(&ty);
/// assert_eq!(counter.count, 2);
/// ```
pub trait TypeVisitor {
    /// Visit a node.
    ///
    /// Override this to customize behavior. Call `super_visit` to recurse.
    fn visit(&mut self, node: &TypeNode) {
        self.super_visit(node)
    }

    /// Default recursion into the operand.
    ///
    /// Override `visit` instead of this method.
    fn super_visit(&mut self, node: &TypeNode) {
        if let Some(operand) = node.operand() {
            self.visit(operand);
        }
    }
}

/// Collects the array dimensions an outer array would nest inside.
///
/// Dimensions are seen through cv-qualifiers, indirections and arrays, but
/// not through functions: a function's return or parameter type starts a new
/// declarator. The result is ordered innermost first, so the last entry is
/// the outermost existing dimension.
#[derive(Default)]
pub struct ArrayDimensions {
    outer_first: Vec<ArrayExtent>,
}

impl ArrayDimensions {
    pub fn of(node: &TypeNode) -> Vec<ArrayExtent> {
        let mut dims = Self::default();
        dims.visit(node);
        dims.outer_first.reverse();
        dims.outer_first
    }
}

impl TypeVisitor for ArrayDimensions {
    fn visit(&mut self, node: &TypeNode) {
        match node.kind() {
            TypeKind::Array { extent, .. } | TypeKind::PointerActingAsArray { extent, .. } => {
                self.outer_first.push(*extent);
                self.super_visit(node);
            }
            TypeKind::Function { .. } | TypeKind::MemberQualified { .. } => {}
            _ => self.super_visit(node),
        }
    }
}

/// Finds a pointer or reference to an array of unknown bound anywhere in a
/// type. Such a type may not appear in a parameter list.
#[derive(Default)]
pub struct UnboundedArrayFinder {
    found: bool,
}

impl UnboundedArrayFinder {
    pub fn contains(node: &TypeNode) -> bool {
        let mut finder = Self::default();
        finder.visit(node);
        finder.found
    }
}

impl TypeVisitor for UnboundedArrayFinder {
    fn visit(&mut self, node: &TypeNode) {
        if self.found {
            return;
        }
        let indirect = matches!(
            node.kind(),
            TypeKind::Pointer(_)
                | TypeKind::PointerActingAsArray { .. }
                | TypeKind::PointerToMember(_)
                | TypeKind::LValueReference(_)
                | TypeKind::RValueReference(_)
        );
        if indirect && node.operand().is_some_and(TypeNode::is_unsized_array) {
            self.found = true;
            return;
        }
        self.super_visit(node);
    }
}
