use super::{CompositionPolicy, CvQualifiers, MemberQualifiers, TypeKind, TypeNode};
use alloc::boxed::Box;

/// Trait for transforming type trees.
///
/// Implement this trait to build new trees from existing ones. The default
/// implementation rebuilds every node with its folded operand.
///
/// # Example
///
/// ```
/// use declgen_types::{TypeFolder, TypeKind, TypeNode};
///
/// // Rename every terminal to `long`.
/// struct Renamer;
///
/// impl TypeFolder for Renamer {
///     fn fold(&mut self, node: &TypeNode) -> TypeNode {
///         match node.kind() {
///             TypeKind::Basic(_) => TypeNode::basic("long"),
///             _ => self.super_fold(node),
///         }
///     }
/// }
///
/// let ty = TypeNode::pointer(TypeNode::basic("int"));
/// assert_eq!(Renamer.fold(&ty), TypeNode::pointer(TypeNode::basic("long")));
/// ```
pub trait TypeFolder {
    /// Transform a node.
    ///
    /// Override this to customize behavior. Call `super_fold` to recurse.
    fn fold(&mut self, node: &TypeNode) -> TypeNode {
        self.super_fold(node)
    }

    /// Default recursion: fold the operand and rebuild the same kind.
    ///
    /// Override `fold` instead of this method.
    fn super_fold(&mut self, node: &TypeNode) -> TypeNode {
        let kind = match node.kind() {
            TypeKind::Basic(name) => TypeKind::Basic(name.clone()),
            TypeKind::CvQualified { quals, operand } => TypeKind::CvQualified {
                quals: *quals,
                operand: Box::new(self.fold(operand)),
            },
            TypeKind::Pointer(operand) => TypeKind::Pointer(Box::new(self.fold(operand))),
            TypeKind::PointerActingAsArray { extent, operand } => {
                TypeKind::PointerActingAsArray {
                    extent: *extent,
                    operand: Box::new(self.fold(operand)),
                }
            }
            TypeKind::LValueReference(operand) => {
                TypeKind::LValueReference(Box::new(self.fold(operand)))
            }
            TypeKind::RValueReference(operand) => {
                TypeKind::RValueReference(Box::new(self.fold(operand)))
            }
            TypeKind::PointerToMember(operand) => {
                TypeKind::PointerToMember(Box::new(self.fold(operand)))
            }
            TypeKind::Array { extent, element } => TypeKind::Array {
                extent: *extent,
                element: Box::new(self.fold(element)),
            },
            TypeKind::Function { signature, operand } => TypeKind::Function {
                signature: *signature,
                operand: Box::new(self.fold(operand)),
            },
            TypeKind::MemberQualified { qualifier, operand } => TypeKind::MemberQualified {
                qualifier: *qualifier,
                operand: Box::new(self.fold(operand)),
            },
        };
        TypeNode::new(kind)
    }
}

/// Rewrites a tree into its canonical form.
///
/// Works bottom-up: every operand is normalized before the rule for its
/// parent is applied, so each rule only ever sees canonical operands.
pub struct Normalizer<'a> {
    policy: &'a CompositionPolicy,
    /// Set while folding the pointee of a pointer-to-member.
    member_pointee: bool,
}

impl<'a> Normalizer<'a> {
    pub fn new(policy: &'a CompositionPolicy) -> Self {
        Self {
            policy,
            member_pointee: false,
        }
    }

    fn fold_operand(&mut self, operand: &TypeNode, member_pointee: bool) -> TypeNode {
        let saved = core::mem::replace(&mut self.member_pointee, member_pointee);
        let folded = self.fold(operand);
        self.member_pointee = saved;
        folded
    }

    /// Apply `quals` to an already normalized operand.
    fn qualify(quals: CvQualifiers, operand: TypeNode) -> TypeNode {
        match operand.into_kind() {
            TypeKind::CvQualified {
                quals: inner,
                operand,
            } => TypeNode::cv_qualified(quals | inner, *operand),
            TypeKind::Array { extent, element } => {
                TypeNode::array(extent, Self::qualify(quals, *element))
            }
            kind @ (TypeKind::Function { .. } | TypeKind::MemberQualified { .. }) => {
                TypeNode::new(kind)
            }
            kind => TypeNode::cv_qualified(quals, TypeNode::new(kind)),
        }
    }

    /// Parameter type adjustment of an already normalized parameter.
    fn adjust_parameter(param: TypeNode) -> TypeNode {
        let param = match param.into_kind() {
            TypeKind::CvQualified { operand, .. } => *operand,
            kind => TypeNode::new(kind),
        };
        if param.is_function() {
            return TypeNode::pointer(param);
        }
        match param.into_kind() {
            TypeKind::Array { extent, element } => {
                TypeNode::pointer_acting_as_array(extent, *element)
            }
            kind => TypeNode::new(kind),
        }
    }
}

impl TypeFolder for Normalizer<'_> {
    fn fold(&mut self, node: &TypeNode) -> TypeNode {
        match node.kind() {
            TypeKind::CvQualified { quals, operand } => {
                let operand = self.fold_operand(operand, self.member_pointee);
                Self::qualify(*quals, operand)
            }
            TypeKind::PointerToMember(operand) => {
                TypeNode::pointer_to_member(self.fold_operand(operand, true))
            }
            TypeKind::Function { signature, operand } => {
                let operand = self.fold_operand(operand, false);
                let operand = if signature.is_argument() {
                    Self::adjust_parameter(operand)
                } else {
                    operand
                };
                TypeNode::function(*signature, operand)
            }
            TypeKind::MemberQualified { .. } => {
                let mut quals = MemberQualifiers::empty();
                let mut function = node;
                // cv-qualifiers inside the chain have no effect on a function.
                loop {
                    match function.kind() {
                        TypeKind::MemberQualified { qualifier, operand } => {
                            quals |= qualifier.flag();
                            function = operand;
                        }
                        TypeKind::CvQualified { operand, .. } => function = operand,
                        _ => break,
                    }
                }
                if self.member_pointee && self.policy.elide_member_ref_qualifiers {
                    quals.remove(MemberQualifiers::REF);
                }
                let function = self.fold_operand(function, false);
                quals.canonical_order().fold(function, |inner, qualifier| {
                    TypeNode::member_qualified(qualifier, inner)
                })
            }
            _ => {
                let saved = core::mem::replace(&mut self.member_pointee, false);
                let folded = self.super_fold(node);
                self.member_pointee = saved;
                folded
            }
        }
    }
}

impl TypeNode {
    /// The canonical form of this tree.
    pub fn normalize(&self, policy: &CompositionPolicy) -> TypeNode {
        Normalizer::new(policy).fold(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayExtent, MemberQualifier};
    use pretty_assertions::assert_eq;

    fn int() -> TypeNode {
        TypeNode::basic("int")
    }

    fn normalize(node: &TypeNode) -> TypeNode {
        node.normalize(&CompositionPolicy::default())
    }

    #[test]
    fn test_adjacent_qualifiers_merge() {
        let ty = TypeNode::volatile(TypeNode::const_(int()));
        assert_eq!(
            normalize(&ty),
            TypeNode::cv_qualified(CvQualifiers::all(), int())
        );
    }

    #[test]
    fn test_qualifier_distributes_into_arrays() {
        let ty = TypeNode::const_(TypeNode::sized_array(
            4,
            TypeNode::volatile(TypeNode::sized_array(5, int())),
        ));
        assert_eq!(
            normalize(&ty),
            TypeNode::sized_array(
                4,
                TypeNode::sized_array(5, TypeNode::cv_qualified(CvQualifiers::all(), int()))
            )
        );
    }

    #[test]
    fn test_qualified_function_type_loses_qualifier() {
        let function = TypeNode::function_returning(0, false, int());
        assert_eq!(normalize(&TypeNode::const_(function.clone())), function);
    }

    #[test]
    fn test_parameters_are_adjusted() {
        let const_param = TypeNode::function_taking(1, 0, false, TypeNode::const_(int()));
        assert_eq!(
            normalize(&const_param),
            TypeNode::function_taking(1, 0, false, int())
        );

        let array_param =
            TypeNode::function_taking(1, 0, false, TypeNode::const_(TypeNode::sized_array(5, int())));
        assert_eq!(
            normalize(&array_param),
            TypeNode::function_taking(
                1,
                0,
                false,
                TypeNode::pointer_acting_as_array(ArrayExtent::Sized(5), TypeNode::const_(int()))
            )
        );

        let function = TypeNode::function_returning(1, false, int());
        let function_param =
            TypeNode::function_taking(2, 1, false, TypeNode::volatile(function.clone()));
        assert_eq!(
            normalize(&function_param),
            TypeNode::function_taking(2, 1, false, TypeNode::pointer(function))
        );

        // Only the top level is adjusted.
        let pointer_param =
            TypeNode::function_taking(1, 0, false, TypeNode::pointer(TypeNode::const_(int())));
        assert_eq!(normalize(&pointer_param), pointer_param);
    }

    #[test]
    fn test_member_qualifiers_are_reordered() {
        let function = TypeNode::function_returning(0, false, int());
        let ty = TypeNode::member_qualified(
            MemberQualifier::Const,
            TypeNode::member_qualified(MemberQualifier::RValueRef, function.clone()),
        );
        assert_eq!(
            normalize(&ty),
            TypeNode::member_qualified(
                MemberQualifier::RValueRef,
                TypeNode::member_qualified(MemberQualifier::Const, function)
            )
        );
    }

    #[test]
    fn test_ref_qualifier_elided_only_under_member_pointer() {
        let function = TypeNode::function_returning(0, false, int());
        let qualified = TypeNode::member_qualified(MemberQualifier::LValueRef, function.clone());
        let eliding = CompositionPolicy {
            elide_member_ref_qualifiers: true,
            ..Default::default()
        };

        let through_member = TypeNode::pointer_to_member(TypeNode::const_(qualified.clone()));
        assert_eq!(
            through_member.normalize(&eliding),
            TypeNode::pointer_to_member(function.clone())
        );
        assert_eq!(
            normalize(&through_member),
            TypeNode::pointer_to_member(qualified.clone())
        );

        let returned = TypeNode::pointer_to_member(TypeNode::function_returning(
            0,
            false,
            TypeNode::pointer_to_member(qualified.clone()),
        ));
        let folded = returned.normalize(&eliding);
        assert_eq!(
            folded,
            TypeNode::pointer_to_member(TypeNode::function_returning(
                0,
                false,
                TypeNode::pointer_to_member(function),
            ))
        );
        assert_eq!(qualified.normalize(&eliding), qualified);
    }

    #[test]
    fn test_cv_inside_member_chain_is_dropped() {
        let function = TypeNode::function_returning(2, false, int());
        let ty = TypeNode::member_qualified(
            MemberQualifier::Const,
            TypeNode::volatile(TypeNode::member_qualified(
                MemberQualifier::RValueRef,
                TypeNode::const_(function.clone()),
            )),
        );
        assert_eq!(
            normalize(&ty),
            TypeNode::member_qualified(
                MemberQualifier::RValueRef,
                TypeNode::member_qualified(MemberQualifier::Const, function)
            )
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let ty = TypeNode::function_taking(
            2,
            1,
            true,
            TypeNode::volatile(TypeNode::const_(TypeNode::sized_array(
                4,
                TypeNode::const_(TypeNode::sized_array(5, int())),
            ))),
        );
        let once = normalize(&ty);
        assert_eq!(normalize(&once), once);
    }
}
