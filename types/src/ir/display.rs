//! Textual forms of a node other than its declarator: the structural
//! description (`Display`), the English description and the alias-based
//! definition of one construction step.

use super::{
    ArrayExtent, FILLER_ARGUMENT, FILLER_RETURN, MEMBER_CLASS, OperandPosition, TypeKind,
    TypeNode,
};
use alloc::format;
use alloc::string::String;
use core::fmt;

/// Name of the alias bound to the node built at `depth`.
pub fn alias_name(depth: usize) -> String {
    format!("A{depth}")
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            TypeKind::Basic(name) => return write!(f, "BasicType({name:?})"),
            TypeKind::CvQualified { quals, .. } => f.write_str(quals.variant_name())?,
            TypeKind::Pointer(_) => f.write_str("Pointer")?,
            TypeKind::PointerActingAsArray { extent, .. } => {
                write!(f, "PointerActingAsArray[{extent}]")?
            }
            TypeKind::LValueReference(_) => f.write_str("LValueReference")?,
            TypeKind::RValueReference(_) => f.write_str("RValueReference")?,
            TypeKind::PointerToMember(_) => f.write_str("PointerToMember")?,
            TypeKind::Array {
                extent: ArrayExtent::Unsized,
                ..
            } => f.write_str("UnsizedArray")?,
            TypeKind::Array { extent, .. } => write!(f, "SizedArray[{extent}]")?,
            TypeKind::Function { signature, .. } => {
                let variadic = if signature.variadic { "Variadic" } else { "" };
                match signature.position {
                    OperandPosition::Return => {
                        write!(f, "Function{}Ret{variadic}", signature.arity)?
                    }
                    OperandPosition::Argument { slot } if signature.arity > 1 => {
                        write!(f, "Function{}Arg{variadic}@{}", signature.arity, slot + 1)?
                    }
                    OperandPosition::Argument { .. } => {
                        write!(f, "Function{}Arg{variadic}", signature.arity)?
                    }
                }
            }
            TypeKind::MemberQualified { qualifier, .. } => f.write_str(qualifier.variant_name())?,
        }
        match self.operand() {
            Some(operand) => write!(f, "({operand})"),
            None => Ok(()),
        }
    }
}

impl TypeNode {
    /// Alias name bound to this node in generated sources.
    pub fn alias(&self) -> String {
        alias_name(self.depth())
    }

    /// English description, e.g. "pointer to array of 5 const ints".
    ///
    /// `plural` is forwarded through cv-qualifiers, forced on by arrays
    /// and ignored by functions.
    pub fn describe(&self, plural: bool) -> String {
        let s = if plural { "s" } else { "" };
        match self.kind() {
            TypeKind::Basic(name) => format!("{name}{s}"),
            TypeKind::CvQualified { quals, operand } => {
                format!("{} {}", quals.keyword(), operand.describe(plural))
            }
            TypeKind::Pointer(operand) => format!("pointer{s} to {}", operand.describe(false)),
            TypeKind::PointerActingAsArray { extent, operand } => {
                let from = match extent {
                    ArrayExtent::Unsized => String::from("array"),
                    ArrayExtent::Sized(n) => format!("array of {n}"),
                };
                format!("pointer{s} (decayed from {from}) to {}", operand.describe(false))
            }
            TypeKind::LValueReference(operand) => {
                format!("lvalue reference{s} to {}", operand.describe(false))
            }
            TypeKind::RValueReference(operand) => {
                format!("rvalue reference{s} to {}", operand.describe(false))
            }
            TypeKind::PointerToMember(operand) => format!(
                "pointer{s} to member of {MEMBER_CLASS} of type {}",
                operand.describe(false)
            ),
            TypeKind::Array { extent, element } => match extent {
                ArrayExtent::Unsized => format!("array{s} of {}", element.describe(true)),
                ArrayExtent::Sized(n) => format!("array{s} of {n} {}", element.describe(true)),
            },
            TypeKind::Function { signature, operand } => {
                if signature.arity == 0 && !signature.variadic {
                    return format!("function with no arguments returning {}", operand.describe(false));
                }
                match signature.position {
                    OperandPosition::Return => format!(
                        "function with arguments ({}) returning {}",
                        signature.parameters("", FILLER_ARGUMENT),
                        operand.describe(false)
                    ),
                    OperandPosition::Argument { .. } => format!(
                        "function with arguments ({}) returning {FILLER_RETURN}",
                        signature.parameters(&operand.describe(false), FILLER_ARGUMENT)
                    ),
                }
            }
            TypeKind::MemberQualified { qualifier, operand } => {
                format!("{} {}", qualifier.description_prefix(), operand.describe(plural))
            }
        }
    }

    /// Spelling of this construction step in terms of the operand's alias,
    /// e.g. `A1 const`, `A1(char, char)`, `void(char, A1)`.
    ///
    /// Member qualifiers cannot be added to an alias of a function type, so
    /// a member-qualified node spells its whole qualifier chain after the
    /// underlying function's parameter list instead.
    pub fn definition(&self) -> String {
        let alias = self.operand().map(TypeNode::alias).unwrap_or_default();
        match self.kind() {
            TypeKind::Basic(name) => name.clone(),
            TypeKind::CvQualified { quals, .. } => format!("{alias} {}", quals.keyword()),
            TypeKind::Pointer(_) | TypeKind::PointerActingAsArray { .. } => format!("{alias}*"),
            TypeKind::LValueReference(_) => format!("{alias}&"),
            TypeKind::RValueReference(_) => format!("{alias}&&"),
            TypeKind::PointerToMember(_) => format!("{alias} {MEMBER_CLASS}::*"),
            TypeKind::Array { extent, .. } => format!("{alias}[{extent}]"),
            TypeKind::Function { signature, .. } => match signature.position {
                OperandPosition::Return => {
                    format!("{alias}({})", signature.parameters("", FILLER_ARGUMENT))
                }
                OperandPosition::Argument { .. } => format!(
                    "{FILLER_RETURN}({})",
                    signature.parameters(&alias, FILLER_ARGUMENT)
                ),
            },
            TypeKind::MemberQualified { .. } => {
                let quals = self.member_qualifiers().unwrap_or_default();
                format!("{}{}", self.underlying_function().definition(), quals.suffix())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CvQualifiers, MemberQualifier};
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    fn int() -> TypeNode {
        TypeNode::basic("int")
    }

    #[test]
    fn test_structural_display() {
        let ty = TypeNode::function_taking(
            2,
            1,
            true,
            TypeNode::const_(TypeNode::sized_array(5, int())),
        );
        assert_eq!(
            ty.to_string(),
            r#"Function2ArgVariadic@2(Const(SizedArray[5](BasicType("int"))))"#
        );
        let qualified = TypeNode::member_qualified(
            MemberQualifier::LValueRef,
            TypeNode::function_returning(0, false, TypeNode::unsized_array(int())),
        );
        assert_eq!(
            qualified.to_string(),
            r#"LValueRefQualified(Function0Ret(UnsizedArray(BasicType("int"))))"#
        );
        assert_eq!(
            TypeNode::cv_qualified(CvQualifiers::all(), int()).to_string(),
            r#"ConstVolatile(BasicType("int"))"#
        );
    }

    #[test]
    fn test_descriptions() {
        let ty = TypeNode::pointer(TypeNode::sized_array(5, TypeNode::const_(int())));
        assert_eq!(ty.describe(false), "pointer to array of 5 const ints");

        let nested = TypeNode::sized_array(4, TypeNode::sized_array(5, TypeNode::pointer(int())));
        assert_eq!(nested.describe(false), "array of 4 arrays of 5 pointers to int");

        let function = TypeNode::function_returning(0, false, TypeNode::pointer(int()));
        assert_eq!(function.describe(false), "function with no arguments returning pointer to int");

        let taking = TypeNode::function_taking(2, 0, true, TypeNode::lvalue_reference(int()));
        assert_eq!(
            taking.describe(false),
            "function with arguments (lvalue reference to int, char, ...) returning void"
        );

        let member = TypeNode::pointer_to_member(TypeNode::member_qualified(
            MemberQualifier::Const,
            TypeNode::function_returning(1, false, int()),
        ));
        assert_eq!(
            member.describe(false),
            "pointer to member of C of type const-qualified function with arguments (char) returning int"
        );
    }

    #[test]
    fn test_definitions_use_operand_alias() {
        let one = TypeNode::const_(int());
        assert_eq!(one.alias(), "A1");
        assert_eq!(one.definition(), "A0 const");
        assert_eq!(TypeNode::pointer(one.clone()).definition(), "A1*");
        assert_eq!(TypeNode::pointer_to_member(one.clone()).definition(), "A1 C::*");
        assert_eq!(TypeNode::next_sized_array(one.clone()).definition(), "A1[5]");
        assert_eq!(
            TypeNode::function_returning(2, false, one.clone()).definition(),
            "A1(char, char)"
        );
        assert_eq!(
            TypeNode::function_taking(2, 1, true, one).definition(),
            "void(char, A1, ...)"
        );
    }

    #[test]
    fn test_member_qualified_definition_spells_whole_chain() {
        let ty = TypeNode::member_qualified(
            MemberQualifier::Const,
            TypeNode::member_qualified(
                MemberQualifier::LValueRef,
                TypeNode::function_returning(1, false, int()),
            ),
        );
        assert_eq!(ty.alias(), "A3");
        assert_eq!(ty.definition(), "A0(char) const &");
    }

    #[test]
    fn test_member_qualified_definition_skips_cv_layers() {
        let ty = TypeNode::member_qualified(
            MemberQualifier::Const,
            TypeNode::const_(TypeNode::function_returning(2, false, int())),
        );
        assert_eq!(ty.alias(), "A3");
        assert_eq!(ty.definition(), "A0(char, char) const");
    }
}
