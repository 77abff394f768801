//! Declarator synthesis.
//!
//! A declarator is built inside out: each node receives the text already
//! produced by its parents (`inner`) and wraps it before handing it to its
//! operand. Pointers and references prefix `inner`, arrays and parameter
//! lists suffix it, and the terminal finally puts its name in front.

use super::{
    CvStyle, FILLER_ARGUMENT, FILLER_RETURN, MEMBER_CLASS, MemberQualifiers, TypeKind, TypeNode,
};
use alloc::format;
use alloc::string::String;

struct Declarator {
    style: CvStyle,
}

impl Declarator {
    fn render(&self, node: &TypeNode, inner: String) -> String {
        match node.kind() {
            TypeKind::Basic(name) => format!("{name}{inner}"),

            TypeKind::CvQualified { quals, operand } => match (self.style, operand.kind()) {
                (CvStyle::West, TypeKind::Basic(name)) => {
                    format!("{} {name}{inner}", quals.keyword())
                }
                (CvStyle::West, _) => self.render(operand, format!("{}{inner}", quals.keyword())),
                (CvStyle::East, _) => self.render(operand, format!(" {}{inner}", quals.keyword())),
            },

            TypeKind::Pointer(operand) | TypeKind::PointerActingAsArray { operand, .. } => {
                self.indirect(operand, "*", inner)
            }
            TypeKind::LValueReference(operand) => self.indirect(operand, "&", inner),
            TypeKind::RValueReference(operand) => self.indirect(operand, "&&", inner),

            TypeKind::PointerToMember(operand) => {
                if operand.is_array() || operand.is_function() {
                    self.render(operand, format!("({MEMBER_CLASS}::*{inner})"))
                } else {
                    self.render(operand, format!(" {MEMBER_CLASS}::*{inner}"))
                }
            }

            TypeKind::Array { extent, element } => {
                self.render(element, format!("{inner}[{extent}]"))
            }

            TypeKind::Function { .. } => self.function(node, MemberQualifiers::empty(), inner),

            TypeKind::MemberQualified { .. } => {
                let quals = node.member_qualifiers().unwrap_or_default();
                self.function(node.underlying_function(), quals, inner)
            }
        }
    }

    fn indirect(&self, operand: &TypeNode, token: &str, inner: String) -> String {
        if operand.is_array() || operand.is_function() {
            self.render(operand, format!("({token}{inner})"))
        } else {
            self.render(operand, format!("{token}{inner}"))
        }
    }

    fn function(&self, node: &TypeNode, quals: MemberQualifiers, inner: String) -> String {
        let TypeKind::Function { signature, operand } = node.kind() else {
            return self.render(node, inner);
        };
        if signature.is_argument() {
            let param = self.render(operand, String::new());
            let params = signature.parameters(&param, FILLER_ARGUMENT);
            format!("{FILLER_RETURN}{inner}({params}){}", quals.suffix())
        } else {
            let params = signature.parameters("", FILLER_ARGUMENT);
            self.render(operand, format!("{inner}({params}){}", quals.suffix()))
        }
    }
}

impl TypeNode {
    /// Abstract declarator naming this type.
    ///
    /// Meant for normalized trees; a raw tree is spelled node by node and
    /// may not be a valid declarator.
    pub fn declare(&self, style: CvStyle) -> String {
        Declarator { style }.render(self, String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayExtent, CompositionPolicy, CvQualifiers, MemberQualifier};
    use pretty_assertions::assert_eq;

    fn int() -> TypeNode {
        TypeNode::basic("int")
    }

    fn west(node: &TypeNode) -> String {
        node.declare(CvStyle::West)
    }

    fn east(node: &TypeNode) -> String {
        node.declare(CvStyle::East)
    }

    #[test]
    fn test_cv_styles() {
        let cv_int = TypeNode::cv_qualified(CvQualifiers::all(), int());
        assert_eq!(west(&cv_int), "const volatile int");
        assert_eq!(east(&cv_int), "int const volatile");

        let ty = TypeNode::pointer(TypeNode::const_(TypeNode::pointer(TypeNode::const_(int()))));
        assert_eq!(west(&ty), "const int*const*");
        assert_eq!(east(&ty), "int const* const*");
    }

    #[test]
    fn test_indirection_is_parenthesized_before_suffix() {
        let ptr_to_array = TypeNode::pointer(TypeNode::sized_array(4, TypeNode::sized_array(5, int())));
        assert_eq!(west(&ptr_to_array), "int(*)[4][5]");

        let array_of_ptrs = TypeNode::sized_array(5, TypeNode::pointer(int()));
        assert_eq!(west(&array_of_ptrs), "int*[5]");

        let ref_to_fn = TypeNode::rvalue_reference(TypeNode::function_returning(2, true, int()));
        assert_eq!(west(&ref_to_fn), "int(&&)(char, char, ...)");

        let returns_ptr_to_fn = TypeNode::function_returning(
            0,
            false,
            TypeNode::pointer(TypeNode::function_returning(1, false, int())),
        );
        assert_eq!(west(&returns_ptr_to_fn), "int(*())(char)");
    }

    #[test]
    fn test_function_returning_reference_to_array() {
        let ty = TypeNode::function_returning(
            0,
            false,
            TypeNode::lvalue_reference(TypeNode::unsized_array(int())),
        );
        assert_eq!(west(&ty), "int(&())[]");
    }

    #[test]
    fn test_argument_position_functions() {
        let ty = TypeNode::function_taking(2, 1, true, TypeNode::pointer(int()));
        assert_eq!(west(&ty), "void(char, int*, ...)");

        let decayed = TypeNode::function_taking(
            1,
            0,
            false,
            TypeNode::pointer_acting_as_array(ArrayExtent::Sized(4), TypeNode::sized_array(5, int())),
        );
        assert_eq!(west(&decayed), "void(int(*)[5])");
    }

    #[test]
    fn test_pointer_to_member() {
        assert_eq!(west(&TypeNode::pointer_to_member(int())), "int C::*");

        let member_fn = TypeNode::pointer_to_member(TypeNode::member_qualified(
            MemberQualifier::RValueRef,
            TypeNode::member_qualified(
                MemberQualifier::Const,
                TypeNode::function_returning(1, false, int()),
            ),
        ));
        assert_eq!(west(&member_fn), "int(C::*)(char) const &&");

        let to_array = TypeNode::pointer_to_member(TypeNode::sized_array(5, int()));
        assert_eq!(west(&to_array), "int(C::*)[5]");
    }

    #[test]
    fn test_member_qualifier_over_qualified_function() {
        let ty = TypeNode::member_qualified(
            MemberQualifier::Const,
            TypeNode::const_(TypeNode::function_returning(2, false, int())),
        );
        let canonical = ty.normalize(&CompositionPolicy::default());
        assert_eq!(west(&canonical), "int(char, char) const");
    }

    #[test]
    fn test_const_member_function_returning_const() {
        let ty = TypeNode::member_qualified(
            MemberQualifier::Const,
            TypeNode::function_returning(2, false, TypeNode::const_(int())),
        );
        let canonical = ty.normalize(&CompositionPolicy::default());
        assert_eq!(west(&canonical), "const int(char, char) const");
    }
}
