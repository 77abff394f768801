//! Qualifier sets for the algebra.
//!
//! Object cv-qualifiers and member-function qualifiers are kept as bitsets so
//! that merging two qualifier layers is a union and picking the variant that
//! represents a combination is a plain match on the set.

use alloc::string::String;
use bitflags::bitflags;

bitflags! {
    /// cv-qualifiers applied to an object type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct CvQualifiers: u8 {
        const CONST = 1 << 0;
        const VOLATILE = 1 << 1;
    }
}

impl CvQualifiers {
    /// Keyword sequence as written in a declarator.
    pub fn keyword(self) -> &'static str {
        match (self.contains(Self::CONST), self.contains(Self::VOLATILE)) {
            (true, true) => "const volatile",
            (true, false) => "const",
            (false, true) => "volatile",
            (false, false) => "",
        }
    }

    /// Name of the node variant representing this combination.
    pub fn variant_name(self) -> &'static str {
        match (self.contains(Self::CONST), self.contains(Self::VOLATILE)) {
            (true, true) => "ConstVolatile",
            (true, false) => "Const",
            (false, true) => "Volatile",
            (false, false) => "Unqualified",
        }
    }
}

/// A single member-function qualifier, as carried by one node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemberQualifier {
    Const,
    Volatile,
    LValueRef,
    RValueRef,
}

impl MemberQualifier {
    /// Order in which qualifiers are spelled after a parameter list.
    pub const CANONICAL_ORDER: [MemberQualifier; 4] = [
        MemberQualifier::Const,
        MemberQualifier::Volatile,
        MemberQualifier::LValueRef,
        MemberQualifier::RValueRef,
    ];

    pub fn flag(self) -> MemberQualifiers {
        match self {
            MemberQualifier::Const => MemberQualifiers::CONST,
            MemberQualifier::Volatile => MemberQualifiers::VOLATILE,
            MemberQualifier::LValueRef => MemberQualifiers::LVALUE_REF,
            MemberQualifier::RValueRef => MemberQualifiers::RVALUE_REF,
        }
    }

    /// Token appended after the parameter list.
    pub fn token(self) -> &'static str {
        match self {
            MemberQualifier::Const => "const",
            MemberQualifier::Volatile => "volatile",
            MemberQualifier::LValueRef => "&",
            MemberQualifier::RValueRef => "&&",
        }
    }

    pub fn variant_name(self) -> &'static str {
        match self {
            MemberQualifier::Const => "ConstQualified",
            MemberQualifier::Volatile => "VolatileQualified",
            MemberQualifier::LValueRef => "LValueRefQualified",
            MemberQualifier::RValueRef => "RValueRefQualified",
        }
    }

    /// Prefix used in English descriptions ("const-qualified function ...").
    pub fn description_prefix(self) -> &'static str {
        match self {
            MemberQualifier::Const => "const-qualified",
            MemberQualifier::Volatile => "volatile-qualified",
            MemberQualifier::LValueRef => "lvalue-ref-qualified",
            MemberQualifier::RValueRef => "rvalue-ref-qualified",
        }
    }

    pub fn is_ref(self) -> bool {
        matches!(self, MemberQualifier::LValueRef | MemberQualifier::RValueRef)
    }
}

bitflags! {
    /// Collected qualifiers of a (possibly qualified) member function type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct MemberQualifiers: u8 {
        const CONST = 1 << 0;
        const VOLATILE = 1 << 1;
        const LVALUE_REF = 1 << 2;
        const RVALUE_REF = 1 << 3;

        const REF = Self::LVALUE_REF.bits() | Self::RVALUE_REF.bits();
    }
}

impl MemberQualifiers {
    /// Qualifiers in the set, innermost (first spelled) first.
    pub fn canonical_order(self) -> impl Iterator<Item = MemberQualifier> {
        MemberQualifier::CANONICAL_ORDER
            .into_iter()
            .filter(move |q| self.contains(q.flag()))
    }

    /// Suffix spelled after a parameter list, e.g. `" const &"`.
    pub fn suffix(self) -> String {
        let mut out = String::new();
        for qualifier in self.canonical_order() {
            out.push(' ');
            out.push_str(qualifier.token());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_keywords() {
        assert_eq!(CvQualifiers::CONST.keyword(), "const");
        assert_eq!(CvQualifiers::VOLATILE.keyword(), "volatile");
        assert_eq!(CvQualifiers::all().keyword(), "const volatile");
        assert_eq!((CvQualifiers::VOLATILE | CvQualifiers::CONST).variant_name(), "ConstVolatile");
    }

    #[test]
    fn test_member_suffix_is_canonical() {
        let quals = MemberQualifiers::RVALUE_REF | MemberQualifiers::VOLATILE | MemberQualifiers::CONST;
        assert_eq!(quals.suffix(), " const volatile &&");
        assert_eq!(MemberQualifiers::empty().suffix(), "");
    }
}
