//! Generation policy consulted by legality checks, normalization and
//! declarator synthesis.

/// Where object cv-qualifiers are spelled in a declarator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CvStyle {
    /// `const int`, `int*const`: qualifiers of a basic type lead, others
    /// attach to the preceding token.
    #[default]
    West,
    /// `int const`, `int* const`: every qualifier trails its operand.
    East,
}

/// Knobs that trade coverage against the size of the composition space.
///
/// None of these change which types are legal; they decide which legal
/// constructions are skipped (pruned) or how they are spelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositionPolicy {
    /// Prune constructions that normalization would erase anyway
    /// (cv-qualifying a function, top-level cv on a non-array parameter).
    pub prune_insignificant: bool,

    /// Keep volatile member qualification only on top of const.
    pub essential_variations: bool,

    /// Pointer levels (pointers and pointers-to-member) allowed in a chain.
    pub max_pointer_levels: usize,

    /// Array dimensions allowed in one declarator.
    pub max_array_dimensions: usize,

    /// Drop ref-qualifiers of member functions named through a
    /// pointer-to-member.
    pub elide_member_ref_qualifiers: bool,

    pub cv_style: CvStyle,
}

impl Default for CompositionPolicy {
    fn default() -> Self {
        Self {
            prune_insignificant: false,
            essential_variations: false,
            max_pointer_levels: 2,
            max_array_dimensions: 3,
            elide_member_ref_qualifiers: false,
            cv_style: CvStyle::West,
        }
    }
}
