use declgen::{CvStyle, OperationKind, Rejection, Verdict};
use once_cell::sync::Lazy;

pub enum Expected {
    /// The construction is accepted and its canonical form declares as this.
    Declares(&'static str),
    /// Some step of the construction is rejected with this verdict.
    Rejected(Verdict),
}

pub struct ScenarioCase {
    pub name: &'static str,
    /// Operations applied to `int`, innermost first.
    pub ops: Vec<OperationKind>,
    pub cv_style: CvStyle,
    pub expected: Expected,
}

pub static SCENARIOS: Lazy<Vec<ScenarioCase>> = Lazy::new(|| {
    use OperationKind::*;
    vec![
        ScenarioCase {
            name: "nested_const_volatile",
            ops: vec![Const, Volatile],
            cv_style: CvStyle::East,
            expected: Expected::Declares("int const volatile"),
        },
        ScenarioCase {
            name: "const_member_function_returning_const",
            ops: vec![Const, Function2Ret, ConstQualified],
            cv_style: CvStyle::West,
            expected: Expected::Declares("const int(char, char) const"),
        },
        ScenarioCase {
            name: "function_returning_reference_to_unsized_array",
            ops: vec![UnsizedArray, LValueReference, Function0Ret],
            cv_style: CvStyle::West,
            expected: Expected::Declares("int(&())[]"),
        },
        ScenarioCase {
            name: "array_of_unsized_array",
            ops: vec![UnsizedArray, SizedArray],
            cv_style: CvStyle::West,
            expected: Expected::Rejected(Verdict::Disallow(Rejection::ArrayOfUnsizedArrays)),
        },
        ScenarioCase {
            name: "third_pointer_level",
            ops: vec![Pointer, Pointer, Pointer],
            cv_style: CvStyle::West,
            expected: Expected::Rejected(Verdict::Prune(Rejection::IndirectionLimit)),
        },
        ScenarioCase {
            name: "const_parameter",
            ops: vec![Const, Function1Arg],
            cv_style: CvStyle::West,
            expected: Expected::Declares("void(int)"),
        },
        ScenarioCase {
            name: "pointer_to_reference",
            ops: vec![LValueReference, Pointer],
            cv_style: CvStyle::West,
            expected: Expected::Rejected(Verdict::Disallow(Rejection::ModifiesReference)),
        },
        ScenarioCase {
            name: "function_returning_array",
            ops: vec![SizedArray, Function1Ret],
            cv_style: CvStyle::West,
            expected: Expected::Rejected(Verdict::Disallow(Rejection::ReturnsArrayOrFunction)),
        },
        ScenarioCase {
            name: "parameter_pointing_to_unbounded_array",
            ops: vec![UnsizedArray, Pointer, Function2ArgSlot2],
            cv_style: CvStyle::West,
            expected: Expected::Rejected(Verdict::Disallow(Rejection::UnboundedArrayParameter)),
        },
        ScenarioCase {
            name: "pointer_to_qualified_member_function",
            ops: vec![Function0Ret, LValueRefQualified, Pointer],
            cv_style: CvStyle::West,
            expected: Expected::Rejected(Verdict::Disallow(Rejection::IndirectQualifiedFunction)),
        },
        ScenarioCase {
            name: "member_pointer_to_ref_qualified_function",
            ops: vec![Function1RetVariadic, RValueRefQualified, ConstQualified, PointerToMember],
            cv_style: CvStyle::West,
            expected: Expected::Declares("int(C::*)(char, ...) const &&"),
        },
        ScenarioCase {
            name: "array_parameter_decays",
            ops: vec![Volatile, SizedArray, Const, Function1ArgVariadic],
            cv_style: CvStyle::East,
            expected: Expected::Declares("void(int const volatile*, ...)"),
        },
        ScenarioCase {
            name: "function_parameter_decays",
            ops: vec![Function0Ret, Const, Function2ArgSlot1],
            cv_style: CvStyle::West,
            expected: Expected::Declares("void(int(*)(), char)"),
        },
        ScenarioCase {
            name: "pointer_to_array_of_const_pointers",
            ops: vec![Pointer, Const, SizedArray, SizedArray, Pointer],
            cv_style: CvStyle::West,
            expected: Expected::Declares("int*const(*)[4][5]"),
        },
        ScenarioCase {
            name: "member_qualifier_on_qualified_function",
            ops: vec![Function2Ret, Const, ConstQualified],
            cv_style: CvStyle::West,
            expected: Expected::Declares("int(char, char) const"),
        },
        ScenarioCase {
            name: "array_of_pointers_to_unsized_array",
            ops: vec![UnsizedArray, Pointer, SizedArray],
            cv_style: CvStyle::West,
            expected: Expected::Rejected(Verdict::Prune(Rejection::ArrayOverUnsizedArray)),
        },
    ]
});
