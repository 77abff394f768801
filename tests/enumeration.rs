use declgen::{
    Budget, Generator, GeneratorOptions, OperationKind, Outcome, RecordingSink, TypeKind,
};
use pretty_assertions::assert_eq;

#[test]
fn test_default_run_stops_at_node_budget() {
    let mut generator = Generator::new(GeneratorOptions::default()).unwrap();
    let mut sink = RecordingSink::new();
    let summary = generator.run(&mut sink).unwrap();

    assert_eq!(summary.visited, 7200);
    assert_eq!(summary.halted, Some(Budget::Nodes));
    assert!(summary.duplicates > 0);
    assert!(summary.disallowed > 0);
    assert!(summary.pruned > 0);
    assert_eq!(summary.fresh + summary.duplicates, summary.visited);
}

#[test]
fn test_first_cases_of_default_run() {
    let mut generator = Generator::new(GeneratorOptions {
        node_budget: 4,
        ..Default::default()
    })
    .unwrap();
    let mut sink = RecordingSink::new();
    generator.run(&mut sink).unwrap();

    let lines: Vec<&str> = sink.lines().collect();
    assert_eq!(
        lines,
        [
            r#"// #1 Const(BasicType("int"))"#,
            "using A1 = A0 const; // const int",
            "assert((std::is_same<A1, const int>::value));",
            r#"assert(typedecl<A1>() == "const int");"#,
            r#"// #2 Volatile(Const(BasicType("int"))) => ConstVolatile(BasicType("int"))"#,
            "using A2 = A1 volatile; // volatile const int",
            "assert((std::is_same<A2, const volatile int>::value));",
            r#"assert(typedecl<A2>() == "const volatile int");"#,
            r#"// #3 Pointer(Volatile(Const(BasicType("int")))) => Pointer(ConstVolatile(BasicType("int")))"#,
            "using A3 = A2*; // pointer to volatile const int",
            "assert((std::is_same<A3, const volatile int*>::value));",
            r#"assert(typedecl<A3>() == "const volatile int*");"#,
            r#"// #4 Const(Pointer(Volatile(Const(BasicType("int"))))) => Const(Pointer(ConstVolatile(BasicType("int"))))"#,
            "using A4 = A3 const; // const pointer to volatile const int",
            "assert((std::is_same<A4, const volatile int*const>::value));",
            r#"assert(typedecl<A4>() == "const volatile int*const");"#,
        ]
    );
}

#[test]
fn test_custom_seed_and_operations() {
    let mut generator = Generator::new(GeneratorOptions {
        seed: "char".into(),
        max_depth: 2,
        operations: vec![OperationKind::SizedArray, OperationKind::Pointer],
        ..Default::default()
    })
    .unwrap();
    let mut sink = RecordingSink::new();
    let summary = generator.run(&mut sink).unwrap();

    let declarators: Vec<&str> = sink
        .cases()
        .iter()
        .filter_map(|case| case.declarator())
        .collect();
    assert_eq!(
        declarators,
        ["char[5]", "char[4][5]", "char(*)[5]", "char*", "char*[5]", "char**"]
    );
    assert_eq!(summary.halted, None);
}

#[test]
fn test_essential_variations_keep_one_representative() {
    let mut generator = Generator::new(GeneratorOptions {
        max_depth: 3,
        essential_variations: true,
        ..Default::default()
    })
    .unwrap();
    let mut sink = RecordingSink::new();
    generator.run(&mut sink).unwrap();

    assert_eq!(
        generator.operations().len(),
        GeneratorOptions::default_operations().len() - 3
    );
    for case in sink.cases() {
        assert!(!matches!(
            case.node.kind(),
            TypeKind::RValueReference(_)
        ));
        if let TypeKind::CvQualified { quals, .. } = case.node.kind() {
            assert!(quals.contains(declgen::algebra::CvQualifiers::CONST));
        }
    }
}

#[test]
fn test_duplicates_point_backwards() {
    let mut generator = Generator::new(GeneratorOptions {
        max_depth: 3,
        ..Default::default()
    })
    .unwrap();
    let mut sink = RecordingSink::new();
    generator.run(&mut sink).unwrap();

    for case in sink.cases() {
        if let Outcome::Duplicate { first_index } = case.outcome {
            assert!(first_index < case.index);
            let first = &sink.cases()[first_index - 1];
            assert_eq!(first.index, first_index);
            assert_eq!(first.canonical, case.canonical);
        }
    }
}
