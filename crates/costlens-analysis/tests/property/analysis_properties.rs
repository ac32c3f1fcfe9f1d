use costlens_analysis::costs::{CostEntry, CostFacet, SourceLocation};
use costlens_analysis::diff::{ChangeKind, DiffProvider, LineDiff};
use costlens_analysis::history::CostHistory;
use costlens_analysis::registry::NonConstantRegistry;
use costlens_analysis::scanner::{RegexScanner, SourceScanner};
use costlens_analysis::significance::{ClassificationInput, SignificanceClassifier};
use costlens_core::config::SignificanceConfig;
use proptest::prelude::*;

const RESERVED: &[&str] = &[
    "if", "for", "while", "do", "new", "try", "this", "super", "else", "catch", "switch",
    "return", "throw", "assert", "synchronized",
];

const SOURCE_LINES: &[&str] = &[
    "class A {",
    "  void foo(int x) {",
    "  static long bar(String s, int[] xs) {",
    "    baz();",
    "    qux(x, baz(y));",
    "    for (int i = 0; i < n; i++) {",
    "    while (it.hasNext()) {",
    "    int y = x + 1;",
    "    log(y);",
    "  }",
    "}",
    "",
];

const POLYNOMIALS: &[&str] = &["1", "n", "n * n", "m"];

fn source() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(SOURCE_LINES), 0..16)
        .prop_map(|lines| lines.iter().map(|l| format!("{l}\n")).collect())
}

fn entry(polynomial: &str) -> CostEntry {
    CostEntry {
        id: "X".to_string(),
        method_name: "foo".to_string(),
        parameter_types: vec![],
        loc: SourceLocation {
            file: "A.java".to_string(),
            line: 1,
        },
        alloc_cost: CostFacet::default(),
        exec_cost: CostFacet {
            polynomial: polynomial.to_string(),
            degree: None,
            big_o: String::new(),
        },
        timestamp: None,
        change_cause_methods: None,
        trace: None,
    }
}

proptest! {
    #[test]
    fn empty_parameter_list_has_no_types(name in "[a-z][a-zA-Z0-9_]{0,10}", pad in "[ \t]{0,3}") {
        prop_assume!(!RESERVED.contains(&name.as_str()));
        let scanner = RegexScanner::new().unwrap();
        let decls = scanner.extract(&format!("  void {name}({pad}) {{\n"));
        prop_assert_eq!(decls.len(), 1);
        prop_assert!(decls[0].parameter_types.is_empty());
        prop_assert_eq!(decls[0].identity().key(), format!("{name}()"));
    }

    #[test]
    fn classification_is_idempotent(old in source(), new in source(), whitelisted in any::<bool>()) {
        let classifier = SignificanceClassifier::new().unwrap();
        let mut registry = NonConstantRegistry::new();
        registry.insert("baz");
        registry.insert("log");
        let whitelist = SignificanceConfig {
            whitelist: if whitelisted { vec!["baz".to_string()] } else { vec![] },
        };
        let types = classifier.scanner().type_extensions(&old);
        let input = ClassificationInput {
            previous: Some(old.as_str()),
            current: new.as_str(),
            registry: &registry,
            whitelist: &whitelist,
            types: &types,
        };
        let first = classifier.classify(&input);
        let second = classifier.classify(&input);
        prop_assert_eq!(&first, &second);
        if old == new {
            prop_assert!(!first.is_significant());
        }
    }

    #[test]
    fn history_orders_and_dedups(
        steps in prop::collection::vec((prop::sample::select(POLYNOMIALS), 0u64..10_000), 1..20)
    ) {
        let mut history = CostHistory::new();
        for (poly, ts) in &steps {
            history.record_at(&[entry(poly)], *ts);
        }

        let transitions = steps.windows(2).filter(|w| w[0].0 != w[1].0).count();
        let entries = history.get("X");
        prop_assert_eq!(entries.len(), transitions + 1);
        prop_assert_eq!(entries[0].exec_cost.polynomial.as_str(), steps[steps.len() - 1].0);
        for pair in entries.windows(2) {
            prop_assert_ne!(&pair[0].exec_cost.polynomial, &pair[1].exec_cost.polynomial);
            prop_assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn diff_rebuilds_both_sides(
        old in prop::collection::vec("[a-c]{0,2}", 0..12),
        new in prop::collection::vec("[a-c]{0,2}", 0..12),
    ) {
        let old: String = old.iter().map(|l| format!("{l}\n")).collect();
        let new: String = new.iter().map(|l| format!("{l}\n")).collect();
        let segments = LineDiff.diff_lines(&old, &new);

        let side = |keep: ChangeKind| -> String {
            segments
                .iter()
                .filter(|s| s.kind == ChangeKind::Unchanged || s.kind == keep)
                .map(|s| s.text.as_str())
                .collect()
        };
        prop_assert_eq!(side(ChangeKind::Added), new);
        prop_assert_eq!(side(ChangeKind::Removed), old);
        prop_assert!(segments.windows(2).all(|w| w[0].kind != w[1].kind));
    }
}
