//! Declaration extraction and type-extension tests.

use costlens_analysis::scanner::{Position, RegexScanner, SourceScanner, TypeExtensionMap};

fn scanner() -> RegexScanner {
    RegexScanner::new().unwrap()
}

fn keys(source: &str) -> Vec<String> {
    scanner()
        .extract(source)
        .iter()
        .map(|d| d.identity().key())
        .collect()
}

/// Declarations come back in source order with their name and types.
#[test]
fn test_declarations_in_source_order() {
    let source = r#"
public class Orders {
    public void run() {
        process(items);
    }

    private static int count(List<Order> orders, int limit) {
        return orders.size();
    }

    @Override
    public String toString() {
        return "Orders";
    }
}
"#;
    assert_eq!(keys(source), vec!["run()", "count(List,int)", "toString()"]);
}

/// An empty parameter list yields an empty type list, never `[""]`.
#[test]
fn test_empty_parameter_list() {
    let decls = scanner().extract("  void tick() {}\n  void idle(   ) {}\n");
    assert_eq!(decls.len(), 2);
    assert!(decls.iter().all(|d| d.parameter_types.is_empty()));
}

/// Ranges are zero-based and the name range sits inside the declaration.
#[test]
fn test_ranges() {
    let source = "class A {\n  void foo(int x) {\n  }\n}\n";
    let decls = scanner().extract(source);
    assert_eq!(decls.len(), 1);
    let decl = &decls[0];

    assert_eq!(decl.declaration_range.start, Position { line: 1, character: 2 });
    assert_eq!(decl.declaration_range.end, Position { line: 1, character: 17 });
    assert_eq!(decl.name_range.start, Position { line: 1, character: 7 });
    assert_eq!(decl.name_range.end, Position { line: 1, character: 10 });
    assert_eq!(&source[decl.span.clone()], "void foo(int x)");
}

/// Annotations are part of the declaration range.
#[test]
fn test_annotation_starts_declaration() {
    let source = "  @Override\n  public int hashCode() {\n";
    let decls = scanner().extract(source);
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].declaration_range.start, Position { line: 0, character: 2 });
    assert_eq!(decls[0].name_range.start.line, 1);
}

/// Class-level bounds are substituted into parameter types.
#[test]
fn test_class_bound_substitution() {
    let source = "class Box<A extends Number> {\n  void put(A a, A[] more) {\n  }\n}\n";
    let types = scanner().type_extensions(source);
    assert_eq!(types.resolve("A"), Some("Number"));
    assert_eq!(keys(source), vec!["put(Number,Number[])"]);
}

/// Method-level generics resolve that method's own parameters.
#[test]
fn test_method_generics() {
    let source = "class Sorter<A extends CharSequence> {\n    public static <T extends Comparable<T>> void sort(T[] items, A key) {\n    }\n}\n";
    assert_eq!(keys(source), vec!["sort(Comparable[],CharSequence)"]);
}

/// Intersection bounds are left unresolved rather than guessed.
#[test]
fn test_intersection_bound_unresolved() {
    let source = "class Multi<A extends Runnable & Closeable> {\n  void take(A a) {\n  }\n}\n";
    let types = scanner().type_extensions(source);
    assert!(types.is_unresolved("A"));
    assert_eq!(keys(source), vec!["take(A)"]);
}

/// Nested generic arguments with commas stay one parameter.
#[test]
fn test_nested_generic_commas() {
    let source = "  public List<String> names(Map<String, List<Integer>> index, int n) {\n";
    assert_eq!(keys(source), vec!["names(Map,int)"]);
}

/// Varargs and C-style arrays normalize to `T[]`.
#[test]
fn test_varargs_and_arrays() {
    let source = "  void log(String fmt, Object... args) {\n  void fill(int a[], char ...cs) {\n";
    assert_eq!(keys(source), vec!["log(String,Object[])", "fill(int[],char[])"]);
}

/// Statements and constructors are not declarations.
#[test]
fn test_statements_are_skipped() {
    let source = r#"
class A {
    A(int x) {
        this(x, 0);
    }
    void body() {
        return compute(x);
        int y = helper(x);
        else apply(y);
        new Thread(task);
        list.add(y);
    }
}
"#;
    assert_eq!(keys(source), vec!["body()"]);
}

/// Declarations scanned with an explicit map use that map's bounds.
#[test]
fn test_declarations_with_foreign_map() {
    let mut types = TypeExtensionMap::new();
    types.insert("K", "java.lang.String");
    let decls = scanner().declarations("  void get(K key) {\n", &types);
    assert_eq!(decls[0].identity().key(), "get(String)");
}

/// Stripping headers leaves bodies in place.
#[test]
fn test_strip_declarations() {
    let source = "  void foo(int x) {\n    bar();\n  }\n";
    let stripped = scanner().strip_declarations(source);
    assert_eq!(stripped, "   {\n    bar();\n  }\n");
    assert!(scanner().extract(&stripped).is_empty());
}

/// An unbounded method-level type parameter hides the class-level bound of
/// the same name; other methods still see the class bound.
#[test]
fn test_method_type_parameter_shadows_class_bound() {
    let source = "class Box<T extends Number> {\n  <T> void put(T a) {\n  }\n  void take(T a) {\n  }\n}\n";
    assert_eq!(keys(source), vec!["put(T)", "take(Number)"]);
}
