//! Regex-backed [`SourceScanner`].

use regex::Regex;

use costlens_core::errors::ScannerError;

use super::line_index::LineIndex;
use super::occurrences::scan_occurrences;
use super::params::parse_parameter_types;
use super::type_extensions::TypeExtensionMap;
use super::types::{MethodDeclaration, Occurrence};
use super::SourceScanner;

/// Method header: annotations, modifiers, an optional generic prefix, a
/// return type, the name and a parenthesized parameter list. Anchored at a
/// line start so statements inside bodies rarely match.
pub(crate) const METHOD_HEADER_PATTERN: &str = concat!(
    r"(?m)^[ \t]*(?P<decl>",
    r"(?:@[\w$.]+(?:\([^()]*\))?\s+)*",
    r"(?:(?:public|private|protected|static|final|abstract|synchronized|native|default|strictfp)\s+)*",
    r"(?:<(?P<generics>[^<>]*(?:<[^<>]*(?:<[^<>]*>[^<>]*)*>[^<>]*)*)>\s*)?",
    r"(?P<ret>[\w$.]+(?:\s*<[^()]*?>)?(?:\s*\[\s*\])*)\s+",
    r"(?P<name>[\w$]+)\s*",
    r"\((?P<params>[^()]*)\))",
);

/// Class-like header followed by a generic parameter list.
pub(crate) const CLASS_HEADER_PATTERN: &str =
    r"\b(?:class|interface|enum|record)\s+[\w$]+\s*<";

/// An identifier directly followed by an opening parenthesis.
pub(crate) const CALL_HEAD_PATTERN: &str = r"[A-Za-z_$][\w$]*\s*\(";

/// Tokens that can sit in the return-type slot only when the match is not
/// a method declaration: constructors (`public Foo(`) and statements
/// (`return foo(`, `new Foo(`).
const NON_TYPE_TOKENS: &[&str] = &[
    "public",
    "private",
    "protected",
    "static",
    "final",
    "abstract",
    "synchronized",
    "native",
    "default",
    "strictfp",
    "return",
    "new",
    "else",
    "throw",
    "case",
    "do",
    "yield",
    "await",
    "goto",
    "assert",
    "package",
    "import",
];

/// Names that are control flow, never methods.
const NON_METHOD_NAMES: &[&str] = &[
    "if",
    "switch",
    "while",
    "for",
    "catch",
    "synchronized",
    "return",
    "new",
    "else",
    "try",
    "do",
    "super",
    "this",
    "assert",
    "throw",
];

/// Structural-pattern scanner for C-family sources.
#[derive(Debug, Clone)]
pub struct RegexScanner {
    method_header: Regex,
    class_header: Regex,
    call_head: Regex,
}

impl RegexScanner {
    pub fn new() -> Result<Self, ScannerError> {
        Ok(Self {
            method_header: compile("method_header", METHOD_HEADER_PATTERN)?,
            class_header: compile("class_header", CLASS_HEADER_PATTERN)?,
            call_head: compile("call_head", CALL_HEAD_PATTERN)?,
        })
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, ScannerError> {
    Regex::new(pattern).map_err(|e| ScannerError::PatternCompilation {
        name,
        message: e.to_string(),
    })
}

impl SourceScanner for RegexScanner {
    fn type_extensions(&self, text: &str) -> TypeExtensionMap {
        let mut map = TypeExtensionMap::new();
        for m in self.class_header.find_iter(text) {
            let open = m.end() - 1;
            if let Some(generics) = angle_group(text, open) {
                map.record_parameter_list(generics);
            }
        }
        map
    }

    fn declarations(&self, text: &str, types: &TypeExtensionMap) -> Vec<MethodDeclaration> {
        let index = LineIndex::new(text);
        let mut declarations = Vec::new();

        for caps in self.method_header.captures_iter(text) {
            let (Some(decl), Some(ret), Some(name), Some(params)) = (
                caps.name("decl"),
                caps.name("ret"),
                caps.name("name"),
                caps.name("params"),
            ) else {
                continue;
            };
            if NON_TYPE_TOKENS.contains(&ret.as_str())
                || NON_METHOD_NAMES.contains(&name.as_str())
            {
                continue;
            }

            let parameter_types = match caps.name("generics") {
                Some(generics) => {
                    let mut local = TypeExtensionMap::new();
                    local.record_scoped_parameter_list(generics.as_str());
                    parse_parameter_types(params.as_str(), &types.overlay(&local))
                }
                None => parse_parameter_types(params.as_str(), types),
            };

            declarations.push(MethodDeclaration {
                name: name.as_str().to_string(),
                parameter_types,
                declaration_range: index.range(decl.range()),
                name_range: index.range(name.range()),
                span: decl.range(),
            });
        }

        tracing::trace!(count = declarations.len(), "declarations extracted");
        declarations
    }

    fn occurrences(&self, text: &str) -> Vec<Occurrence> {
        scan_occurrences(&self.call_head, text)
    }
}

/// Contents of the balanced `<...>` group opening at `open`.
fn angle_group(text: &str, open: usize) -> Option<&str> {
    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[open + 1..open + i]);
                }
            }
            '{' | ';' => return None,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> RegexScanner {
        RegexScanner::new().unwrap()
    }

    #[test]
    fn patterns_compile() {
        assert!(RegexScanner::new().is_ok());
    }

    #[test]
    fn angle_group_is_balanced() {
        let text = "class Box<K extends Comparable<K>, V> {";
        let open = text.find('<').unwrap();
        assert_eq!(angle_group(text, open), Some("K extends Comparable<K>, V"));
        assert_eq!(angle_group("class A< {", 7), None);
    }

    #[test]
    fn constructors_and_statements_are_skipped() {
        let source = "class A {\n  public A(int x) {\n    return foo(x);\n  }\n  new B(1);\n}\n";
        assert!(scanner().extract(source).is_empty());
    }

    #[test]
    fn strip_removes_headers_only() {
        let stripped = scanner().strip_declarations("  void foo(int x) { bar(); }\n");
        assert_eq!(stripped, "   { bar(); }\n");
    }
}
