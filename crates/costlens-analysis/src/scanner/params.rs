//! Parameter list normalization.
//!
//! Turns the raw text between a declaration's parentheses into the erased,
//! unqualified type names the cost analyzer reports.

use costlens_core::types::collections::SmallVec4;

use super::type_extensions::{split_top_level, strip_generic_args, TypeExtensionMap};

/// Parse `final Map<K, V> m, String... rest` into `["Map", "String[]"]`.
///
/// An empty or blank list yields no types.
pub fn parse_parameter_types(raw: &str, types: &TypeExtensionMap) -> SmallVec4<String> {
    if raw.trim().is_empty() {
        return SmallVec4::new();
    }
    split_top_level(raw, ',')
        .filter_map(|param| parameter_type(param, types))
        .collect()
}

/// Resolve one declared parameter to its reported type.
fn parameter_type(param: &str, types: &TypeExtensionMap) -> Option<String> {
    let declared = strip_modifiers(param.trim());
    if declared.is_empty() {
        return None;
    }

    let (ty, name) = split_type_and_name(declared);
    let mut dims = 0usize;

    let mut ty = strip_generic_args(ty);
    if let Some(base) = ty.strip_suffix("...") {
        ty = base.to_string();
        dims += 1;
    }
    if name.starts_with("...") {
        dims += 1;
    }
    dims += name.matches("[]").count();
    let mut base = ty.as_str();
    while let Some(inner) = base.strip_suffix("[]") {
        base = inner;
        dims += 1;
    }

    let base = unqualified(base);
    let resolved = match types.resolve(base) {
        Some(bound) => unqualified(bound).to_string(),
        None => base.to_string(),
    };
    if resolved.is_empty() {
        return None;
    }
    Some(format!("{resolved}{}", "[]".repeat(dims)))
}

/// Drop leading annotations (with balanced arguments) and `final`.
fn strip_modifiers(mut param: &str) -> &str {
    loop {
        if let Some(rest) = param.strip_prefix('@') {
            let name_end = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$' || c == '.'))
                .unwrap_or(rest.len());
            let mut rest = rest[name_end..].trim_start();
            if rest.starts_with('(') {
                rest = skip_balanced_parens(rest);
            }
            param = rest.trim_start();
            continue;
        }
        if let Some(rest) = param.strip_prefix("final") {
            if rest.starts_with(char::is_whitespace) {
                param = rest.trim_start();
                continue;
            }
        }
        return param;
    }
}

/// `text` starts with `(`; returns what follows the matching `)`.
fn skip_balanced_parens(text: &str) -> &str {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return &text[i + 1..];
                }
            }
            _ => {}
        }
    }
    ""
}

/// Split `Map<K, V> m` into `("Map<K, V>", "m")`. A lone token is all type.
fn split_type_and_name(declared: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split_at = None;
    for (i, c) in declared.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => split_at = Some(i),
            _ => {}
        }
    }
    match split_at {
        Some(i) => {
            let (ty, name) = declared.split_at(i);
            let name = name.trim();
            // `int []` splits after the type; `[]` is not a name.
            if name.chars().all(|c| c == '[' || c == ']') {
                (declared, "")
            } else {
                (ty.trim(), name)
            }
        }
        None => (declared, ""),
    }
}

/// `java.util.Map` ⇒ `Map`.
fn unqualified(ty: &str) -> &str {
    ty.rsplit('.').next().unwrap_or(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Vec<String> {
        parse_parameter_types(raw, &TypeExtensionMap::new()).into_vec()
    }

    #[test]
    fn empty_list_has_no_types() {
        assert!(parse("").is_empty());
        assert!(parse("   \n ").is_empty());
    }

    #[test]
    fn plain_parameters() {
        assert_eq!(parse("int x, String name"), vec!["int", "String"]);
        assert_eq!(parse("final int[] xs, @NonNull String s"), vec!["int[]", "String"]);
    }

    #[test]
    fn generics_are_erased_and_not_split() {
        assert_eq!(parse("Map<K, V> m, List<List<String>> xs"), vec!["Map", "List"]);
        assert_eq!(parse("List<String>[] buckets"), vec!["List[]"]);
    }

    #[test]
    fn varargs_and_c_style_arrays() {
        assert_eq!(parse("String... args"), vec!["String[]"]);
        assert_eq!(parse("String ...args"), vec!["String[]"]);
        assert_eq!(parse("int a[]"), vec!["int[]"]);
        assert_eq!(parse("int [] a"), vec!["int[]"]);
    }

    #[test]
    fn qualified_names_and_annotation_arguments() {
        assert_eq!(
            parse("java.util.List<String> xs, @Named(\"a, b\") long id"),
            vec!["List", "long"]
        );
    }

    #[test]
    fn bounds_are_substituted() {
        let mut types = TypeExtensionMap::new();
        types.insert("T", "java.lang.Number");
        let parsed = parse_parameter_types("T value, T[] values, U other", &types);
        assert_eq!(parsed.into_vec(), vec!["Number", "Number[]", "U"]);
    }
}
