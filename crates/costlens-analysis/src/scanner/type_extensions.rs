//! Generic type-parameter bounds (`<A extends B>` ⇒ `A → B`).
//!
//! The cost analyzer reports erased parameter types, so a declaration
//! `void put(A a)` inside `class Box<A extends Number>` must be keyed as
//! `put(Number)` to match.

use costlens_core::types::collections::{FxHashMap, FxHashSet};

/// Bound per type-parameter name, scoped to one text snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeExtensionMap {
    bounds: FxHashMap<String, String>,
    /// Parameters left as written: intersection bounds (`A extends B & C`),
    /// and unbounded method-level parameters that hide a class-level bound.
    unresolved: FxHashSet<String>,
}

impl TypeExtensionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, parameter: impl Into<String>, bound: impl Into<String>) {
        let parameter = parameter.into();
        self.unresolved.remove(&parameter);
        self.bounds.insert(parameter, bound.into());
    }

    pub fn mark_unresolved(&mut self, parameter: impl Into<String>) {
        let parameter = parameter.into();
        self.bounds.remove(&parameter);
        self.unresolved.insert(parameter);
    }

    /// The bound `parameter` erases to, if there is exactly one.
    pub fn resolve(&self, parameter: &str) -> Option<&str> {
        self.bounds.get(parameter).map(String::as_str)
    }

    pub fn is_unresolved(&self, parameter: &str) -> bool {
        self.unresolved.contains(parameter)
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty() && self.unresolved.is_empty()
    }

    /// A copy of `self` with `inner` layered on top. Used for method-level
    /// type parameters, which shadow the class-level ones.
    pub fn overlay(&self, inner: &TypeExtensionMap) -> TypeExtensionMap {
        let mut merged = self.clone();
        for (parameter, bound) in &inner.bounds {
            merged.insert(parameter.clone(), bound.clone());
        }
        for parameter in &inner.unresolved {
            merged.mark_unresolved(parameter.clone());
        }
        merged
    }

    /// Record every `X extends Y` in a generic parameter list such as
    /// `K extends Comparable<K>, V`.
    pub fn record_parameter_list(&mut self, generics: &str) {
        for parameter in split_top_level(generics, ',') {
            let parameter = parameter.trim();
            let Some((name, bound)) = split_extends(parameter) else {
                continue;
            };
            if split_top_level(bound, '&').count() > 1 {
                tracing::debug!(parameter = name, bound, "intersection bound left unresolved");
                self.mark_unresolved(name);
            } else {
                let erased = strip_generic_args(bound);
                if !erased.is_empty() {
                    self.insert(name, erased);
                }
            }
        }
    }

    /// Record a method-level generic parameter list. Unlike
    /// [`record_parameter_list`](Self::record_parameter_list), unbounded
    /// parameters are kept as unresolved so that, once overlaid, they hide a
    /// class-level parameter of the same name.
    pub fn record_scoped_parameter_list(&mut self, generics: &str) {
        self.record_parameter_list(generics);
        for parameter in split_top_level(generics, ',') {
            let parameter = parameter.trim();
            if split_extends(parameter).is_some() {
                continue;
            }
            if let Some(name) = parameter.split_whitespace().last() {
                self.mark_unresolved(name);
            }
        }
    }
}

/// Split `A extends B` into `("A", "B")`.
fn split_extends(parameter: &str) -> Option<(&str, &str)> {
    let (name, bound) = parameter.split_once(" extends ")?;
    let name = name.trim().rsplit(char::is_whitespace).next()?.trim();
    let bound = bound.trim();
    if name.is_empty() || bound.is_empty() {
        return None;
    }
    Some((name, bound))
}

/// Split on `sep` wherever it is not nested inside `<...>`, `(...)` or `[...]`.
pub(crate) fn split_top_level(text: &str, sep: char) -> impl Iterator<Item = &str> {
    let mut pieces = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = (depth - 1).max(0),
            c if c == sep && depth == 0 => {
                pieces.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(&text[start..]);
    pieces.into_iter()
}

/// Remove every `<...>` group and all whitespace: `Map<K, List<V>> [ ]` ⇒ `Map[]`.
pub(crate) fn strip_generic_args(ty: &str) -> String {
    let mut out = String::with_capacity(ty.len());
    let mut depth = 0usize;
    for c in ty.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if depth == 0 && !c.is_whitespace() => out.push(c),
            _ => {}
        }
    }
    out
}
