//! Shared string helpers for code generation.

/// Capitalize the first character and lower-case the rest
/// (e.g., "hobby" -> "Hobby", "HOBBY" -> "Hobby").
///
/// Used to derive method names like `addHobby` from a singular field name.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Extract the inner text of the first `<...>` region of `s`, matching
/// non-greedily (e.g., "List<String>" -> "String").
///
/// Returns `fallback` when `s` has no such region or the region is empty.
pub fn generic_argument<'a>(s: &'a str, fallback: &'a str) -> &'a str {
    let Some(open) = s.find('<') else {
        return fallback;
    };
    let rest = &s[open + 1..];
    match rest.find('>') {
        Some(close) if close > 0 => &rest[..close],
        _ => fallback,
    }
}

/// Whether a type name denotes a growable ordered sequence.
///
/// Container-ness is decided purely by the literal `List` prefix, so
/// `List`, `List<String>` and `ListLike` all count.
pub fn is_container_type(ty: &str) -> bool {
    ty.starts_with("List")
}
