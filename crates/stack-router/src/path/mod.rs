/// Request path utilities used before a path is matched against the stack
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Checks whether a request path can be matched as-is
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`, `\`, `?` or `#`
/// - Must not end with `/` (except root `/`)
///
/// # Examples
///
/// ```
/// use stack_router::path::is_canonical;
///
/// assert!(is_canonical("/"));
/// assert!(is_canonical("/tags/42"));
///
/// assert!(!is_canonical(""));
/// assert!(!is_canonical("/tags/"));
/// assert!(!is_canonical("/tags?page=2"));
/// ```
pub fn is_canonical(path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains(['\\', '?', '#']) {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalizes a request path before lookup
///
/// Returns `Cow::Borrowed` when the input is already canonical.
///
/// - Query strings and fragments are dropped: `/tags?page=2` → `/tags`
/// - Backslashes become slashes: `\tags\42` → `/tags/42`
/// - Empty segments collapse: `/tags//42/` → `/tags/42`
/// - An empty result becomes `/`
///
/// # Examples
///
/// ```
/// use stack_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/tags"), Cow::Borrowed("/tags")));
/// assert_eq!(normalize_path("/tags/?page=2"), "/tags");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let without_query = path.split(['?', '#']).next().unwrap_or_default();

    let joined = without_query
        .replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    Cow::Owned(format!("/{}", joined))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/tags/", "/tags")]
    #[case("/tags//42", "/tags/42")]
    #[case("\\tags\\42", "/tags/42")]
    #[case("tags", "/tags")]
    #[case("/search?q=a/b", "/search")]
    #[case("/docs#intro", "/docs")]
    #[case("", "/")]
    #[case("?x=1", "/")]
    fn test_normalize_path(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_path(input), expected);
    }

    #[test]
    fn test_canonical_paths_are_borrowed() {
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
        assert!(matches!(normalize_path("/a/b"), Cow::Borrowed("/a/b")));
    }
}
