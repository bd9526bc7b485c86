/// Pattern parsing for route path segments
///
/// Pure functional parsing of registration paths (`/users/:id?`, `/files/*`)
/// into typed tokens. All functions are **pure**: same input → same output.

/// Represents the different kinds of path segments a registration path may hold
///
/// # Examples
///
/// ```
/// use stack_router::route::pattern::{classify_segment, PathToken};
///
/// assert!(matches!(classify_segment("about"), PathToken::Static(_)));
/// assert!(matches!(classify_segment(":id"), PathToken::Param { optional: false, .. }));
/// assert!(matches!(classify_segment(":id?"), PathToken::Param { optional: true, .. }));
/// assert_eq!(classify_segment("*"), PathToken::Wildcard);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PathToken {
    /// Named parameter: `:id` or `:id?`
    Param { name: String, optional: bool },
    /// Bare wildcard segment: `*`
    Wildcard,
    /// Literal text, possibly with embedded `*` wildcards
    Static(String),
}

/// Classifies a single path segment (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Wildcard**: exactly `*`
/// 2. **Optional param**: `:name?`
/// 3. **Required param**: `:name`
/// 4. **Static**: any other text
///
/// A lone `:` is treated as static text.
pub fn classify_segment(segment: &str) -> PathToken {
    if segment == "*" {
        return PathToken::Wildcard;
    }

    match segment.strip_prefix(':').filter(|name| !name.is_empty()) {
        Some(param) => match param.strip_suffix('?') {
            Some(name) if !name.is_empty() => PathToken::Param {
                name: name.to_string(),
                optional: true,
            },
            _ => PathToken::Param {
                name: param.to_string(),
                optional: false,
            },
        },
        None => PathToken::Static(segment.to_string()),
    }
}

/// Splits a registration path into tokens, skipping the empty segment
/// produced by a leading `/`
///
/// # Examples
///
/// ```
/// use stack_router::route::pattern::{tokenize, PathToken};
///
/// let tokens = tokenize("/users/:id");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0], PathToken::Static("users".to_string()));
/// ```
pub fn tokenize(path: &str) -> Vec<PathToken> {
    path.strip_prefix('/')
        .unwrap_or(path)
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(classify_segment)
        .collect()
}
