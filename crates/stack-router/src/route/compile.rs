//! Compilation of registration paths into regular expressions
//!
//! The textual form of a compiled pattern is part of the router's public
//! contract: introspection tools read [`CompiledPattern::source`] back and
//! look for the markers below.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use super::pattern::{tokenize, PathToken};

/// Emitted before the end anchor when trailing slashes are optional
pub const TRAILING_SLASH_MARKER: &str = r"\/?";

/// Emitted instead of `$` for prefix (mount) patterns
pub const SEGMENT_END_MARKER: &str = r"(?:\/|$)";

/// Characters escaped with a backslash in literal segments
pub const ESCAPED_CHARS: &str = r".+?^${}()|[]\/";

const PARAM_GROUP: &str = r"(?:([^\/]+?))";
const OPTIONAL_PARAM_GROUP: &str = r"(?:\/([^\/]+?))?";
const WILDCARD_GROUP: &str = "(.*)";

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern for path {path:?}: {source}")]
    Regex {
        path: String,
        #[source]
        source: regex::Error,
    },
}

/// Options controlling how a path compiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternOptions {
    /// Anchor at the end of the path (routes) or at a segment boundary (mounts)
    pub end: bool,
    /// Treat a trailing slash as significant
    pub strict: bool,
    pub case_sensitive: bool,
}

impl PatternOptions {
    /// Options for a route registration: full-path match
    pub fn route(strict: bool, case_sensitive: bool) -> Self {
        Self {
            end: true,
            strict,
            case_sensitive,
        }
    }

    /// Options for a mount point: prefix match ending on a segment boundary
    pub fn mount(case_sensitive: bool) -> Self {
        Self {
            end: false,
            strict: false,
            case_sensitive,
        }
    }
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self::route(false, false)
    }
}

/// A registration path compiled to a regular expression
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    keys: Vec<String>,
}

/// Result of matching a request path against a [`CompiledPattern`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Number of bytes of the request path consumed by the match
    pub consumed: usize,
    pub params: HashMap<String, String>,
}

impl CompiledPattern {
    /// Textual regular expression, e.g. `^\/tags\/?(?:\/|$)`
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parameter names in capture-group order; wildcards are numbered from `0`
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Matches a request path, returning captured parameters
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_router::route::compile::{compile_path, PatternOptions};
    ///
    /// let pattern = compile_path("/users/:id", PatternOptions::default()).unwrap();
    /// let found = pattern.match_path("/users/42").unwrap();
    /// assert_eq!(found.params.get("id"), Some(&"42".to_string()));
    /// ```
    pub fn match_path(&self, path: &str) -> Option<PatternMatch> {
        let captures = self.regex.captures(path)?;
        let whole = captures.get(0)?;

        let params = self
            .keys
            .iter()
            .enumerate()
            .filter_map(|(idx, key)| {
                captures
                    .get(idx + 1)
                    .map(|value| (key.clone(), value.as_str().to_string()))
            })
            .collect();

        Some(PatternMatch {
            consumed: whole.end(),
            params,
        })
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.keys == other.keys
    }
}

/// Compiles a registration path into a [`CompiledPattern`]
///
/// # Grammar
///
/// - `^` anchor, then for each segment:
///   - literal text → `\/` + text with [`ESCAPED_CHARS`] backslash-escaped
///     (an embedded `*` becomes `(.*)`)
///   - `:name` → `\/(?:([^\/]+?))`
///   - `:name?` → `(?:\/([^\/]+?))?`
///   - `*` → `\/(.*)`
/// - [`TRAILING_SLASH_MARKER`] unless strict
/// - `$` for routes, [`SEGMENT_END_MARKER`] for mounts
///
/// # Examples
///
/// ```
/// use stack_router::route::compile::{compile_path, PatternOptions};
///
/// let pattern = compile_path("/tags", PatternOptions::mount(false)).unwrap();
/// assert_eq!(pattern.source(), r"^\/tags\/?(?:\/|$)");
/// ```
pub fn compile_path(path: &str, options: PatternOptions) -> Result<CompiledPattern, PatternError> {
    let mut source = String::from("^");
    let mut keys = Vec::new();
    let mut wildcards = 0usize;

    for token in tokenize(path) {
        match token {
            PathToken::Param {
                name,
                optional: false,
            } => {
                source.push_str(r"\/");
                source.push_str(PARAM_GROUP);
                keys.push(name);
            }
            PathToken::Param {
                name,
                optional: true,
            } => {
                source.push_str(OPTIONAL_PARAM_GROUP);
                keys.push(name);
            }
            PathToken::Wildcard => {
                source.push_str(r"\/");
                source.push_str(WILDCARD_GROUP);
                keys.push(wildcards.to_string());
                wildcards += 1;
            }
            PathToken::Static(text) => {
                source.push_str(r"\/");
                for ch in text.chars() {
                    if ch == '*' {
                        source.push_str(WILDCARD_GROUP);
                        keys.push(wildcards.to_string());
                        wildcards += 1;
                    } else {
                        push_escaped(&mut source, ch);
                    }
                }
            }
        }
    }

    if options.strict {
        if path.len() > 1 && path.ends_with('/') {
            source.push_str(r"\/");
        }
    } else {
        source.push_str(TRAILING_SLASH_MARKER);
    }

    source.push_str(if options.end { "$" } else { SEGMENT_END_MARKER });

    let regex = RegexBuilder::new(&source)
        .case_insensitive(!options.case_sensitive)
        .build()
        .map_err(|source| PatternError::Regex {
            path: path.to_string(),
            source,
        })?;

    Ok(CompiledPattern {
        source,
        regex,
        keys,
    })
}

fn push_escaped(source: &mut String, ch: char) {
    if ESCAPED_CHARS.contains(ch) {
        source.push('\\');
    }
    source.push(ch);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/tags", r"^\/tags\/?$")]
    #[case("", r"^\/?$")]
    #[case("/", r"^\/?$")]
    #[case("/:id", r"^\/(?:([^\/]+?))\/?$")]
    #[case("*", r"^\/(.*)\/?$")]
    #[case("/file.json", r"^\/file\.json\/?$")]
    #[case("/posts/:slug?", r"^\/posts(?:\/([^\/]+?))?\/?$")]
    fn test_route_sources(#[case] path: &str, #[case] expected: &str) {
        let pattern = compile_path(path, PatternOptions::default()).unwrap();
        assert_eq!(pattern.source(), expected);
    }

    #[test]
    fn test_mount_source_uses_segment_end() {
        let pattern = compile_path("/api/v1", PatternOptions::mount(false)).unwrap();
        assert_eq!(pattern.source(), r"^\/api\/v1\/?(?:\/|$)");
    }

    #[test]
    fn test_strict_keeps_trailing_slash() {
        let pattern = compile_path("/docs/", PatternOptions::route(true, false)).unwrap();
        assert_eq!(pattern.source(), r"^\/docs\/$");
        assert!(pattern.match_path("/docs/").is_some());
        assert!(pattern.match_path("/docs").is_none());
    }

    #[test]
    fn test_keys_in_capture_order() {
        let pattern = compile_path("/:org/repos/*", PatternOptions::default()).unwrap();
        assert_eq!(pattern.keys(), &["org".to_string(), "0".to_string()]);

        let found = pattern.match_path("/acme/repos/a/b").unwrap();
        assert_eq!(found.params.get("org"), Some(&"acme".to_string()));
        assert_eq!(found.params.get("0"), Some(&"a/b".to_string()));
    }

    #[test]
    fn test_case_sensitivity() {
        let insensitive = compile_path("/About", PatternOptions::route(false, false)).unwrap();
        assert!(insensitive.match_path("/about").is_some());

        let sensitive = compile_path("/About", PatternOptions::route(false, true)).unwrap();
        assert!(sensitive.match_path("/about").is_none());
    }

    #[test]
    fn test_mount_consumes_prefix_only() {
        let pattern = compile_path("/tags", PatternOptions::mount(false)).unwrap();
        assert_eq!(pattern.match_path("/tags").map(|m| m.consumed), Some(5));
        assert!(pattern.match_path("/tags/42").is_some());
        assert!(pattern.match_path("/tagsx").is_none());
    }

    #[test]
    fn test_optional_param_absent() {
        let pattern = compile_path("/posts/:slug?", PatternOptions::default()).unwrap();
        let found = pattern.match_path("/posts").unwrap();
        assert!(found.params.is_empty());
    }
}
