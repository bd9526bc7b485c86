//! Mount matcher decoding
//!
//! Turns a mount matcher back into the literal path segments it was compiled
//! from. Only patterns made of literal text survive the trip; anything with
//! parameters, wildcards or alternations comes back as a single
//! `<complex:SOURCE>` segment so the endpoint is still listed.

use once_cell::sync::Lazy;
use regex::Regex;
use stack_router::{SEGMENT_END_MARKER, TRAILING_SLASH_MARKER};

use crate::Matcher;

/// `^` + literal characters or escaped punctuation + `$`
static LITERAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\^((?:\\[.*+?^${}()|\[\]\\/]|[^.*+?^${}()|\[\]\\/])*)\$$").unwrap()
});

static ESCAPED_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\(.)").unwrap());

/// Decodes a mount matcher into path segments (never fails)
///
/// # Examples
///
/// ```
/// use stack_endpoints::{decode, Matcher};
///
/// assert_eq!(decode(&Matcher::Literal("/tags".into())), vec!["", "tags"]);
/// assert_eq!(decode(&Matcher::MatchAll), vec![""]);
/// assert_eq!(decode(&Matcher::Pattern(r"^\/tags\/?(?:\/|$)".into())), vec!["", "tags"]);
/// ```
pub fn decode(matcher: &Matcher) -> Vec<String> {
    match matcher {
        Matcher::Literal(path) => path.split('/').map(str::to_string).collect(),
        Matcher::MatchAll => vec![String::new()],
        Matcher::Pattern(source) => decode_source(source),
        Matcher::Unrecognized => vec![String::new()],
    }
}

/// Decodes the textual source of a compiled mount pattern
///
/// The first trailing-slash marker is removed and the first segment-end
/// marker becomes `$` before the literal shape is checked.
pub fn decode_source(source: &str) -> Vec<String> {
    let anchored = source
        .replacen(TRAILING_SLASH_MARKER, "", 1)
        .replacen(SEGMENT_END_MARKER, "$", 1);

    let body = LITERAL_PATTERN
        .captures(&anchored)
        .and_then(|captures| captures.get(1))
        .map(|body| body.as_str())
        .filter(|body| !body.is_empty());

    match body {
        Some(body) => {
            let unescaped = ESCAPED_CHAR.replace_all(body, "$1");
            unescaped.split('/').map(str::to_string).collect()
        }
        None => vec![complex_segment(source)],
    }
}

/// Sentinel segment for patterns that are not a literal prefix
pub fn complex_segment(source: &str) -> String {
    format!("<complex:{}>", source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stack_router::{compile_path, PatternOptions};

    fn mount_source(path: &str) -> String {
        compile_path(path, PatternOptions::mount(false))
            .unwrap()
            .source()
            .to_string()
    }

    #[rstest]
    #[case("/tags", &["", "tags"])]
    #[case("/api/v1", &["", "api", "v1"])]
    #[case("/file.json", &["", "file.json"])]
    #[case("/a(b)", &["", "a(b)"])]
    #[case("/my-route", &["", "my-route"])]
    #[case("/tags/", &["", "tags"])]
    fn test_literal_mounts_round_trip(#[case] path: &str, #[case] expected: &[&str]) {
        assert_eq!(decode(&Matcher::Pattern(mount_source(path))), expected);
    }

    #[rstest]
    #[case("/test/*")]
    #[case("/orgs/:org")]
    #[case("/posts/:slug?")]
    #[case("/^test*$")]
    fn test_non_literal_mounts_are_complex(#[case] path: &str) {
        let source = mount_source(path);
        assert_eq!(decode(&Matcher::Pattern(source.clone())), vec![format!("<complex:{}>", source)]);
    }

    #[test]
    fn test_literal_string_split_as_is() {
        assert_eq!(decode(&Matcher::Literal("/a//b".into())), vec!["", "a", "", "b"]);
        assert_eq!(decode(&Matcher::Literal(String::new())), vec![""]);
    }

    #[test]
    fn test_match_all_and_unrecognized_render_as_root() {
        assert_eq!(decode(&Matcher::MatchAll), vec![""]);
        assert_eq!(decode(&Matcher::Unrecognized), vec![""]);
    }

    #[test]
    fn test_alternation_is_complex() {
        let source = r"^\/(?:a|b)\/?(?:\/|$)";
        assert_eq!(decode_source(source), vec![complex_segment(source)]);
    }

    #[test]
    fn test_empty_body_is_complex() {
        assert_eq!(decode_source(r"^\/?$"), vec![complex_segment(r"^\/?$")]);
    }

    #[test]
    fn test_route_patterns_decode_too() {
        assert_eq!(decode_source(r"^\/health\/?$"), vec!["", "health"]);
    }
}
