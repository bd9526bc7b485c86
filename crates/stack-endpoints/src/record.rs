// File: src/record.rs
// Purpose: Endpoint records produced by extraction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use stack_router::{Method, ParseMethodError};

/// How an endpoint reached the router's stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Registered directly on the inspected router
    Direct,
    /// Reached through a mounted sub-router
    Mounted,
}

impl Origin {
    pub fn label(&self) -> &'static str {
        match self {
            Origin::Direct => "direct",
            Origin::Mounted => "mounted",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Method column of a record: one verb, or `ALL` for a catch-every-verb route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointMethod {
    All,
    Verb(Method),
}

impl EndpointMethod {
    /// Collapses a verb list to `ALL` when it is exactly the set of known verbs
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_endpoints::EndpointMethod;
    /// use stack_router::Method;
    ///
    /// assert!(EndpointMethod::covers_all(Method::ALL));
    /// assert!(!EndpointMethod::covers_all(&[Method::Get]));
    /// ```
    pub fn covers_all(methods: &[Method]) -> bool {
        methods.len() == Method::ALL.len() && Method::ALL.iter().all(|verb| methods.contains(verb))
    }
}

impl From<Method> for EndpointMethod {
    fn from(method: Method) -> Self {
        EndpointMethod::Verb(method)
    }
}

impl fmt::Display for EndpointMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointMethod::All => f.pad("ALL"),
            EndpointMethod::Verb(method) => fmt::Display::fmt(method, f),
        }
    }
}

impl FromStr for EndpointMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(EndpointMethod::All)
        } else {
            s.parse().map(EndpointMethod::Verb)
        }
    }
}

impl Serialize for EndpointMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EndpointMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// One registered endpoint
///
/// Records are immutable: fields are read through accessors and the path is
/// normalized once at construction, deserialization included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct EndpointRecord {
    origin: Origin,
    method: EndpointMethod,
    path: String,
}

#[derive(Deserialize)]
struct RawRecord {
    origin: Origin,
    method: EndpointMethod,
    path: String,
}

impl From<RawRecord> for EndpointRecord {
    fn from(raw: RawRecord) -> Self {
        EndpointRecord::new(raw.origin, raw.method, raw.path)
    }
}

impl EndpointRecord {
    /// Creates a record; an empty path becomes `/`
    pub fn new(origin: Origin, method: impl Into<EndpointMethod>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            origin,
            method: method.into(),
            path: if path.is_empty() { "/".to_string() } else { path },
        }
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn method(&self) -> EndpointMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Joins mount prefixes and a route suffix into an endpoint path
///
/// Each prefix level is a `/`-split segment list (see [`crate::decode`]) and
/// is joined back with `/`. Levels are concatenated, inserting a `/` only
/// when a non-empty level does not already start with one. The suffix is
/// appended as-is when it starts with `/`, after a `/` when it is otherwise
/// non-empty, and not at all when empty. An empty result becomes `/`.
///
/// # Examples
///
/// ```
/// use stack_endpoints::join_path;
///
/// let prefix = vec![vec!["".to_string(), "test".to_string()]];
/// assert_eq!(join_path(&prefix, ":id"), "/test/:id");
/// assert_eq!(join_path(&[], ""), "/");
/// ```
pub fn join_path(prefixes: &[Vec<String>], suffix: &str) -> String {
    let mut path = String::new();

    for level in prefixes {
        let text = level.join("/");
        if !path.is_empty() && !text.is_empty() && !text.starts_with('/') {
            path.push('/');
        }
        path.push_str(&text);
    }

    if suffix.starts_with('/') {
        path.push_str(suffix);
    } else if !suffix.is_empty() {
        path.push('/');
        path.push_str(suffix);
    }

    if path.is_empty() {
        "/".to_string()
    } else {
        path
    }
}
