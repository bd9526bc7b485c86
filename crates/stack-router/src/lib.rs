//! # Stack Router
//!
//! A layered HTTP router. Every registration appends a [`Layer`] to an
//! ordered stack, and requests walk that stack first-registered first:
//! - Route layers (`get`, `post`, ..., `all`) with compiled path patterns
//! - Mounted sub-routers (`mount("/tags", router)`)
//! - Plain middleware and error handlers
//!
//! The stack is public and read-only, so tooling can inspect what an
//! application registered without going through request dispatch.
//!
//! ## Path Syntax
//!
//! - Static segments: `/about`
//! - Parameters: `/users/:id`
//! - Optional parameters: `/posts/:slug?`
//! - Wildcards: `/files/*`
//!
//! ## Example
//!
//! ```
//! use stack_router::{Method, Router};
//!
//! let mut tags = Router::new();
//! tags.get("/:id", "show_tag").unwrap();
//!
//! let mut app = Router::new();
//! app.mount("/tags", tags).unwrap();
//!
//! let found = app.lookup(Method::Get, "/tags/rust").unwrap();
//! assert_eq!(found.handler, "show_tag");
//! assert_eq!(found.params.get("id"), Some(&"rust".to_string()));
//! ```

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use tracing::trace;

// ============================================================================
// Module Declarations
// ============================================================================

mod method;
pub mod path;
pub mod route;

pub use method::{Method, ParseMethodError};
pub use path::{is_canonical, normalize_path};
pub use route::{
    compile_path, CompiledPattern, PatternError, PatternMatch, PatternOptions,
    SEGMENT_END_MARKER, TRAILING_SLASH_MARKER,
};

// ============================================================================
// Core Types
// ============================================================================

/// A route entry: one path with the verbs registered on it
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Path exactly as registered, e.g. `/:id` or `*`
    pub path: String,
    /// Verbs in registration order, without duplicates
    pub methods: Vec<Method>,
    /// Name of the handler serving this entry
    pub handler: String,
}

/// How a layer decides whether a request path belongs to it
#[derive(Debug, Clone, PartialEq)]
pub enum LayerMatcher {
    /// Mounted at `/`: every path matches without consulting a pattern
    MatchAll,
    Pattern(CompiledPattern),
}

/// What a layer does once its matcher accepts a path
#[derive(Debug, Clone, PartialEq)]
pub enum LayerHandle {
    Route(Route),
    Router(Router),
    Middleware,
    ErrorHandler,
}

/// One entry of a router's registration stack
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// `route`, `router`, or the middleware/error handler name
    pub name: String,
    pub matcher: LayerMatcher,
    pub handle: LayerHandle,
}

/// Result of looking up a request in the stack
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub method: Method,
    /// Route path as registered (without mount prefixes)
    pub route_path: String,
    pub handler: String,
    /// Parameters from every mount level and the route itself
    pub params: HashMap<String, String>,
}

/// Layered router with an ordered registration stack
///
/// # Examples
///
/// ```
/// use stack_router::{LayerHandle, Router};
///
/// let mut app = Router::new();
/// app.get("/health", "health").unwrap();
/// app.use_middleware("logger");
///
/// assert_eq!(app.stack().len(), 2);
/// assert!(matches!(app.stack()[1].handle, LayerHandle::Middleware));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Router {
    stack: Vec<Layer>,
    case_sensitive: bool,
    strict: bool,
}

// ============================================================================
// Router Implementation
// ============================================================================

impl Router {
    /// Creates an empty router (case-insensitive, non-strict)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets case-sensitive matching for routes registered afterwards
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets strict trailing-slash handling for routes registered afterwards
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The registration stack, first-registered first
    pub fn stack(&self) -> &[Layer] {
        &self.stack
    }

    /// Registers one route entry carrying the given verbs
    ///
    /// Duplicate verbs are dropped, keeping the first occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_router::{LayerHandle, Method, Router};
    ///
    /// let mut app = Router::new();
    /// app.route("/items", &[Method::Get, Method::Post], "items").unwrap();
    ///
    /// match &app.stack()[0].handle {
    ///     LayerHandle::Route(route) => assert_eq!(route.methods, vec![Method::Get, Method::Post]),
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn route(
        &mut self,
        path: &str,
        methods: &[Method],
        handler: impl Into<String>,
    ) -> Result<&mut Self, PatternError> {
        let pattern = compile_path(path, PatternOptions::route(self.strict, self.case_sensitive))?;

        let mut unique = Vec::with_capacity(methods.len());
        for method in methods {
            if !unique.contains(method) {
                unique.push(*method);
            }
        }

        self.stack.push(Layer {
            name: "route".to_string(),
            matcher: LayerMatcher::Pattern(pattern),
            handle: LayerHandle::Route(Route {
                path: path.to_string(),
                methods: unique,
                handler: handler.into(),
            }),
        });
        Ok(self)
    }

    /// Registers a route entry for every known verb
    pub fn all(&mut self, path: &str, handler: impl Into<String>) -> Result<&mut Self, PatternError> {
        self.route(path, Method::ALL, handler)
    }

    pub fn get(&mut self, path: &str, handler: impl Into<String>) -> Result<&mut Self, PatternError> {
        self.route(path, &[Method::Get], handler)
    }

    pub fn post(&mut self, path: &str, handler: impl Into<String>) -> Result<&mut Self, PatternError> {
        self.route(path, &[Method::Post], handler)
    }

    pub fn put(&mut self, path: &str, handler: impl Into<String>) -> Result<&mut Self, PatternError> {
        self.route(path, &[Method::Put], handler)
    }

    pub fn patch(&mut self, path: &str, handler: impl Into<String>) -> Result<&mut Self, PatternError> {
        self.route(path, &[Method::Patch], handler)
    }

    pub fn delete(&mut self, path: &str, handler: impl Into<String>) -> Result<&mut Self, PatternError> {
        self.route(path, &[Method::Delete], handler)
    }

    pub fn head(&mut self, path: &str, handler: impl Into<String>) -> Result<&mut Self, PatternError> {
        self.route(path, &[Method::Head], handler)
    }

    pub fn options(&mut self, path: &str, handler: impl Into<String>) -> Result<&mut Self, PatternError> {
        self.route(path, &[Method::Options], handler)
    }

    /// Mounts a sub-router under a path prefix
    ///
    /// An empty path or `/` mounts at the root, which matches every path.
    pub fn mount(&mut self, path: &str, router: Router) -> Result<&mut Self, PatternError> {
        let matcher = if path.is_empty() || path == "/" {
            LayerMatcher::MatchAll
        } else {
            LayerMatcher::Pattern(compile_path(path, PatternOptions::mount(self.case_sensitive))?)
        };

        self.stack.push(Layer {
            name: "router".to_string(),
            matcher,
            handle: LayerHandle::Router(router),
        });
        Ok(self)
    }

    /// Appends a plain middleware layer running for every path
    pub fn use_middleware(&mut self, name: impl Into<String>) -> &mut Self {
        self.stack.push(Layer {
            name: name.into(),
            matcher: LayerMatcher::MatchAll,
            handle: LayerHandle::Middleware,
        });
        self
    }

    /// Appends an error handling layer
    pub fn use_error_handler(&mut self, name: impl Into<String>) -> &mut Self {
        self.stack.push(Layer {
            name: name.into(),
            matcher: LayerMatcher::MatchAll,
            handle: LayerHandle::ErrorHandler,
        });
        self
    }

    /// Finds the first route entry serving `method` at `path`
    ///
    /// The path is normalized first (see [`normalize_path`]). Mounted
    /// routers see the path with their prefix removed.
    pub fn lookup(&self, method: Method, path: &str) -> Option<RouteMatch> {
        let path = normalize_path(path);
        self.lookup_in_stack(method, &path, HashMap::new())
    }

    fn lookup_in_stack(
        &self,
        method: Method,
        path: &str,
        inherited: HashMap<String, String>,
    ) -> Option<RouteMatch> {
        self.stack.iter().enumerate().find_map(|(idx, layer)| {
            let found = match &layer.matcher {
                LayerMatcher::MatchAll => PatternMatch {
                    consumed: 0,
                    params: HashMap::new(),
                },
                LayerMatcher::Pattern(pattern) => pattern.match_path(path)?,
            };

            let mut params = inherited.clone();
            params.extend(found.params);

            match &layer.handle {
                LayerHandle::Route(route) if route.methods.contains(&method) => {
                    trace!(layer = idx, path = %route.path, "route matched");
                    Some(RouteMatch {
                        method,
                        route_path: route.path.clone(),
                        handler: route.handler.clone(),
                        params,
                    })
                }
                LayerHandle::Router(router) => {
                    let rest = &path[found.consumed..];
                    let rest = if rest.starts_with('/') {
                        rest.to_string()
                    } else {
                        format!("/{}", rest)
                    };
                    router.lookup_in_stack(method, &rest, params)
                }
                _ => None,
            }
        })
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Serializable view of the registration stack
    ///
    /// Layers appear as `{ name, regexp: { source, fast_slash }, route?, handle? }`;
    /// `route.methods` is an object of `token: true` entries in registration
    /// order and `handle.stack` holds a mounted router's own layers.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_router::Router;
    ///
    /// let mut app = Router::new();
    /// app.post("/items", "create").unwrap();
    ///
    /// let snapshot = app.snapshot().unwrap();
    /// assert_eq!(snapshot["stack"][0]["route"]["methods"]["post"], true);
    /// ```
    pub fn snapshot(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(StackSnapshot::of(self))
    }
}

#[derive(Serialize)]
struct StackSnapshot<'a> {
    stack: Vec<LayerSnapshot<'a>>,
}

#[derive(Serialize)]
struct LayerSnapshot<'a> {
    name: &'a str,
    regexp: RegexpSnapshot<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<RouteSnapshot<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    handle: Option<StackSnapshot<'a>>,
}

#[derive(Serialize)]
struct RegexpSnapshot<'a> {
    source: &'a str,
    fast_slash: bool,
}

#[derive(Serialize)]
struct RouteSnapshot<'a> {
    path: &'a str,
    #[serde(serialize_with = "serialize_methods")]
    methods: &'a [Method],
}

impl<'a> StackSnapshot<'a> {
    fn of(router: &'a Router) -> Self {
        let stack = router
            .stack
            .iter()
            .map(|layer| {
                let regexp = match &layer.matcher {
                    LayerMatcher::MatchAll => RegexpSnapshot {
                        source: r"^\/?(?:\/|$)",
                        fast_slash: true,
                    },
                    LayerMatcher::Pattern(pattern) => RegexpSnapshot {
                        source: pattern.source(),
                        fast_slash: false,
                    },
                };
                let (route, handle) = match &layer.handle {
                    LayerHandle::Route(route) => (
                        Some(RouteSnapshot {
                            path: &route.path,
                            methods: &route.methods,
                        }),
                        None,
                    ),
                    LayerHandle::Router(nested) => (None, Some(StackSnapshot::of(nested))),
                    LayerHandle::Middleware | LayerHandle::ErrorHandler => (None, None),
                };
                LayerSnapshot {
                    name: &layer.name,
                    regexp,
                    route,
                    handle,
                }
            })
            .collect();

        StackSnapshot { stack }
    }
}

fn serialize_methods<S: Serializer>(methods: &&[Method], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(methods.iter().map(|method| (method.as_str(), true)))
}
