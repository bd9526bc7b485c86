//! Adapter boundary between a host router and the extractor
//!
//! Each host representation implements [`RouterAdapter`] once and decodes its
//! layers into [`LayerKind`]. The extractor never looks at host types.

mod snapshot;
mod stack;

pub use snapshot::SnapshotRouter;

use stack_router::Method;

use crate::LayerInspectionError;

/// How a mounted router decides which paths belong to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Mount path kept as plain text
    Literal(String),
    /// Root mount that accepts every path
    MatchAll,
    /// Textual source of a compiled pattern
    Pattern(String),
    /// Anything the adapter could not classify
    Unrecognized,
}

/// A route entry: its path as registered and its verbs in host order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub methods: Vec<Method>,
}

/// One layer, decoded at the adapter boundary
#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    /// Sub-router mounted under `matcher`, with its own decoded stack
    Mounted {
        matcher: Matcher,
        stack: Vec<Result<LayerKind, LayerInspectionError>>,
    },
    /// Route registered on this router
    Direct(RouteEntry),
    /// Middleware, error handlers and anything else without a route
    Other,
}

/// Read access to a host router's registration stack
pub trait RouterAdapter {
    type Layer;

    /// Layers in registration order, or `None` if the router has no stack
    fn layers(&self) -> Option<&[Self::Layer]>;

    /// Decodes one layer
    fn inspect(&self, layer: &Self::Layer) -> Result<LayerKind, LayerInspectionError>;
}
