use serde_json::Value;
use stack_router::{Method, Router};

use super::{LayerKind, Matcher, RouteEntry, RouterAdapter};
use crate::error::json_kind;
use crate::LayerInspectionError;

/// A router stack captured as JSON
///
/// Accepts the document produced by [`Router::snapshot`]:
/// `{ "stack": [ { "name", "regexp", "route"?, "handle"? }, ... ] }`.
/// Nothing about the layers is validated up front; each one is decoded when
/// the extractor asks for it, so a single malformed layer only affects itself.
///
/// # Examples
///
/// ```
/// use stack_endpoints::{extract, SnapshotRouter};
///
/// let router = SnapshotRouter::from_json(r#"{
///     "stack": [
///         { "name": "route", "regexp": { "source": "^\\/health\\/?$" },
///           "route": { "path": "/health", "methods": { "get": true } } }
///     ]
/// }"#).unwrap();
///
/// assert_eq!(extract(&router)[0].path(), "/health");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRouter {
    root: Value,
}

impl SnapshotRouter {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Captures a live router
    pub fn from_router(router: &Router) -> Result<Self, serde_json::Error> {
        router.snapshot().map(Self::new)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self::new)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }
}

impl RouterAdapter for SnapshotRouter {
    type Layer = Value;

    fn layers(&self) -> Option<&[Value]> {
        self.root.get("stack")?.as_array().map(Vec::as_slice)
    }

    fn inspect(&self, layer: &Value) -> Result<LayerKind, LayerInspectionError> {
        inspect_value(layer)
    }
}

fn inspect_value(layer: &Value) -> Result<LayerKind, LayerInspectionError> {
    let object = layer.as_object().ok_or(LayerInspectionError::NotAnObject)?;

    if object.get("name").and_then(Value::as_str) == Some("router") {
        let nested = object
            .get("handle")
            .and_then(|handle| handle.get("stack"))
            .and_then(Value::as_array)
            .ok_or(LayerInspectionError::MissingNestedStack)?;

        return Ok(LayerKind::Mounted {
            matcher: decode_matcher(object.get("regexp")),
            stack: nested.iter().map(inspect_value).collect(),
        });
    }

    match object.get("route") {
        None | Some(Value::Null) => Ok(LayerKind::Other),
        Some(route) => route_entry(route).map(LayerKind::Direct),
    }
}

fn decode_matcher(regexp: Option<&Value>) -> Matcher {
    match regexp {
        Some(Value::String(path)) => Matcher::Literal(path.clone()),
        Some(Value::Object(pattern)) => {
            if pattern.get("fast_slash").and_then(Value::as_bool) == Some(true) {
                Matcher::MatchAll
            } else {
                pattern
                    .get("source")
                    .and_then(Value::as_str)
                    .map(|source| Matcher::Pattern(source.to_string()))
                    .unwrap_or(Matcher::Unrecognized)
            }
        }
        _ => Matcher::Unrecognized,
    }
}

fn route_entry(route: &Value) -> Result<RouteEntry, LayerInspectionError> {
    let path = match route.get("path") {
        Some(Value::String(path)) => path.clone(),
        other => {
            return Err(LayerInspectionError::PathNotString {
                found: other.map_or("nothing", json_kind),
            })
        }
    };

    let mapping = match route.get("methods") {
        Some(Value::Object(mapping)) => mapping,
        other => {
            return Err(LayerInspectionError::MethodsNotMapping {
                found: other.map_or("nothing", json_kind),
            })
        }
    };

    // `false` flags mark verbs that were switched off
    let methods = mapping
        .iter()
        .filter(|(_, flag)| flag.as_bool() != Some(false))
        .map(|(token, _)| {
            token
                .parse::<Method>()
                .map_err(|_| LayerInspectionError::UnknownMethod(token.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RouteEntry { path, methods })
}
