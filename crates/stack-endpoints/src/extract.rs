//! Endpoint extraction
//!
//! One pass over a router's stack, in registration order. Direct routes that
//! carry every known verb collapse to a single `ALL` record; routes reached
//! through mounted routers are listed verb by verb under their full path.

use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::adapter::{LayerKind, RouteEntry, RouterAdapter};
use crate::decode::decode;
use crate::present::{self, PresentationOptions};
use crate::record::{join_path, EndpointMethod, EndpointRecord, Origin};
use crate::LayerInspectionError;

/// Extracts every endpoint registered on `router`
///
/// Layers that cannot be inspected are logged at `warn` level and skipped.
/// A router without a stack yields an empty list.
///
/// # Examples
///
/// ```
/// use stack_endpoints::{extract, Origin};
/// use stack_router::Router;
///
/// let mut app = Router::new();
/// app.get("/testGet", "get").unwrap();
///
/// let records = extract(&app);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].origin(), Origin::Direct);
/// assert_eq!(records[0].method().to_string(), "GET");
/// assert_eq!(records[0].path(), "/testGet");
/// ```
pub fn extract<A>(router: &A) -> Vec<EndpointRecord>
where
    A: RouterAdapter + ?Sized,
{
    let Some(layers) = router.layers() else {
        debug!("router exposes no layer stack, nothing to extract");
        return Vec::new();
    };

    let mut records = Vec::new();

    for (index, layer) in layers.iter().enumerate() {
        match router.inspect(layer) {
            Ok(LayerKind::Direct(route)) => push_direct(&route, &mut records),
            Ok(LayerKind::Mounted { matcher, stack }) => {
                let mut prefixes = vec![decode(&matcher)];
                push_mounted(&stack, &mut prefixes, &mut records);
            }
            Ok(LayerKind::Other) => trace!(layer = index, "skipping layer without a route"),
            Err(err) => warn!(layer = index, error = %err, "failed to inspect router layer, skipping it"),
        }
    }

    debug!(layers = layers.len(), endpoints = records.len(), "extracted endpoints");
    records
}

fn push_direct(route: &RouteEntry, records: &mut Vec<EndpointRecord>) {
    if EndpointMethod::covers_all(&route.methods) {
        records.push(EndpointRecord::new(
            Origin::Direct,
            EndpointMethod::All,
            join_path(&[], &route.path),
        ));
        return;
    }

    records.extend(
        route
            .methods
            .iter()
            .map(|method| EndpointRecord::new(Origin::Direct, *method, join_path(&[], &route.path))),
    );
}

fn push_mounted(
    stack: &[Result<LayerKind, LayerInspectionError>],
    prefixes: &mut Vec<Vec<String>>,
    records: &mut Vec<EndpointRecord>,
) {
    for (index, entry) in stack.iter().enumerate() {
        match entry {
            Ok(LayerKind::Direct(route)) => {
                let path = join_path(prefixes, &route.path);
                records.extend(
                    route
                        .methods
                        .iter()
                        .map(|method| EndpointRecord::new(Origin::Mounted, *method, path.clone())),
                );
            }
            Ok(LayerKind::Mounted { matcher, stack }) => {
                prefixes.push(decode(matcher));
                push_mounted(stack, prefixes, records);
                prefixes.pop();
            }
            Ok(LayerKind::Other) => {}
            Err(err) => warn!(
                nested_layer = index,
                depth = prefixes.len(),
                error = %err,
                "failed to inspect mounted router layer, skipping it"
            ),
        }
    }
}

/// Endpoints extracted from one router, ready to print or serialize
///
/// # Examples
///
/// ```
/// use stack_endpoints::{Endpoints, PresentationOptions};
/// use stack_router::Router;
///
/// let mut app = Router::new();
/// app.post("/testPost", "post").unwrap();
///
/// let endpoints = Endpoints::from_router(&app);
/// let mut out = Vec::new();
/// endpoints.write_to(&mut out, &PresentationOptions::default().compact()).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "POST        /testPost\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Endpoints {
    items: Vec<EndpointRecord>,
}

impl Endpoints {
    pub fn from_router<A>(router: &A) -> Self
    where
        A: RouterAdapter + ?Sized,
    {
        Self {
            items: extract(router),
        }
    }

    pub fn items(&self) -> &[EndpointRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EndpointRecord> {
        self.items.iter()
    }

    /// Writes one formatted line per endpoint to `sink`
    pub fn write_to<W: Write>(&self, sink: &mut W, options: &PresentationOptions) -> io::Result<()> {
        present::print(&self.items, options, sink)
    }

    /// Writes one formatted line per endpoint to standard output
    pub fn print(&self, options: &PresentationOptions) -> io::Result<()> {
        present::print_stdout(&self.items, options)
    }
}

impl From<Vec<EndpointRecord>> for Endpoints {
    fn from(items: Vec<EndpointRecord>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Endpoints {
    type Item = &'a EndpointRecord;
    type IntoIter = std::slice::Iter<'a, EndpointRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Endpoints {
    type Item = EndpointRecord;
    type IntoIter = std::vec::IntoIter<EndpointRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
