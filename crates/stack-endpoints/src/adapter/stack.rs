use stack_router::{Layer, LayerHandle, LayerMatcher, Router};

use super::{LayerKind, Matcher, RouteEntry, RouterAdapter};
use crate::LayerInspectionError;

impl RouterAdapter for Router {
    type Layer = Layer;

    fn layers(&self) -> Option<&[Layer]> {
        Some(self.stack())
    }

    fn inspect(&self, layer: &Layer) -> Result<LayerKind, LayerInspectionError> {
        Ok(decode_layer(layer))
    }
}

fn decode_layer(layer: &Layer) -> LayerKind {
    match &layer.handle {
        LayerHandle::Route(route) => LayerKind::Direct(RouteEntry {
            path: route.path.clone(),
            methods: route.methods.clone(),
        }),
        LayerHandle::Router(nested) => LayerKind::Mounted {
            matcher: match &layer.matcher {
                LayerMatcher::MatchAll => Matcher::MatchAll,
                LayerMatcher::Pattern(pattern) => Matcher::Pattern(pattern.source().to_string()),
            },
            stack: nested.stack().iter().map(|layer| Ok(decode_layer(layer))).collect(),
        },
        LayerHandle::Middleware | LayerHandle::ErrorHandler => LayerKind::Other,
    }
}
