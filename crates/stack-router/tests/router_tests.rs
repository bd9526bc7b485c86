//! Integration tests for stack-router
//!
//! Tests are organized by feature area and cover:
//! - Registration order and layer kinds
//! - Request lookup through mounted routers
//! - Case sensitivity and strict trailing slashes
//! - Stack snapshots

use pretty_assertions::assert_eq;
use serde_json::json;
use stack_router::*;

fn tags_router() -> Router {
    let mut tags = Router::new();
    tags.get("/single", "single").unwrap();
    tags.post("", "create").unwrap();
    tags.put("/:id", "update").unwrap();
    tags.delete("/:id", "remove").unwrap();
    tags
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_empty_router_has_empty_stack() {
    assert!(Router::new().stack().is_empty());
}

#[test]
fn test_layer_kinds() {
    let mut app = Router::new();
    app.mount("/tags", tags_router()).unwrap();
    app.get("/testGet", "get").unwrap();
    app.use_error_handler("on_error");
    app.use_middleware("compression");

    let stack = app.stack();
    assert_eq!(stack.len(), 4);
    assert!(matches!(stack[0].handle, LayerHandle::Router(_)));
    assert!(matches!(stack[1].handle, LayerHandle::Route(_)));
    assert!(matches!(stack[2].handle, LayerHandle::ErrorHandler));
    assert!(matches!(stack[3].handle, LayerHandle::Middleware));
    assert_eq!(stack[2].name, "on_error");
}

#[test]
fn test_mount_pattern_source() {
    let mut app = Router::new();
    app.mount("/tags", tags_router()).unwrap();

    match &app.stack()[0].matcher {
        LayerMatcher::Pattern(pattern) => assert_eq!(pattern.source(), r"^\/tags\/?(?:\/|$)"),
        LayerMatcher::MatchAll => panic!("expected a compiled pattern"),
    }
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_lookup_direct_route() {
    let mut app = Router::new();
    app.get("/testGet", "get").unwrap();

    let found = app.lookup(Method::Get, "/testGet").unwrap();
    assert_eq!(found.route_path, "/testGet");
    assert!(found.params.is_empty());
}

#[test]
fn test_lookup_through_mount() {
    let mut app = Router::new();
    app.mount("/tags", tags_router()).unwrap();

    let found = app.lookup(Method::Put, "/tags/7").unwrap();
    assert_eq!(found.handler, "update");
    assert_eq!(found.params.get("id"), Some(&"7".to_string()));

    let found = app.lookup(Method::Post, "/tags").unwrap();
    assert_eq!(found.handler, "create");
}

#[test]
fn test_lookup_first_registered_wins() {
    let mut app = Router::new();
    app.get("/:name", "by_name").unwrap();
    app.get("/about", "about").unwrap();

    assert_eq!(app.lookup(Method::Get, "/about").unwrap().handler, "by_name");
}

#[test]
fn test_lookup_merges_mount_params() {
    let mut repos = Router::new();
    repos.get("/repos/:repo", "repo").unwrap();

    let mut app = Router::new();
    app.mount("/orgs/:org", repos).unwrap();

    let found = app.lookup(Method::Get, "/orgs/acme/repos/widgets").unwrap();
    assert_eq!(found.params.get("org"), Some(&"acme".to_string()));
    assert_eq!(found.params.get("repo"), Some(&"widgets".to_string()));
}

#[test]
fn test_lookup_nested_mounts() {
    let mut v1 = Router::new();
    v1.get("/status", "status").unwrap();

    let mut api = Router::new();
    api.mount("/v1", v1).unwrap();

    let mut app = Router::new();
    app.mount("/api", api).unwrap();

    assert_eq!(app.lookup(Method::Get, "/api/v1/status").unwrap().handler, "status");
    assert!(app.lookup(Method::Get, "/api/status").is_none());
}

#[test]
fn test_lookup_root_mount() {
    let mut app = Router::new();
    app.mount("/", tags_router()).unwrap();

    assert_eq!(app.lookup(Method::Get, "/single").unwrap().handler, "single");
}

#[test]
fn test_lookup_wildcard_fallback() {
    let mut app = Router::new();
    app.get("/known", "known").unwrap();
    app.all("*", "not_found").unwrap();

    assert_eq!(app.lookup(Method::Get, "/known").unwrap().handler, "known");
    assert_eq!(app.lookup(Method::Patch, "/nope/deep").unwrap().handler, "not_found");
}

#[test]
fn test_lookup_normalizes_request_path() {
    let mut app = Router::new();
    app.mount("/tags", tags_router()).unwrap();

    assert!(app.lookup(Method::Get, "/tags//single/?x=1").is_some());
}

#[test]
fn test_lookup_ignores_middleware() {
    let mut app = Router::new();
    app.use_middleware("logger");

    assert!(app.lookup(Method::Get, "/").is_none());
}

#[test]
fn test_case_sensitive_router() {
    let mut app = Router::new().with_case_sensitive(true);
    app.get("/About", "about").unwrap();

    assert!(app.lookup(Method::Get, "/About").is_some());
    assert!(app.lookup(Method::Get, "/about").is_none());
}

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn test_snapshot_shape() {
    let mut app = Router::new();
    app.mount("/tags", tags_router()).unwrap();
    app.route("/items", &[Method::Post, Method::Get], "items").unwrap();
    app.use_middleware("cors");

    let snapshot = app.snapshot().unwrap();

    assert_eq!(
        snapshot["stack"][0]["regexp"],
        json!({ "source": r"^\/tags\/?(?:\/|$)", "fast_slash": false })
    );
    assert_eq!(snapshot["stack"][0]["name"], "router");
    assert_eq!(snapshot["stack"][0]["handle"]["stack"][2]["route"]["path"], "/:id");

    let methods = snapshot["stack"][1]["route"]["methods"].as_object().unwrap();
    let tokens: Vec<&String> = methods.keys().collect();
    assert_eq!(tokens, vec!["post", "get"]);

    assert_eq!(snapshot["stack"][2], json!({
        "name": "cors",
        "regexp": { "source": r"^\/?(?:\/|$)", "fast_slash": true }
    }));
}
