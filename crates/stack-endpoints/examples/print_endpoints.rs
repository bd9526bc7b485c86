// Example: Listing the endpoints of a small application
//
// Builds a router with a mounted sub-router, a few direct routes and a
// catch-all, then prints its endpoints in the configured style followed by
// a compact colored listing.
//
// To run this example:
//   cargo run -p stack-endpoints --example print_endpoints
//
// Presentation can be tuned through ./endpoints.toml:
//
//   [presentation]
//   prefix = "My-Api"
//   use_color = true

use anyhow::Result;
use stack_endpoints::{Endpoints, EndpointsConfig, PresentationOptions, SnapshotRouter};
use stack_router::{Method, Router};
use tracing::info;

fn build_app() -> Result<Router> {
    let mut tags = Router::new();
    tags.get("/single", "tags::single")?;
    tags.post("", "tags::create")?;
    tags.put("/:id", "tags::update")?;
    tags.delete("/:id", "tags::remove")?;

    let mut v1 = Router::new();
    v1.route("/status", &[Method::Get, Method::Head], "status")?;

    let mut app = Router::new();
    app.use_middleware("request_logger");
    app.mount("/tags", tags)?;
    app.mount("/api/v1", v1)?;
    app.get("/testGet", "test_get")?;
    app.post("/testPost", "test_post")?;
    app.use_error_handler("render_error");
    app.all("*", "not_found")?;

    Ok(app)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let app = build_app()?;
    let config = EndpointsConfig::load_default()?;

    let endpoints = Endpoints::from_router(&app);
    info!(count = endpoints.len(), "extracted endpoints");

    endpoints.print(&config.presentation)?;
    println!();

    // A snapshot lists the same endpoints as the live router
    let snapshot = SnapshotRouter::from_router(&app)?;
    Endpoints::from_router(&snapshot).print(&PresentationOptions::default().with_color(true).compact())?;

    Ok(())
}
