//! # Stack Endpoints
//!
//! Lists the endpoints registered on a layered router: method, full path, and
//! whether the route was registered directly or reached through a mounted
//! sub-router.
//!
//! - **Extractor** ([`extract`], [`Endpoints`]): one pass over the router's stack
//! - **Pattern decoder** ([`decode`]): turns compiled mount patterns back into
//!   literal prefixes, or a `<complex:SOURCE>` marker
//! - **Presenter** ([`present`]): console lines with optional prefix and colors
//!
//! Routers are read through [`RouterAdapter`]. Adapters ship for
//! [`stack_router::Router`] and for JSON snapshots of a router stack
//! ([`SnapshotRouter`]).
//!
//! ## Example
//!
//! ```
//! use stack_endpoints::{Endpoints, PresentationOptions};
//! use stack_router::Router;
//!
//! let mut tags = Router::new();
//! tags.get("/single", "single").unwrap();
//! tags.put("/:id", "update").unwrap();
//!
//! let mut app = Router::new();
//! app.mount("/tags", tags).unwrap();
//! app.all("*", "not_found").unwrap();
//!
//! let endpoints = Endpoints::from_router(&app);
//! let paths: Vec<&str> = endpoints.iter().map(|e| e.path()).collect();
//! assert_eq!(paths, vec!["/tags/single", "/tags/:id", "/*"]);
//!
//! let mut out = Vec::new();
//! endpoints
//!     .write_to(&mut out, &PresentationOptions::default().with_prefix("My-Api"))
//!     .unwrap();
//! ```

pub mod adapter;
pub mod config;
pub mod decode;
mod error;
mod extract;
pub mod present;
mod record;

pub use adapter::{LayerKind, Matcher, RouteEntry, RouterAdapter, SnapshotRouter};
pub use config::EndpointsConfig;
pub use decode::decode;
pub use error::LayerInspectionError;
pub use extract::{extract, Endpoints};
pub use present::PresentationOptions;
pub use record::{join_path, EndpointMethod, EndpointRecord, Origin};
