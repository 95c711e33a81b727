//! Routes Module
//!
//! Route configuration for the HTTP API.
//!
//! - **`router`** - top-level router: health check, fallback, tracing and CORS
//! - **`api_routes`** - `/user/*`, `/topic/*` and `/conversation/*` endpoints

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

pub use router::create_router;
