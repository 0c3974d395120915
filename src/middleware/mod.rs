// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides the CORS layer and the per-request tracing span used by the router

pub mod cors;
pub mod tracing;

// CORS configuration
pub use self::cors::setup_cors;

// Request tracing
pub use self::tracing::{create_request_span, request_id};
