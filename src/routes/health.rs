// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports liveness together with the service name and version
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Health check route for load balancers and uptime probes

use recipe_core::constants::{endpoints, service_names};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ok",
                "service": service_names::RECIPE_AGENT,
                "version": env!("CARGO_PKG_VERSION"),
            }))
        }

        Router::new().route(endpoints::HEALTH_CHECK, get(health_handler))
    }
}
