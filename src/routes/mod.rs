// ABOUTME: Route module organization for the recipe agent HTTP endpoints
// ABOUTME: Builds the axum router with shared state, request deadline, tracing and CORS layers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Route module for the Recipe Adjuster Agent
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the [`TaskDispatcher`].

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::Router;
use recipe_core::constants::defaults;
use tower_http::trace::TraceLayer;

use crate::a2a::AgentCard;
use crate::agent::TaskDispatcher;
use crate::config::ServerConfig;
use crate::middleware::{create_request_span, setup_cors};

/// Agent-to-Agent (A2A) JSON-RPC and discovery routes
pub mod a2a;
/// Health check route
pub mod health;
/// Direct recipe scaling and ingredient parsing routes
pub mod recipes;
/// Event webhook route
pub mod webhook;

pub use a2a::A2ARoutes;
pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;
pub use webhook::WebhookRoutes;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Message dispatcher and its services
    pub dispatcher: Arc<TaskDispatcher>,
    /// Discovery card served at the well-known URI
    pub agent_card: Arc<AgentCard>,
    /// Deadline for dispatching one request; the in-flight work is dropped when it passes
    pub request_timeout: Duration,
}

impl AppState {
    /// Create state from a dispatcher and the server's public base URL
    #[must_use]
    pub fn new(dispatcher: TaskDispatcher, base_url: &str) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            agent_card: Arc::new(AgentCard::new(base_url)),
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
        }
    }

    /// Replace the request deadline
    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

/// Every route without middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(A2ARoutes::routes(state.clone()))
        .merge(RecipeRoutes::routes(state.clone()))
        .merge(WebhookRoutes::routes(state))
        .merge(HealthRoutes::routes())
}

/// Full application: every route plus tracing and CORS layers
///
/// The configured request timeout is applied by the handlers themselves so
/// an expired request still answers with a JSON body.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let state = state.with_request_timeout(Duration::from_secs(config.request_timeout_secs));
    router(state)
        .layer(setup_cors(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span::<Body>))
}
