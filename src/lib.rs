// ABOUTME: Main library entry point for the recipe adjuster agent
// ABOUTME: Provides the A2A JSON-RPC agent, recipe scaling and ingredient parsing services
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Recipe Adjuster Agent
//!
//! An A2A (Agent-to-Agent) agent that scales recipes to a new serving count,
//! parses free-text ingredient lists into structured records, and serves a
//! cooking tip of the day.
//!
//! ## Features
//!
//! - **A2A protocol**: JSON-RPC 2.0 `message/send` with one terminal task per message
//! - **Recipe scaling**: Proportional quantities with optional metric conversion
//! - **Ingredient parsing**: Free text to `{name, quantity, unit}` via Spoonacular
//! - **Daily tips**: Deterministic tip selection keyed by day of month
//!
//! ## Architecture
//!
//! - **Agent**: Intent classification and task dispatch
//! - **Recipes**: Schemas, scaling and the tip catalogue
//! - **Services**: Collaborator traits the dispatcher depends on
//! - **External**: Spoonacular client and in-memory fakes
//! - **Routes**: axum HTTP surface
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use recipe_adjuster_agent::a2a::A2AMessage;
//! use recipe_adjuster_agent::agent::TaskDispatcher;
//! use recipe_adjuster_agent::external::mock::{FixedTipProvider, StaticIngredientParser, UnavailableConversionService};
//!
//! # async fn run() {
//! let dispatcher = TaskDispatcher::new(
//!     Arc::new(UnavailableConversionService),
//!     Arc::new(StaticIngredientParser::default()),
//!     Arc::new(FixedTipProvider("Taste as you go.".into())),
//! );
//! let task = dispatcher.dispatch(A2AMessage::user_text("tip")).await;
//! assert!(task.is_completed());
//! # }
//! ```

/// A2A (Agent-to-Agent) protocol wire types and task results
pub mod a2a;

/// Intent classification and task dispatch
pub mod agent;

/// Configuration management
pub mod config;

/// Unified error handling re-exported from `recipe-core`
pub mod errors;

/// Remote service clients and test doubles
pub mod external;

/// JSON-RPC 2.0 envelope types
pub mod jsonrpc;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Recipe domain logic
pub mod recipes;

/// HTTP routes
pub mod routes;

/// Collaborator service traits
pub mod services;

/// Shared request-handling helpers
pub mod utils;
