// ABOUTME: A2A (Agent-to-Agent) route handlers for JSON-RPC messaging and discovery
// ABOUTME: Serves `message/send` on the recipe endpoint and the well-known agent card
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! A2A protocol routes for agent-to-agent communication

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use recipe_core::constants::{endpoints, error_codes, protocol};
use serde_json::{json, Value};
use tracing::{error, warn};

use super::AppState;
use crate::a2a::{AgentCard, MessageSendParams};
use crate::jsonrpc::{JsonRpcRequest, JsonRpcResponse};
use crate::utils::route_timeout::with_request_timeout;

/// A2A routes implementation
pub struct A2ARoutes;

impl A2ARoutes {
    /// Create all A2A routes
    ///
    /// - `/a2a/recipe` - JSON-RPC 2.0 `message/send`
    /// - `/.well-known/agent.json` - Agent card discovery
    pub fn routes(state: AppState) -> Router {
        Router::new()
            .route(endpoints::A2A_RECIPE, post(Self::handle_jsonrpc))
            .route(endpoints::AGENT_CARD, get(Self::handle_agent_card_discovery))
            .with_state(state)
    }

    /// Handle a JSON-RPC request
    ///
    /// Protocol errors (unknown method, bad params) are answered with HTTP 200
    /// and a JSON-RPC error. A malformed envelope, or a dispatch that outlives
    /// the request timeout, is answered with HTTP 500 and `-32603 Internal error`.
    async fn handle_jsonrpc(State(state): State<AppState>, body: Bytes) -> Response {
        let raw: Value = match serde_json::from_slice(&body) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Rejected request body that is not JSON");
                return internal_error(None, e.to_string());
            }
        };
        let id = raw.get("id").cloned();

        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Rejected malformed JSON-RPC envelope");
                return internal_error(id, e.to_string());
            }
        };

        if request.method != protocol::MESSAGE_SEND {
            return Json(JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ))
            .into_response();
        }

        let params = match request
            .params
            .map(serde_json::from_value::<MessageSendParams>)
        {
            Some(Ok(params)) => params,
            Some(Err(e)) => return invalid_params(request.id, e.to_string()),
            None => return invalid_params(request.id, "params.message is required".to_owned()),
        };

        let dispatch = state.dispatcher.dispatch(params.message);
        let task = match with_request_timeout(state.request_timeout, dispatch).await {
            Ok(task) => task,
            Err(e) => {
                error!(error = %e, "Abandoned task dispatch");
                return internal_error(request.id, e.message);
            }
        };

        match serde_json::to_value(&task) {
            Ok(result) => Json(JsonRpcResponse::success(request.id, result)).into_response(),
            Err(e) => internal_error(request.id, e.to_string()),
        }
    }

    /// Handle agent card discovery endpoint (RFC 8615 well-known URI)
    async fn handle_agent_card_discovery(State(state): State<AppState>) -> Json<AgentCard> {
        Json(state.agent_card.as_ref().clone())
    }
}

fn internal_error(id: Option<Value>, details: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(JsonRpcResponse::internal_error(id, details)),
    )
        .into_response()
}

fn invalid_params(id: Option<Value>, details: String) -> Response {
    Json(JsonRpcResponse::error_with_data(
        id,
        error_codes::INVALID_PARAMS,
        "Invalid params",
        json!({ "details": details }),
    ))
    .into_response()
}
