// ABOUTME: Direct recipe route handlers outside the A2A protocol
// ABOUTME: Scales a posted recipe and parses posted ingredient text through the dispatcher services
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Plain JSON endpoints for recipe scaling and ingredient parsing
//!
//! Bodies are validated with the same schemas the A2A dispatcher uses, and
//! failures render as the standard [`AppError`](crate::errors::AppError) body.
//! A request that outlives the state's timeout answers 500 `INTERNAL_ERROR`.

use axum::{extract::State, routing::post, Json, Router};
use recipe_core::constants::endpoints;
use serde_json::{json, Value};

use super::AppState;
use crate::errors::AppResult;
use crate::recipes::{parse_as, AdjustedRecipe, ParseRequest, RecipeInput};
use crate::utils::route_timeout::with_request_timeout;

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create the direct recipe routes
    pub fn routes(state: AppState) -> Router {
        Router::new()
            .route(endpoints::ADJUST, post(Self::handle_adjust))
            .route(endpoints::PARSE, post(Self::handle_parse))
            .with_state(state)
    }

    async fn handle_adjust(
        State(state): State<AppState>,
        Json(body): Json<Value>,
    ) -> AppResult<Json<AdjustedRecipe>> {
        let recipe = parse_as::<RecipeInput>(body)?;
        let adjusted =
            with_request_timeout(state.request_timeout, state.dispatcher.adjust_recipe(recipe))
                .await??;
        Ok(Json(adjusted))
    }

    async fn handle_parse(
        State(state): State<AppState>,
        Json(body): Json<Value>,
    ) -> AppResult<Json<Value>> {
        let request = parse_as::<ParseRequest>(body)?;
        let ingredients = with_request_timeout(
            state.request_timeout,
            state.dispatcher.parse_ingredients(request),
        )
        .await??;
        Ok(Json(json!({ "parsed_ingredients": ingredients })))
    }
}
