// ABOUTME: Event webhook route for scheduler and chat platform callbacks
// ABOUTME: Answers daily clock events with the tip of the day and new messages with usage guidance
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use axum::{extract::State, routing::post, Json, Router};
use recipe_core::constants::{endpoints, webhook_events};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AppState;

const ADJUST_GUIDANCE: &str = "To adjust a recipe, please provide the recipe details including title, original servings, target servings, ingredients, and instructions.";
const GENERIC_GUIDANCE: &str =
    "I'm here to help you adjust recipes! Just let me know what you need.";

/// Incoming webhook event
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookEvent {
    /// Event name such as `clock.daily` or `message.new`
    #[serde(default)]
    pub event: String,
    /// Message text for `message.new`
    #[serde(default)]
    pub text: String,
}

/// Webhook reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookResponse {
    /// Text to post back to the caller
    pub response: String,
}

/// Webhook routes implementation
pub struct WebhookRoutes;

impl WebhookRoutes {
    /// Create the webhook route
    pub fn routes(state: AppState) -> Router {
        Router::new()
            .route(endpoints::WEBHOOK, post(Self::handle_event))
            .with_state(state)
    }

    async fn handle_event(
        State(state): State<AppState>,
        Json(event): Json<WebhookEvent>,
    ) -> Json<WebhookResponse> {
        debug!(event = %event.event, "Webhook event received");

        let response = if event.event == webhook_events::CLOCK_DAILY {
            state.dispatcher.todays_tip()
        } else if event.event == webhook_events::MESSAGE_NEW
            && event
                .text
                .to_lowercase()
                .contains(webhook_events::ADJUST_RECIPE_PHRASE)
        {
            ADJUST_GUIDANCE.to_owned()
        } else {
            GENERIC_GUIDANCE.to_owned()
        };

        Json(WebhookResponse { response })
    }
}
