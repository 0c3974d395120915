// ABOUTME: A2A agent card advertising the recipe agent's skills for discovery
// ABOUTME: Served from the well-known URI so peers can find the JSON-RPC endpoint
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Agent Card Implementation
//!
//! Describes what the agent can do (daily tip, ingredient parsing, recipe
//! scaling) and where its `message/send` endpoint lives.

use recipe_core::constants::{endpoints, protocol, service_names};
use serde::{Deserialize, Serialize};

/// A2A Agent Card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    /// Display name
    pub name: String,
    /// What the agent does
    pub description: String,
    /// JSON-RPC endpoint URL
    pub url: String,
    /// Agent version
    pub version: String,
    /// A2A protocol version implemented
    pub protocol_version: String,
    /// Optional protocol features
    pub capabilities: AgentCapabilities,
    /// Accepted input MIME types
    pub default_input_modes: Vec<String>,
    /// Produced output MIME types
    pub default_output_modes: Vec<String>,
    /// Advertised skills
    pub skills: Vec<AgentSkill>,
}

/// Optional protocol features
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    /// Server-sent streaming support
    pub streaming: bool,
    /// Push notification support
    pub push_notifications: bool,
    /// Whether task state transitions are kept
    pub state_transition_history: bool,
}

/// A single skill in the card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSkill {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// What the skill does
    pub description: String,
    /// Search tags
    pub tags: Vec<String>,
    /// Example user inputs
    pub examples: Vec<String>,
}

impl AgentCard {
    /// Create the card for an agent reachable at `base_url`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            name: service_names::RECIPE_AGENT_DISPLAY.into(),
            description: "Scales recipe quantities to a new serving count, parses free-text \
                          ingredient lists into structured data and shares a daily cooking tip."
                .into(),
            url: format!("{}{}", base_url.trim_end_matches('/'), endpoints::A2A_RECIPE),
            version: env!("CARGO_PKG_VERSION").into(),
            protocol_version: protocol::A2A_PROTOCOL_VERSION.into(),
            capabilities: AgentCapabilities {
                streaming: false,
                push_notifications: false,
                state_transition_history: false,
            },
            default_input_modes: vec!["text/plain".into(), "application/json".into()],
            default_output_modes: vec!["text/plain".into(), "application/json".into()],
            skills: Self::create_skills(),
        }
    }

    fn create_skills() -> Vec<AgentSkill> {
        vec![
            AgentSkill {
                id: "get_daily_tip".into(),
                name: "Daily cooking tip".into(),
                description: "Returns the cooking tip of the day".into(),
                tags: vec!["cooking".into(), "tips".into()],
                examples: vec!["tip".into(), "daily tip".into()],
            },
            AgentSkill {
                id: "parse_ingredients".into(),
                name: "Parse ingredients".into(),
                description: "Turns a free-text ingredient list into name, quantity and unit records"
                    .into(),
                tags: vec!["ingredients".into(), "parsing".into()],
                examples: vec![
                    "parse 2 cups of flour and 1 egg".into(),
                    "3 tbsp olive oil, 1 onion".into(),
                ],
            },
            AgentSkill {
                id: "adjust_recipe".into(),
                name: "Adjust recipe".into(),
                description: "Scales every ingredient of a recipe from its original to a target \
                              serving count and converts units where possible"
                    .into(),
                tags: vec!["recipes".into(), "scaling".into(), "units".into()],
                examples: vec![
                    r#"{"title":"Soup","original_servings":2,"target_servings":4,"ingredients":[{"name":"water","quantity":100,"unit":"ml"}]}"#
                        .into(),
                ],
            },
        ]
    }
}
