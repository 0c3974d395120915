// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Intent keywords, artifact names, unit targeting table, protocol codes and defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Keywords recognised in free-text user messages
pub mod intents {
    /// Exact (lowercased, trimmed) messages answered with the help text
    pub const GREETINGS: &[&str] = &["hi", "hello", "help", "info", "start"];

    /// Exact (lowercased, trimmed) messages that request the daily tip
    pub const TIP_ALIASES: &[&str] = &["tip", "get daily tip", "daily tip"];

    /// Command word for an explicit ingredient parse request
    pub const PARSE_COMMAND: &str = "parse";

    /// Value of `task` in a data part that requests the daily tip
    pub const TIP_TASK: &str = "get_daily_tip";

    /// Servings assumed when free text is parsed as an ingredient list
    pub const DEFAULT_PARSE_SERVINGS: u32 = 1;
}

/// Names of artifacts attached to completed tasks
pub mod artifacts {
    /// Text artifact carrying the tip of the day
    pub const DAILY_TIP: &str = "daily_tip";
    /// Data artifact carrying a scaled recipe
    pub const ADJUSTED_RECIPE: &str = "adjusted_recipe";
    /// Data artifact carrying structured ingredients under `ingredients`
    pub const PARSED_INGREDIENTS: &str = "parsed_ingredients";
    /// Key of the ingredient list inside the parsed ingredients artifact
    pub const INGREDIENTS_KEY: &str = "ingredients";
}

/// Conversion target units chosen from ingredient names
pub mod units {
    /// Target unit for liquids
    pub const MILLILITERS: &str = "ml";
    /// Target unit for dry goods and the fallback
    pub const GRAMS: &str = "grams";

    /// Name substrings that select milliliters
    pub const LIQUID_KEYWORDS: &[&str] = &["milk", "water", "oil", "juice", "cream"];

    /// Name substrings that select grams
    pub const DRY_KEYWORDS: &[&str] = &["flour", "sugar", "rice", "salt", "powder", "spice"];

    /// Decimal places kept on scaled and converted quantities
    pub const QUANTITY_DECIMALS: i32 = 2;
}

/// A2A and JSON-RPC protocol constants
pub mod protocol {
    /// JSON-RPC version string
    pub const JSONRPC_VERSION: &str = "2.0";
    /// The only JSON-RPC method served by the agent endpoint
    pub const MESSAGE_SEND: &str = "message/send";
    /// A2A protocol version advertised in the agent card
    pub const A2A_PROTOCOL_VERSION: &str = "0.3.0";
}

/// Standard JSON-RPC error codes
pub mod error_codes {
    /// Parse error - Invalid JSON
    pub const PARSE_ERROR: i32 = -32700;
    /// Invalid Request - Invalid JSON-RPC
    pub const INVALID_REQUEST: i32 = -32600;
    /// Method not found
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid params
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal error
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Service identification
pub mod service_names {
    /// Service name used in logs, health and the agent card
    pub const RECIPE_AGENT: &str = "recipe-adjuster-agent";
    /// Display name of the agent
    pub const RECIPE_AGENT_DISPLAY: &str = "Recipe Adjuster Agent";
    /// Name of the remote nutrition API
    pub const SPOONACULAR: &str = "Spoonacular API";
}

/// Environment variable names
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Legacy listen port name
    pub const PORT: &str = "PORT";
    /// HTTP listen address
    pub const HOST: &str = "HOST";
    /// Spoonacular API key
    pub const SPOON_KEY: &str = "SPOON_KEY";
    /// Spoonacular base URL override
    pub const SPOONACULAR_BASE_URL: &str = "SPOONACULAR_BASE_URL";
    /// Per-call timeout for Spoonacular requests
    pub const SPOONACULAR_TIMEOUT_SECS: &str = "SPOONACULAR_TIMEOUT_SECS";
    /// Overall HTTP request timeout
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 5001;
    /// Default listen address
    pub const HOST: &str = "0.0.0.0";
    /// Default Spoonacular API base URL
    pub const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";
    /// Default Spoonacular request timeout in seconds
    pub const SPOONACULAR_TIMEOUT_SECS: u64 = 10;
    /// Default overall request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default CORS policy (any origin)
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Event names accepted by the webhook endpoint
pub mod webhook_events {
    /// Scheduled daily trigger; answered with the tip of the day
    pub const CLOCK_DAILY: &str = "clock.daily";
    /// New chat message; answered with usage guidance
    pub const MESSAGE_NEW: &str = "message.new";
    /// Phrase in a new message that selects the recipe-adjustment guidance
    pub const ADJUST_RECIPE_PHRASE: &str = "adjust recipe";
}

/// HTTP endpoint paths
pub mod endpoints {
    /// JSON-RPC A2A endpoint
    pub const A2A_RECIPE: &str = "/a2a/recipe";
    /// Direct recipe scaling endpoint
    pub const ADJUST: &str = "/adjust";
    /// Direct ingredient parsing endpoint
    pub const PARSE: &str = "/parse";
    /// Event webhook endpoint
    pub const WEBHOOK: &str = "/webhook";
    /// Agent card discovery (RFC 8615 well-known URI)
    pub const AGENT_CARD: &str = "/.well-known/agent.json";
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
}
