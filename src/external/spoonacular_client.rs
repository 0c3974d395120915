// ABOUTME: Spoonacular API client for unit conversion and ingredient list parsing
// ABOUTME: Conversion failures degrade to no conversion; parse failures are hard errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Spoonacular API Client
//!
//! Backs both remote collaborators of the dispatcher:
//! - `GET /recipes/convert` for [`ConversionService`]
//! - `POST /recipes/parseIngredients` for [`IngredientParsingService`]
//!
//! No caching and no retries. Every call needs an API key; a client built
//! without one fails each call with a configuration error.
//!
//! # API Reference
//! Spoonacular: <https://spoonacular.com/food-api/docs>
//!
//! # Example
//! ```rust,no_run
//! use recipe_adjuster_agent::external::{SpoonacularClient, SpoonacularClientConfig};
//! use recipe_adjuster_agent::services::ConversionService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SpoonacularClient::new(SpoonacularClientConfig {
//!     api_key: Some("your_api_key".to_owned()),
//!     ..SpoonacularClientConfig::default()
//! })?;
//! let converted = client.convert("flour", 2.0, "cups").await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use recipe_core::constants::{defaults, env_vars, service_names::SPOONACULAR};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};
use crate::recipes::conversion::target_unit_for;
use crate::recipes::schema::Ingredient;
use crate::services::{ConversionService, ConvertedAmount, IngredientParsingService};

/// Spoonacular client configuration
#[derive(Debug, Clone)]
pub struct SpoonacularClientConfig {
    /// API key; calls fail with a configuration error when absent
    pub api_key: Option<String>,
    /// Base URL (default: <https://api.spoonacular.com>)
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SpoonacularClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: defaults::SPOONACULAR_BASE_URL.to_owned(),
            timeout_secs: defaults::SPOONACULAR_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConvertResponse {
    target_amount: Option<f64>,
    target_unit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ParsedIngredientResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    amount: Option<f64>,
    #[serde(default)]
    unit: Option<String>,
}

impl From<ParsedIngredientResponse> for Ingredient {
    fn from(parsed: ParsedIngredientResponse) -> Self {
        Self {
            name: parsed.name.unwrap_or_default(),
            quantity: parsed.amount.unwrap_or(0.0),
            unit: parsed.unit.unwrap_or_default(),
        }
    }
}

/// Spoonacular API client
pub struct SpoonacularClient {
    config: SpoonacularClientConfig,
    http_client: reqwest::Client,
}

impl SpoonacularClient {
    /// Create a client with its own connection pool
    ///
    /// # Errors
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: SpoonacularClientConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn api_key(&self) -> AppResult<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::config_missing(env_vars::SPOON_KEY))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    async fn request_conversion(
        &self,
        api_key: &str,
        ingredient_name: &str,
        amount: f64,
        source_unit: &str,
        target_unit: &str,
    ) -> AppResult<Option<ConvertedAmount>> {
        let source_amount = amount.to_string();
        let response = self
            .http_client
            .get(self.url("/recipes/convert"))
            .query(&[
                ("ingredientName", ingredient_name),
                ("sourceAmount", source_amount.as_str()),
                ("sourceUnit", source_unit),
                ("targetUnit", target_unit),
                ("apiKey", api_key),
            ])
            .send()
            .await
            .map_err(|e| AppError::external_unavailable(SPOONACULAR, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                SPOONACULAR,
                format!(
                    "HTTP {status}: {}",
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        let body: ConvertResponse = response.json().await.map_err(|e| {
            AppError::external_service(SPOONACULAR, format!("JSON parse error: {e}"))
        })?;

        Ok(body.target_amount.map(|amount| ConvertedAmount {
            amount,
            unit: body.target_unit.unwrap_or_else(|| target_unit.to_owned()),
        }))
    }
}

#[async_trait]
impl ConversionService for SpoonacularClient {
    async fn convert(
        &self,
        ingredient_name: &str,
        amount: f64,
        source_unit: &str,
    ) -> AppResult<Option<ConvertedAmount>> {
        let api_key = self.api_key()?;
        let target_unit = target_unit_for(ingredient_name);

        match self
            .request_conversion(api_key, ingredient_name, amount, source_unit, target_unit)
            .await
        {
            Ok(converted) => {
                debug!(
                    ingredient.name = %ingredient_name,
                    target_unit,
                    converted = converted.is_some(),
                    "Spoonacular conversion"
                );
                Ok(converted)
            }
            Err(e) => {
                warn!(
                    ingredient.name = %ingredient_name,
                    source_unit,
                    target_unit,
                    error = %e,
                    "Unit conversion unavailable"
                );
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl IngredientParsingService for SpoonacularClient {
    async fn parse_ingredients(&self, text: &str, servings: u32) -> AppResult<Vec<Ingredient>> {
        let api_key = self.api_key()?;
        let servings = servings.to_string();

        let response = self
            .http_client
            .post(self.url("/recipes/parseIngredients"))
            .query(&[("apiKey", api_key), ("servings", servings.as_str())])
            .form(&[("ingredientList", text), ("servings", servings.as_str())])
            .send()
            .await
            .map_err(|e| AppError::external_unavailable(SPOONACULAR, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                SPOONACULAR,
                format!(
                    "HTTP {status}: {}",
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        let parsed: Vec<ParsedIngredientResponse> = response.json().await.map_err(|e| {
            AppError::external_service(SPOONACULAR, format!("JSON parse error: {e}"))
        })?;

        debug!(count = parsed.len(), "Spoonacular parsed ingredients");
        Ok(parsed.into_iter().map(Ingredient::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn client_without_key() -> SpoonacularClient {
        SpoonacularClient::new(SpoonacularClientConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_is_config_error() {
        let client = client_without_key();

        let error = client.convert("flour", 1.0, "cup").await.unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        assert!(error.message.contains("SPOON_KEY"));

        let error = client.parse_ingredients("1 egg", 1).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigMissing);
    }

    #[tokio::test]
    async fn test_empty_key_counts_as_missing() {
        let client = SpoonacularClient::new(SpoonacularClientConfig {
            api_key: Some(String::new()),
            ..SpoonacularClientConfig::default()
        })
        .unwrap();
        assert!(client.convert("milk", 1.0, "cup").await.is_err());
    }

    #[test]
    fn test_parsed_ingredient_defaults() {
        let parsed: ParsedIngredientResponse =
            serde_json::from_str(r#"{"name": "egg", "unit": null}"#).unwrap();
        let ingredient = Ingredient::from(parsed);
        assert_eq!(ingredient.name, "egg");
        assert_eq!(ingredient.unit, "");
        assert!(ingredient.quantity.abs() < f64::EPSILON);
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = SpoonacularClient::new(SpoonacularClientConfig {
            base_url: "http://localhost:9999/".to_owned(),
            ..SpoonacularClientConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.url("/recipes/convert"),
            "http://localhost:9999/recipes/convert"
        );
    }
}
