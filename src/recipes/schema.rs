// ABOUTME: Schema validators for the structured recipe and ingredient-parse payloads
// ABOUTME: Distinguishes structural mismatch from semantic rejection without exception-style control flow
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Payload schemas
//!
//! Two structured payloads are accepted: a full [`RecipeInput`] and a
//! [`ParseRequest`]. They are structurally disjoint (`title` + `ingredients`
//! versus `ingredient_text`). [`try_parse_as`] reports whether a raw object
//! matched a schema, matched it but failed validation, or did not match.

use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use recipe_core::constants::intents;

/// Treats an explicit `null` like a missing string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a serving count written as an integer or an integral float (`2.0`)
fn servings_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(count) = number.as_u64() {
        return u32::try_from(count).map_err(serde::de::Error::custom);
    }
    let whole = number
        .as_f64()
        .filter(|value| value.fract().abs() < f64::EPSILON)
        .filter(|value| (0.0..=f64::from(u32::MAX)).contains(value));
    whole.map(|value| value as u32).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "serving count must be a whole non-negative number, got {number}"
        ))
    })
}

const fn default_servings() -> u32 {
    intents::DEFAULT_PARSE_SERVINGS
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Amount in `unit`
    pub quantity: f64,
    /// Unit of measure; may be empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub unit: String,
}

/// Full recipe to be scaled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeInput {
    /// Recipe title
    pub title: String,
    /// Servings the quantities are written for
    #[serde(deserialize_with = "servings_count")]
    pub original_servings: u32,
    /// Servings wanted
    #[serde(deserialize_with = "servings_count")]
    pub target_servings: u32,
    /// Ingredient lines in recipe order
    pub ingredients: Vec<Ingredient>,
    /// Preparation steps, passed through unchanged
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instructions: String,
}

/// Request to parse free-text ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseRequest {
    /// Free-form ingredient list
    pub ingredient_text: String,
    /// Servings the list is written for
    #[serde(default = "default_servings", deserialize_with = "servings_count")]
    pub servings: u32,
}

impl ParseRequest {
    /// Parse request for free text with the default serving count
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            ingredient_text: text.into(),
            servings: intents::DEFAULT_PARSE_SERVINGS,
        }
    }

    /// Whether there is anything to parse
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredient_text.trim().is_empty()
    }
}

/// Scaled ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedIngredient {
    /// Ingredient name
    pub name: String,
    /// Scaled quantity, rounded to 2 decimals
    pub quantity: f64,
    /// Original unit
    pub unit: String,
    /// Quantity in `converted_unit`, when a conversion was available
    pub converted_amount: Option<f64>,
    /// Target unit of the conversion, when one was available
    pub converted_unit: Option<String>,
}

/// Scaled recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedRecipe {
    /// Recipe title
    pub title: String,
    /// Servings of the input recipe
    pub original_servings: u32,
    /// Servings the quantities now serve
    pub target_servings: u32,
    /// Scaled ingredients in input order
    pub adjusted_ingredients: Vec<AdjustedIngredient>,
    /// Preparation steps
    pub instructions: String,
}

/// A structured payload type that can be recognised in a raw JSON object
pub trait TaskSchema: DeserializeOwned {
    /// Schema name used in validation messages
    const NAME: &'static str;

    /// Semantic checks run after a successful structural decode
    fn validate(&self) -> AppResult<()> {
        Ok(())
    }
}

impl TaskSchema for RecipeInput {
    const NAME: &'static str = "Recipe";

    fn validate(&self) -> AppResult<()> {
        if self.target_servings == 0 {
            return Err(AppError::validation(
                Self::NAME,
                "target_servings must be greater than zero",
            ));
        }
        for (index, ingredient) in self.ingredients.iter().enumerate() {
            if !ingredient.quantity.is_finite() || ingredient.quantity < 0.0 {
                return Err(AppError::validation(
                    Self::NAME,
                    format!(
                        "ingredient #{} ('{}') must have a non-negative quantity",
                        index + 1,
                        ingredient.name
                    ),
                ));
            }
        }
        Ok(())
    }
}

impl TaskSchema for ParseRequest {
    const NAME: &'static str = "ParseRequest";
}

/// Outcome of matching a raw object against a schema
#[derive(Debug)]
pub enum SchemaMatch<T> {
    /// Structure and semantics both accepted
    Valid(T),
    /// Structure matched but a semantic check failed
    Invalid(AppError),
    /// The object does not have this schema's shape
    Mismatch,
}

/// Try to read a raw object as schema `T`
#[must_use]
pub fn try_parse_as<T: TaskSchema>(data: &Map<String, Value>) -> SchemaMatch<T> {
    match serde_json::from_value::<T>(Value::Object(data.clone())) {
        Ok(payload) => match payload.validate() {
            Ok(()) => SchemaMatch::Valid(payload),
            Err(error) => SchemaMatch::Invalid(error),
        },
        Err(_) => SchemaMatch::Mismatch,
    }
}

/// Strict variant used by the direct HTTP endpoints
///
/// # Errors
///
/// Returns a validation error naming the schema when decoding or validation fails.
pub fn parse_as<T: TaskSchema>(value: Value) -> AppResult<T> {
    let payload: T =
        serde_json::from_value(value).map_err(|e| AppError::validation(T::NAME, e.to_string()))?;
    payload.validate()?;
    Ok(payload)
}
