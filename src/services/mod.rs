// ABOUTME: Collaborator service interfaces consumed by the task dispatcher
// ABOUTME: Unit conversion, ingredient parsing and the daily tip, all substitutable with fakes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Collaborator services
//!
//! The dispatcher owns no I/O. It is constructed with handles to these three
//! services, so the HTTP-backed implementations in [`crate::external`] and the
//! in-memory fakes in [`crate::external::mock`] are interchangeable.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::recipes::schema::Ingredient;

/// Amount expressed in a conversion target unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedAmount {
    /// Converted quantity
    pub amount: f64,
    /// Unit of `amount`
    pub unit: String,
}

/// Best-effort unit conversion
#[async_trait]
pub trait ConversionService: Send + Sync {
    /// Convert `amount` of `ingredient_name` from `source_unit`
    ///
    /// `Ok(None)` means no conversion is available for this ingredient.
    ///
    /// # Errors
    ///
    /// Returns an error only when the service cannot operate at all
    /// (for example a missing API key).
    async fn convert(
        &self,
        ingredient_name: &str,
        amount: f64,
        source_unit: &str,
    ) -> AppResult<Option<ConvertedAmount>>;
}

/// Free-text ingredient list parsing
#[async_trait]
pub trait IngredientParsingService: Send + Sync {
    /// Parse `text` written for `servings` servings into structured records
    ///
    /// # Errors
    ///
    /// Returns an error when the list cannot be parsed; no partial list is returned.
    async fn parse_ingredients(&self, text: &str, servings: u32) -> AppResult<Vec<Ingredient>>;
}

/// Source of the cooking tip of the day
pub trait TipProvider: Send + Sync {
    /// Today's tip
    fn todays_tip(&self) -> String;
}
