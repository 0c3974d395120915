// ABOUTME: Recipe scaler multiplying every ingredient by target/original servings
// ABOUTME: Requests a unit conversion per ingredient and degrades to no conversion on failure
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Recipe scaling
//!
//! Quantities are rounded to two decimals with round-half-to-even. Conversions
//! are requested one ingredient at a time, in recipe order.

use recipe_core::constants::units::QUANTITY_DECIMALS;
use tracing::debug;

use super::conversion::is_blank_unit;
use super::schema::{AdjustedIngredient, AdjustedRecipe, RecipeInput};
use crate::errors::{AppError, AppResult};
use crate::services::ConversionService;

/// Ratio applied to every quantity
///
/// # Errors
///
/// Returns a division error when `original_servings` is zero.
pub fn scale_factor(original_servings: u32, target_servings: u32) -> AppResult<f64> {
    if original_servings == 0 {
        return Err(AppError::division_by_zero(
            "original_servings must be greater than zero",
        ));
    }
    Ok(f64::from(target_servings) / f64::from(original_servings))
}

/// Round to two decimals, ties to even
#[must_use]
pub fn round_quantity(value: f64) -> f64 {
    let scale = 10_f64.powi(QUANTITY_DECIMALS);
    (value * scale).round_ties_even() / scale
}

/// Scale a recipe and attach conversions where available
///
/// # Errors
///
/// Returns a division error for zero `original_servings`, or any hard error
/// from the conversion service (a missing API key). Per-ingredient
/// conversion unavailability never fails the recipe.
pub async fn scale_recipe(
    recipe: RecipeInput,
    converter: &dyn ConversionService,
) -> AppResult<AdjustedRecipe> {
    let factor = scale_factor(recipe.original_servings, recipe.target_servings)?;
    debug!(recipe.title = %recipe.title, factor, "Scaling recipe");

    let mut adjusted_ingredients = Vec::with_capacity(recipe.ingredients.len());
    for ingredient in recipe.ingredients {
        let quantity = round_quantity(ingredient.quantity * factor);

        let converted = if is_blank_unit(&ingredient.unit) {
            None
        } else {
            converter
                .convert(&ingredient.name, quantity, &ingredient.unit)
                .await?
        };

        if converted.is_none() && !is_blank_unit(&ingredient.unit) {
            debug!(
                ingredient.name = %ingredient.name,
                ingredient.unit = %ingredient.unit,
                "No unit conversion available"
            );
        }

        let (converted_amount, converted_unit) = match converted {
            Some(converted) => (Some(round_quantity(converted.amount)), Some(converted.unit)),
            None => (None, None),
        };

        adjusted_ingredients.push(AdjustedIngredient {
            name: ingredient.name,
            quantity,
            unit: ingredient.unit,
            converted_amount,
            converted_unit,
        });
    }

    Ok(AdjustedRecipe {
        title: recipe.title,
        original_servings: recipe.original_servings,
        target_servings: recipe.target_servings,
        adjusted_ingredients,
        instructions: recipe.instructions,
    })
}
