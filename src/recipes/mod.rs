// ABOUTME: Recipe domain: payload schemas, scaling, unit targeting and daily tips
// ABOUTME: Pure logic; remote calls go through the traits in `services`
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Conversion target unit keyword table
pub mod conversion;
/// Serving-count scaling of recipes
pub mod scaler;
/// Recipe and parse-request schemas
pub mod schema;
/// Daily cooking tips
pub mod tips;

pub use scaler::{round_quantity, scale_factor, scale_recipe};
pub use schema::{
    parse_as, try_parse_as, AdjustedIngredient, AdjustedRecipe, Ingredient, ParseRequest,
    RecipeInput, SchemaMatch, TaskSchema,
};
pub use tips::{tip_for_day, DailyTipProvider};
