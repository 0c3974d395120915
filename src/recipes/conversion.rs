// ABOUTME: Keyword table choosing the conversion target unit for an ingredient
// ABOUTME: Liquids convert to milliliters, dry goods and everything else to grams
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use recipe_core::constants::units;

/// Target unit for converting the named ingredient
///
/// Names matching no keyword fall back to grams.
#[must_use]
pub fn target_unit_for(ingredient_name: &str) -> &'static str {
    keyword_target_unit(ingredient_name).unwrap_or(units::GRAMS)
}

/// Target unit selected by the keyword table, if any keyword matches
///
/// Matching is a case-insensitive substring test; liquid keywords are checked first.
#[must_use]
pub fn keyword_target_unit(ingredient_name: &str) -> Option<&'static str> {
    let name = ingredient_name.to_lowercase();
    if units::LIQUID_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        Some(units::MILLILITERS)
    } else if units::DRY_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        Some(units::GRAMS)
    } else {
        None
    }
}

/// Whether a unit string carries no unit at all
#[must_use]
pub fn is_blank_unit(unit: &str) -> bool {
    unit.trim().is_empty()
}
