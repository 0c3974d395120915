// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, dispatcher builders over fakes, and sample payloads
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::panic
)]
//! Shared test utilities for `recipe_adjuster_agent`

use std::sync::{Arc, Once};

use recipe_adjuster_agent::{
    agent::TaskDispatcher,
    external::mock::{FixedTipProvider, StaticIngredientParser, UnavailableConversionService},
    recipes::Ingredient,
    routes::AppState,
    services::{ConversionService, IngredientParsingService},
};
use serde_json::{json, Map, Value};

static INIT_LOGGER: Once = Once::new();

/// Tip returned by the fake tip provider
pub const TEST_TIP: &str = "Day 1: Taste as you go and season in layers.";

/// Base URL used for the agent card in tests
pub const TEST_BASE_URL: &str = "http://localhost:5001";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Dispatcher over the given conversion and parsing fakes and a fixed tip
pub fn dispatcher_with(
    converter: Arc<dyn ConversionService>,
    parser: Arc<dyn IngredientParsingService>,
) -> TaskDispatcher {
    init_test_logging();
    TaskDispatcher::new(
        converter,
        parser,
        Arc::new(FixedTipProvider(TEST_TIP.to_owned())),
    )
}

/// Dispatcher with no conversions and a parser returning `sample_ingredients`
pub fn test_dispatcher() -> TaskDispatcher {
    dispatcher_with(
        Arc::new(UnavailableConversionService),
        Arc::new(StaticIngredientParser::new(sample_ingredients())),
    )
}

/// Router state over `test_dispatcher`
pub fn test_state() -> AppState {
    AppState::new(test_dispatcher(), TEST_BASE_URL)
}

/// Router state over a custom dispatcher
pub fn state_with(dispatcher: TaskDispatcher) -> AppState {
    AppState::new(dispatcher, TEST_BASE_URL)
}

/// Ingredients the fake parser returns
pub fn sample_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient {
            name: "flour".into(),
            quantity: 2.0,
            unit: "cups".into(),
        },
        Ingredient {
            name: "egg".into(),
            quantity: 1.0,
            unit: String::new(),
        },
    ]
}

/// The soup recipe: 100 ml water for 2, scaled to 4
pub fn soup_recipe() -> Value {
    json!({
        "title": "Soup",
        "original_servings": 2,
        "target_servings": 4,
        "ingredients": [{"name": "water", "quantity": 100, "unit": "ml"}]
    })
}

/// Unwrap a JSON object literal
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}
