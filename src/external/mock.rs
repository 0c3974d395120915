// ABOUTME: In-memory fakes for the collaborator services (no network)
// ABOUTME: Used by tests and benchmarks to drive the dispatcher deterministically
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use recipe_core::constants::service_names::SPOONACULAR;

use crate::errors::{AppError, AppResult};
use crate::recipes::schema::Ingredient;
use crate::services::{ConversionService, ConvertedAmount, IngredientParsingService, TipProvider};

/// Converts every ingredient to the same fixed amount and unit
#[derive(Debug)]
pub struct StaticConversionService {
    amount: f64,
    unit: String,
    calls: AtomicUsize,
}

impl StaticConversionService {
    /// Fake that always answers `amount` `unit`
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of conversions requested so far
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ConversionService for StaticConversionService {
    async fn convert(
        &self,
        _ingredient_name: &str,
        _amount: f64,
        _source_unit: &str,
    ) -> AppResult<Option<ConvertedAmount>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(Some(ConvertedAmount {
            amount: self.amount,
            unit: self.unit.clone(),
        }))
    }
}

/// Never has a conversion available
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableConversionService;

#[async_trait]
impl ConversionService for UnavailableConversionService {
    async fn convert(
        &self,
        _ingredient_name: &str,
        _amount: f64,
        _source_unit: &str,
    ) -> AppResult<Option<ConvertedAmount>> {
        Ok(None)
    }
}

/// Takes `delay` per conversion, counting each call when it starts
#[derive(Debug)]
pub struct DelayedConversionService {
    delay: Duration,
    started: AtomicUsize,
}

impl DelayedConversionService {
    /// Fake that sleeps `delay` before answering with no conversion
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            started: AtomicUsize::new(0),
        }
    }

    /// Number of conversions started so far
    #[must_use]
    pub fn started(&self) -> usize {
        self.started.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ConversionService for DelayedConversionService {
    async fn convert(
        &self,
        _ingredient_name: &str,
        _amount: f64,
        _source_unit: &str,
    ) -> AppResult<Option<ConvertedAmount>> {
        self.started.fetch_add(1, Ordering::Relaxed);
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }
}

/// Returns a fixed ingredient list and records what it was asked to parse
#[derive(Debug, Default)]
pub struct StaticIngredientParser {
    ingredients: Vec<Ingredient>,
    requests: Mutex<Vec<(String, u32)>>,
}

impl StaticIngredientParser {
    /// Fake that always answers `ingredients`
    #[must_use]
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self {
            ingredients,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `(text, servings)` pairs received so far, oldest first
    #[must_use]
    pub fn requests(&self) -> Vec<(String, u32)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl IngredientParsingService for StaticIngredientParser {
    async fn parse_ingredients(&self, text: &str, servings: u32) -> AppResult<Vec<Ingredient>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((text.to_owned(), servings));
        }
        Ok(self.ingredients.clone())
    }
}

/// Fails every parse as an unreachable remote service would
#[derive(Debug, Clone)]
pub struct FailingIngredientParser {
    message: String,
}

impl FailingIngredientParser {
    /// Fake failing with `message`
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl IngredientParsingService for FailingIngredientParser {
    async fn parse_ingredients(&self, _text: &str, _servings: u32) -> AppResult<Vec<Ingredient>> {
        Err(AppError::external_service(SPOONACULAR, self.message.clone()))
    }
}

/// Always returns the same tip
#[derive(Debug, Clone)]
pub struct FixedTipProvider(pub String);

impl TipProvider for FixedTipProvider {
    fn todays_tip(&self) -> String {
        self.0.clone()
    }
}
