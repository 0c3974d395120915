// ABOUTME: Task dispatcher routing classified messages to the recipe services
// ABOUTME: Owns fallback and error shaping so every message ends in a completed or failed task
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Task dispatch
//!
//! `dispatch` is the single operation the transport calls. It never returns
//! an error: every failure is logged and rendered as a failed [`TaskResult`].

use std::sync::Arc;

use recipe_core::constants::artifacts;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, field, info, instrument, Span};
use uuid::Uuid;

use super::classifier::{classify, Intent};
use crate::a2a::{A2AMessage, Artifact, TaskResult, TaskResultBuilder};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::recipes::scaler::scale_recipe;
use crate::recipes::schema::{
    try_parse_as, AdjustedRecipe, Ingredient, ParseRequest, RecipeInput, SchemaMatch,
};
use crate::services::{ConversionService, IngredientParsingService, TipProvider};

/// Reply to greetings and help requests
pub const HELP_TEXT: &str = "Hello! I'm the Recipe Adjuster Agent. Here's what I can do:\n\n\
1.  **Get a tip:** Just type `tip`\n\
2.  **Parse ingredients:** Just type the ingredients (e.g., `2 cups flour and 1 egg`)\n\
3.  **Adjust a full recipe:** Paste the recipe's full JSON data.";

/// Reply to a `parse` command with nothing to parse
pub const PARSE_PROMPT: &str =
    "Please tell me what to parse. For example:\n`parse 2 cups of flour and 1 egg`";

/// Failure text for data matching neither payload schema
pub const NO_MATCHING_SCHEMA: &str = "The 'data' payload did not match any known task schema.";

/// Failure text for messages without a usable part
pub const NO_USABLE_PART: &str = "No 'data' or valid 'text' part found in message.";

/// Terminal outcome before it is wrapped into a task
enum Outcome {
    Completed {
        text: String,
        artifacts: Vec<Artifact>,
    },
    Failed(String),
}

impl Outcome {
    fn reply(text: impl Into<String>) -> Self {
        Self::Completed {
            text: text.into(),
            artifacts: Vec::new(),
        }
    }
}

/// Routes messages to the collaborator services
#[derive(Clone)]
pub struct TaskDispatcher {
    converter: Arc<dyn ConversionService>,
    parser: Arc<dyn IngredientParsingService>,
    tips: Arc<dyn TipProvider>,
}

impl TaskDispatcher {
    /// Create a dispatcher over the given services
    #[must_use]
    pub fn new(
        converter: Arc<dyn ConversionService>,
        parser: Arc<dyn IngredientParsingService>,
        tips: Arc<dyn TipProvider>,
    ) -> Self {
        Self {
            converter,
            parser,
            tips,
        }
    }

    /// Handle one message and produce its terminal task
    ///
    /// The message's `taskId` is reused when present, otherwise a fresh id is generated.
    #[instrument(skip_all, fields(task.id = field::Empty, task.intent = field::Empty))]
    pub async fn dispatch(&self, message: A2AMessage) -> TaskResult {
        let task_id = message
            .task_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let intent = classify(&message);
        let span = Span::current();
        span.record("task.id", task_id.as_str());
        span.record("task.intent", intent.label());

        let builder = TaskResultBuilder::new(task_id).with_request(message);

        let outcome = match self.run(intent).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, code = ?e.code, "Task failed with internal error");
                Outcome::Failed(failure_text(&e))
            }
        };

        let result = match outcome {
            Outcome::Completed { text, artifacts } => builder.completed(text, artifacts),
            Outcome::Failed(reason) => builder.failed(reason),
        };
        info!(task.state = ?result.status.state, artifacts = result.artifacts.len(), "Task finished");
        result
    }

    async fn run(&self, intent: Intent) -> AppResult<Outcome> {
        match intent {
            Intent::Greeting => Ok(Outcome::reply(HELP_TEXT)),
            Intent::TipRequest => Ok(self.tip_outcome()),
            Intent::EmptyParseRequest => Ok(Outcome::reply(PARSE_PROMPT)),
            Intent::ParseRequest(request) => self.parse_outcome(request).await,
            Intent::AdjustRequest(data) | Intent::DataRequest(data) => {
                self.structured_outcome(&data).await
            }
            Intent::Unrecognized => Ok(Outcome::Failed(NO_USABLE_PART.to_owned())),
        }
    }

    fn tip_outcome(&self) -> Outcome {
        let tip = self.tips.todays_tip();
        Outcome::Completed {
            text: format!("Here's your daily cooking tip:\n\n**{tip}**"),
            artifacts: vec![Artifact::text(artifacts::DAILY_TIP, tip)],
        }
    }

    /// Recipe schema first, then parse-request schema
    async fn structured_outcome(&self, data: &Map<String, Value>) -> AppResult<Outcome> {
        match try_parse_as::<RecipeInput>(data) {
            SchemaMatch::Valid(recipe) => return self.adjust_outcome(recipe).await,
            SchemaMatch::Invalid(e) => return Ok(Outcome::Failed(e.message)),
            SchemaMatch::Mismatch => {}
        }

        match try_parse_as::<ParseRequest>(data) {
            SchemaMatch::Valid(request) => self.parse_outcome(request).await,
            SchemaMatch::Invalid(e) => Ok(Outcome::Failed(e.message)),
            SchemaMatch::Mismatch => Ok(Outcome::Failed(NO_MATCHING_SCHEMA.to_owned())),
        }
    }

    async fn adjust_outcome(&self, recipe: RecipeInput) -> AppResult<Outcome> {
        let adjusted = self.adjust_recipe(recipe).await?;
        let pretty = serde_json::to_string_pretty(&adjusted)?;

        Ok(Outcome::Completed {
            text: format!(
                "Recipe '{}' adjusted for {} servings:\n\n```json\n{pretty}\n```",
                adjusted.title, adjusted.target_servings
            ),
            artifacts: vec![Artifact::data(
                artifacts::ADJUSTED_RECIPE,
                to_object(&adjusted)?,
            )],
        })
    }

    async fn parse_outcome(&self, request: ParseRequest) -> AppResult<Outcome> {
        if request.is_empty() {
            return Ok(Outcome::reply(PARSE_PROMPT));
        }

        let servings = request.servings;
        let ingredients = self.parse_ingredients(request).await?;
        let pretty = serde_json::to_string_pretty(&ingredients)?;

        let mut data = Map::new();
        data.insert(
            artifacts::INGREDIENTS_KEY.to_owned(),
            serde_json::to_value(&ingredients)?,
        );

        Ok(Outcome::Completed {
            text: format!(
                "Successfully parsed ingredients for {servings} servings:\n\n```json\n{pretty}\n```"
            ),
            artifacts: vec![Artifact::data(artifacts::PARSED_INGREDIENTS, data)],
        })
    }

    /// Scale a validated recipe with this dispatcher's conversion service
    ///
    /// # Errors
    /// Returns a division error for zero `original_servings` or a conversion
    /// service configuration error.
    pub async fn adjust_recipe(&self, recipe: RecipeInput) -> AppResult<AdjustedRecipe> {
        scale_recipe(recipe, self.converter.as_ref()).await
    }

    /// Parse free-text ingredients with this dispatcher's parsing service
    ///
    /// # Errors
    /// Returns an error when the text is blank or the parsing service fails.
    pub async fn parse_ingredients(&self, request: ParseRequest) -> AppResult<Vec<Ingredient>> {
        if request.is_empty() {
            return Err(AppError::invalid_input("ingredient_text must not be empty"));
        }
        self.parser
            .parse_ingredients(request.ingredient_text.trim(), request.servings)
            .await
    }

    /// Today's cooking tip
    #[must_use]
    pub fn todays_tip(&self) -> String {
        self.tips.todays_tip()
    }
}

fn failure_text(error: &AppError) -> String {
    match error.code {
        ErrorCode::DivisionByZero => format!("Cannot scale recipe: {}", error.message),
        _ => format!("An internal error occurred: {}", error.message),
    }
}

fn to_object<T: Serialize>(value: &T) -> AppResult<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::serialization(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}
