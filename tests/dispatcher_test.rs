// ABOUTME: Integration tests for the task dispatcher over fake collaborator services
// ABOUTME: Covers every intent path, task result shape, and failure shaping
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use recipe_adjuster_agent::a2a::{A2AMessage, MessagePart, Role, TaskResult, TaskState};
use recipe_adjuster_agent::agent::dispatcher::{
    HELP_TEXT, NO_MATCHING_SCHEMA, NO_USABLE_PART, PARSE_PROMPT,
};
use recipe_adjuster_agent::external::mock::{
    FailingIngredientParser, StaticConversionService, StaticIngredientParser,
    UnavailableConversionService,
};
use serde_json::{json, Map, Value};

fn artifact_data<'a>(task: &'a TaskResult, name: &str) -> &'a Map<String, Value> {
    let artifact = task
        .artifact(name)
        .unwrap_or_else(|| panic!("missing artifact {name}"));
    artifact.parts[0].as_data().expect("data part")
}

fn artifact_text<'a>(task: &'a TaskResult, name: &str) -> &'a str {
    let artifact = task
        .artifact(name)
        .unwrap_or_else(|| panic!("missing artifact {name}"));
    artifact.parts[0].as_text().expect("text part")
}

// ============================================================================
// Recipe scaling
// ============================================================================

#[tokio::test]
async fn test_soup_recipe_is_doubled() {
    let dispatcher = common::test_dispatcher();
    let message = A2AMessage::user_data(common::object(common::soup_recipe()));

    let task = dispatcher.dispatch(message).await;

    assert!(task.is_completed());
    let recipe = artifact_data(&task, "adjusted_recipe");
    assert_eq!(recipe["title"], "Soup");
    assert_eq!(recipe["target_servings"], 4);
    let ingredient = &recipe["adjusted_ingredients"][0];
    assert!((ingredient["quantity"].as_f64().unwrap() - 200.0).abs() < f64::EPSILON);
    assert_eq!(ingredient["unit"], "ml");
    assert!(ingredient["converted_amount"].is_null());
    assert!(ingredient["converted_unit"].is_null());

    let text = task.status_text().unwrap();
    assert!(text.starts_with("Recipe 'Soup' adjusted for 4 servings:"));
    assert!(text.contains("```json"));
}

#[tokio::test]
async fn test_recipe_typed_as_text_is_scaled() {
    let dispatcher = common::test_dispatcher();
    let message = A2AMessage::user_text(common::soup_recipe().to_string());

    let task = dispatcher.dispatch(message).await;

    assert!(task.is_completed());
    assert!(task.artifact("adjusted_recipe").is_some());
}

#[tokio::test]
async fn test_conversion_is_attached_when_available() {
    let converter = Arc::new(StaticConversionService::new(236.588, "ml"));
    let dispatcher = common::dispatcher_with(
        converter.clone(),
        Arc::new(StaticIngredientParser::default()),
    );
    let recipe = json!({
        "title": "Pancakes",
        "original_servings": 4,
        "target_servings": 2,
        "ingredients": [
            {"name": "milk", "quantity": 2, "unit": "cups"},
            {"name": "egg", "quantity": 2, "unit": ""}
        ],
        "instructions": "Whisk and fry."
    });

    let task = dispatcher
        .dispatch(A2AMessage::user_data(common::object(recipe)))
        .await;

    assert!(task.is_completed());
    let data = artifact_data(&task, "adjusted_recipe");
    let milk = &data["adjusted_ingredients"][0];
    assert!((milk["quantity"].as_f64().unwrap() - 1.0).abs() < f64::EPSILON);
    assert!((milk["converted_amount"].as_f64().unwrap() - 236.59).abs() < 1e-9);
    assert_eq!(milk["converted_unit"], "ml");

    let egg = &data["adjusted_ingredients"][1];
    assert!(egg["converted_amount"].is_null());
    assert!(egg["converted_unit"].is_null());
    assert_eq!(data["instructions"], "Whisk and fry.");

    // The blank-unit egg never reaches the conversion service
    assert_eq!(converter.calls(), 1);
}

#[tokio::test]
async fn test_identity_scale_keeps_quantities() {
    let dispatcher = common::test_dispatcher();
    let quantities = [0.0, 0.5, 1.0, 1.25, 3.333, 100.0, 2.675];

    for servings in [1_u32, 3, 12] {
        let ingredients: Vec<Value> = quantities
            .iter()
            .enumerate()
            .map(|(i, q)| json!({"name": format!("item{i}"), "quantity": q, "unit": "g"}))
            .collect();
        let recipe = json!({
            "title": "Identity",
            "original_servings": servings,
            "target_servings": servings,
            "ingredients": ingredients
        });

        let task = dispatcher
            .dispatch(A2AMessage::user_data(common::object(recipe)))
            .await;
        let data = artifact_data(&task, "adjusted_recipe");
        let adjusted = data["adjusted_ingredients"].as_array().unwrap();

        for (ingredient, original) in adjusted.iter().zip(quantities) {
            let expected = (original * 100.0_f64).round_ties_even() / 100.0;
            let actual = ingredient["quantity"].as_f64().unwrap();
            assert!(
                (actual - expected).abs() < 1e-9,
                "{original} scaled to {actual} for {servings} servings"
            );
        }
    }
}

#[tokio::test]
async fn test_ingredient_order_is_preserved() {
    let dispatcher = common::test_dispatcher();
    let recipe = json!({
        "title": "Salad",
        "original_servings": 1,
        "target_servings": 3,
        "ingredients": [
            {"name": "lettuce", "quantity": 1, "unit": "head"},
            {"name": "oil", "quantity": 2, "unit": "tbsp"},
            {"name": "salt", "quantity": 0.5, "unit": "tsp"}
        ]
    });

    let task = dispatcher
        .dispatch(A2AMessage::user_data(common::object(recipe)))
        .await;
    let data = artifact_data(&task, "adjusted_recipe");
    let names: Vec<&str> = data["adjusted_ingredients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, ["lettuce", "oil", "salt"]);
}

#[tokio::test]
async fn test_zero_original_servings_fails_task() {
    let dispatcher = common::test_dispatcher();
    let recipe = json!({
        "title": "Broken",
        "original_servings": 0,
        "target_servings": 4,
        "ingredients": [{"name": "water", "quantity": 1, "unit": "cup"}]
    });

    let task = dispatcher
        .dispatch(A2AMessage::user_data(common::object(recipe)))
        .await;

    assert_eq!(task.status.state, TaskState::Failed);
    assert!(task.artifacts.is_empty());
    let text = task.status_text().unwrap();
    assert!(text.starts_with("Error: Cannot scale recipe:"), "{text}");
}

#[tokio::test]
async fn test_zero_target_servings_fails_without_converting() {
    let converter = Arc::new(StaticConversionService::new(250.0, "grams"));
    let dispatcher =
        common::dispatcher_with(converter.clone(), Arc::new(StaticIngredientParser::default()));
    let recipe = json!({
        "title": "Soup",
        "original_servings": 2,
        "target_servings": 0,
        "ingredients": [{"name": "water", "quantity": 100, "unit": "ml"}]
    });

    let task = dispatcher
        .dispatch(A2AMessage::user_data(common::object(recipe)))
        .await;

    assert_eq!(task.status.state, TaskState::Failed);
    assert!(task.artifacts.is_empty());
    assert_eq!(
        task.status_text().unwrap(),
        "Error: Recipe validation failed: target_servings must be greater than zero"
    );
    assert_eq!(converter.calls(), 0);
}

#[tokio::test]
async fn test_integral_float_servings_are_scaled() {
    let dispatcher = common::test_dispatcher();
    let recipe = json!({
        "title": "Soup",
        "original_servings": 2.0,
        "target_servings": 4.0,
        "ingredients": [{"name": "water", "quantity": 100, "unit": "ml"}]
    });

    let task = dispatcher
        .dispatch(A2AMessage::user_data(common::object(recipe)))
        .await;

    assert!(task.is_completed());
    let recipe = artifact_data(&task, "adjusted_recipe");
    assert_eq!(recipe["target_servings"], 4);
    assert_eq!(recipe["adjusted_ingredients"][0]["quantity"], 200.0);
}

#[tokio::test]
async fn test_negative_quantity_fails_with_validation_message() {
    let dispatcher = common::test_dispatcher();
    let recipe = json!({
        "title": "Odd",
        "original_servings": 2,
        "target_servings": 2,
        "ingredients": [{"name": "sugar", "quantity": -1, "unit": "cup"}]
    });

    let task = dispatcher
        .dispatch(A2AMessage::user_data(common::object(recipe)))
        .await;

    assert_eq!(task.status.state, TaskState::Failed);
    assert!(task
        .status_text()
        .unwrap()
        .contains("must have a non-negative quantity"));
}

// ============================================================================
// Tips and greetings
// ============================================================================

#[tokio::test]
async fn test_tip_text_returns_daily_tip_artifact() {
    let task = common::test_dispatcher()
        .dispatch(A2AMessage::user_text("tip"))
        .await;

    assert!(task.is_completed());
    let tip = artifact_text(&task, "daily_tip");
    assert!(!tip.is_empty());
    assert_eq!(tip, common::TEST_TIP);
    assert_eq!(
        task.status_text().unwrap(),
        format!("Here's your daily cooking tip:\n\n**{}**", common::TEST_TIP)
    );
}

#[tokio::test]
async fn test_tip_task_in_data_part() {
    let task = common::test_dispatcher()
        .dispatch(A2AMessage::user_data(common::object(
            json!({"task": "get_daily_tip"}),
        )))
        .await;

    assert!(task.is_completed());
    assert!(task.artifact("daily_tip").is_some());
}

#[tokio::test]
async fn test_greetings_reply_with_help() {
    let dispatcher = common::test_dispatcher();
    for greeting in ["hi", "Hello", "  HELP  ", "info", "start"] {
        let task = dispatcher.dispatch(A2AMessage::user_text(greeting)).await;
        assert!(task.is_completed(), "{greeting}");
        assert_eq!(task.status_text(), Some(HELP_TEXT));
        assert!(task.artifacts.is_empty());
    }
}

// ============================================================================
// Ingredient parsing
// ============================================================================

#[tokio::test]
async fn test_empty_parse_command_asks_for_input() {
    let parser = Arc::new(StaticIngredientParser::default());
    let dispatcher =
        common::dispatcher_with(Arc::new(UnavailableConversionService), parser.clone());

    for text in ["parse ", "parse", "PARSE    "] {
        let task = dispatcher.dispatch(A2AMessage::user_text(text)).await;
        assert!(task.is_completed(), "{text:?}");
        assert_eq!(task.status_text(), Some(PARSE_PROMPT));
        assert!(task.artifacts.is_empty());
    }
    assert!(parser.requests().is_empty());
}

#[tokio::test]
async fn test_parse_command_sends_remainder_with_one_serving() {
    let parser = Arc::new(StaticIngredientParser::new(common::sample_ingredients()));
    let dispatcher =
        common::dispatcher_with(Arc::new(UnavailableConversionService), parser.clone());

    let task = dispatcher
        .dispatch(A2AMessage::user_text("Parse 2 cups flour and 1 egg"))
        .await;

    assert!(task.is_completed());
    assert_eq!(
        parser.requests(),
        vec![("2 cups flour and 1 egg".to_owned(), 1)]
    );
    let data = artifact_data(&task, "parsed_ingredients");
    let ingredients = data["ingredients"].as_array().unwrap();
    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients[0]["name"], "flour");
    assert_eq!(ingredients[1]["unit"], "");
    assert!(task
        .status_text()
        .unwrap()
        .starts_with("Successfully parsed ingredients for 1 servings:"));
}

#[tokio::test]
async fn test_free_text_is_parsed_as_ingredients() {
    let parser = Arc::new(StaticIngredientParser::new(common::sample_ingredients()));
    let dispatcher =
        common::dispatcher_with(Arc::new(UnavailableConversionService), parser.clone());

    let task = dispatcher
        .dispatch(A2AMessage::user_text("3 tomatoes, 1 onion"))
        .await;

    assert!(task.is_completed());
    assert_eq!(parser.requests(), vec![("3 tomatoes, 1 onion".to_owned(), 1)]);
}

#[tokio::test]
async fn test_malformed_json_text_falls_back_to_parsing() {
    let parser = Arc::new(StaticIngredientParser::new(common::sample_ingredients()));
    let dispatcher =
        common::dispatcher_with(Arc::new(UnavailableConversionService), parser.clone());

    let task = dispatcher
        .dispatch(A2AMessage::user_text("{not really json"))
        .await;

    assert!(task.is_completed());
    assert_eq!(parser.requests(), vec![("{not really json".to_owned(), 1)]);
}

#[tokio::test]
async fn test_parse_request_data_uses_given_servings() {
    let parser = Arc::new(StaticIngredientParser::new(common::sample_ingredients()));
    let dispatcher =
        common::dispatcher_with(Arc::new(UnavailableConversionService), parser.clone());

    let task = dispatcher
        .dispatch(A2AMessage::user_data(common::object(json!({
            "ingredient_text": "1 cup rice",
            "servings": 6
        }))))
        .await;

    assert!(task.is_completed());
    assert_eq!(parser.requests(), vec![("1 cup rice".to_owned(), 6)]);
    assert!(task.artifact("parsed_ingredients").is_some());
}

#[tokio::test]
async fn test_parse_service_failure_fails_whole_task() {
    let dispatcher = common::dispatcher_with(
        Arc::new(UnavailableConversionService),
        Arc::new(FailingIngredientParser::new("HTTP 502 Bad Gateway")),
    );

    let task = dispatcher
        .dispatch(A2AMessage::user_text("1 lemon"))
        .await;

    assert_eq!(task.status.state, TaskState::Failed);
    assert!(task.artifacts.is_empty());
    let text = task.status_text().unwrap();
    assert!(text.starts_with("Error: An internal error occurred:"));
    assert!(text.contains("HTTP 502 Bad Gateway"));
}

// ============================================================================
// Unmatched input
// ============================================================================

#[tokio::test]
async fn test_unknown_data_payload_fails() {
    let task = common::test_dispatcher()
        .dispatch(A2AMessage::user_data(common::object(json!({"foo": "bar"}))))
        .await;

    assert_eq!(task.status.state, TaskState::Failed);
    let text = task.status_text().unwrap();
    assert!(text.contains("did not match any known task schema"));
    assert_eq!(text, format!("Error: {NO_MATCHING_SCHEMA}"));
}

#[tokio::test]
async fn test_message_without_parts_fails() {
    let message = A2AMessage::new(Role::User, Vec::new());
    let task = common::test_dispatcher().dispatch(message).await;

    assert_eq!(task.status.state, TaskState::Failed);
    assert_eq!(task.status_text().unwrap(), format!("Error: {NO_USABLE_PART}"));
}

#[tokio::test]
async fn test_file_only_message_fails() {
    let message = A2AMessage::new(
        Role::User,
        vec![MessagePart::File {
            file: json!({"uri": "https://example.com/recipe.pdf"}),
        }],
    );
    let task = common::test_dispatcher().dispatch(message).await;

    assert_eq!(task.status.state, TaskState::Failed);
}

// ============================================================================
// Task result shape
// ============================================================================

#[tokio::test]
async fn test_history_holds_request_then_reply() {
    let mut message = A2AMessage::user_text("hello");
    message.task_id = Some("task-7".into());
    let message_id = message.message_id.clone();

    let task = common::test_dispatcher().dispatch(message).await;

    assert_eq!(task.id, "task-7");
    assert_eq!(task.context_id, task.id);
    assert_eq!(task.history.len(), 2);
    assert_eq!(task.history[0].role, Role::User);
    assert_eq!(task.history[0].message_id, message_id);
    assert_eq!(task.history[0].task_id.as_deref(), Some("task-7"));
    assert_eq!(task.history[1].role, Role::Agent);
    assert_eq!(task.history[1], task.status.message);
}

#[tokio::test]
async fn test_generated_task_ids_are_unique() {
    let dispatcher = common::test_dispatcher();
    let first = dispatcher.dispatch(A2AMessage::user_text("hi")).await;
    let second = dispatcher.dispatch(A2AMessage::user_text("hi")).await;

    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_task_serializes_in_wire_format() {
    let task = common::test_dispatcher()
        .dispatch(A2AMessage::user_text("tip"))
        .await;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["kind"], "task");
    assert_eq!(json["contextId"], json["id"]);
    assert_eq!(json["status"]["state"], "completed");
    assert_eq!(json["status"]["message"]["role"], "agent");
    assert_eq!(json["artifacts"][0]["name"], "daily_tip");
    assert_eq!(json["artifacts"][0]["parts"][0]["kind"], "text");
}
