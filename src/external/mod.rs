// ABOUTME: External API client modules (Spoonacular)
// ABOUTME: HTTP-backed collaborator services plus in-memory fakes

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! External API Clients
//!
//! This module contains clients for external APIs used by the recipe agent.

/// In-memory collaborator fakes
pub mod mock;
pub mod spoonacular_client;

// Re-export commonly used types
pub use spoonacular_client::{SpoonacularClient, SpoonacularClientConfig};
