// ABOUTME: Configuration management module for the recipe agent server
// ABOUTME: Loads environment settings once at startup and hands them to the server
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration module

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig, SpoonacularConfig};
