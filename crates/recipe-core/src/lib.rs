// ABOUTME: Core types and constants for the recipe adjuster agent
// ABOUTME: Foundation crate with error handling and domain constants
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate shared by the recipe adjuster agent. It changes rarely,
//! so the main crate gets incremental compilation benefits.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Intent keywords, artifact names, unit tables and defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;
