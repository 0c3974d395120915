// ABOUTME: Re-exports the unified error types from recipe-core for a single type identity
// ABOUTME: Lets the crate and its binaries write `crate::errors::AppResult` throughout
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

pub use recipe_core::errors::*;
