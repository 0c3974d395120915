// ABOUTME: Utility module for shared request-handling helpers
// ABOUTME: Hosts the route timeout wrapper used by the HTTP handlers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Timeout wrapper for route handlers
pub mod route_timeout;
