// ABOUTME: Agent core: intent classification and task dispatch
// ABOUTME: Turns one inbound A2A message into one terminal task result
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

pub mod classifier;
pub mod dispatcher;

pub use classifier::{classify, Intent};
pub use dispatcher::TaskDispatcher;
