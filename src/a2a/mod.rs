// ABOUTME: A2A (Agent-to-Agent) protocol module for the recipe agent
// ABOUTME: Wire types, the task result builder and the discovery agent card
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # A2A (Agent-to-Agent) Protocol Implementation
//!
//! Lets other agents send chat or structured messages to the recipe agent
//! and receive a single terminal task result per message.

pub mod agent_card;
pub mod protocol;
pub mod task;

pub use agent_card::AgentCard;
pub use protocol::{
    A2AMessage, Artifact, MessagePart, MessageSendParams, Role, TaskResult, TaskState, TaskStatus,
};
pub use task::TaskResultBuilder;
