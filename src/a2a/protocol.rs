// ABOUTME: A2A wire types for messages, parts, artifacts and terminal task results
// ABOUTME: Serializes with the camelCase field names and `kind` tags used by A2A peers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! A2A Protocol Types
//!
//! The data model exchanged over `message/send`: an inbound [`A2AMessage`]
//! made of [`MessagePart`]s, and the [`TaskResult`] returned for it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Who authored a message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Human or calling agent
    #[default]
    User,
    /// This agent
    Agent,
}

/// Object discriminator for messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// The only message kind
    #[default]
    Message,
}

/// Object discriminator for tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// The only task kind
    #[default]
    Task,
}

/// A2A message part, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MessagePart {
    /// Free text
    Text {
        /// Text content
        text: String,
    },
    /// Structured JSON object
    Data {
        /// Object content
        data: Map<String, Value>,
    },
    /// File reference or inline bytes; accepted but never interpreted
    File {
        /// Raw file descriptor as sent by the peer
        file: Value,
    },
}

impl MessagePart {
    /// Build a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Build a data part
    #[must_use]
    pub const fn data(data: Map<String, Value>) -> Self {
        Self::Data { data }
    }

    /// Text content, if this is a text part
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Data { .. } | Self::File { .. } => None,
        }
    }

    /// Object content, if this is a data part
    #[must_use]
    pub const fn as_data(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Data { data } => Some(data),
            Self::Text { .. } | Self::File { .. } => None,
        }
    }
}

fn new_message_id() -> String {
    Uuid::new_v4().to_string()
}

/// A2A message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct A2AMessage {
    /// Always `message`
    #[serde(default)]
    pub kind: MessageKind,
    /// Author of the message
    #[serde(default)]
    pub role: Role,
    /// Ordered payload parts
    #[serde(default)]
    pub parts: Vec<MessagePart>,
    /// Message identifier, generated when the peer omits it
    #[serde(default = "new_message_id")]
    pub message_id: String,
    /// Task correlation identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Conversation identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    /// Peer-specific extensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl A2AMessage {
    /// Create a message with the given role and parts
    #[must_use]
    pub fn new(role: Role, parts: Vec<MessagePart>) -> Self {
        Self {
            kind: MessageKind::Message,
            role,
            parts,
            message_id: new_message_id(),
            task_id: None,
            context_id: None,
            metadata: None,
        }
    }

    /// Single-part user text message
    pub fn user_text(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![MessagePart::text(text)])
    }

    /// Single-part user data message
    #[must_use]
    pub fn user_data(data: Map<String, Value>) -> Self {
        Self::new(Role::User, vec![MessagePart::data(data)])
    }

    /// Agent text reply bound to a task
    pub fn agent_text(task_id: &str, text: impl Into<String>) -> Self {
        Self::new(Role::Agent, vec![MessagePart::text(text)]).in_task(task_id)
    }

    /// Bind the message to a task (and its identical context)
    #[must_use]
    pub fn in_task(mut self, task_id: &str) -> Self {
        self.task_id = Some(task_id.to_owned());
        self.context_id = Some(task_id.to_owned());
        self
    }

    /// Text of the first text part
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.parts.iter().find_map(MessagePart::as_text)
    }

    /// Object of the first data part
    #[must_use]
    pub fn first_data(&self) -> Option<&Map<String, Value>> {
        self.parts.iter().find_map(MessagePart::as_data)
    }
}

/// Parameters of a `message/send` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSendParams {
    /// Message to process
    pub message: A2AMessage,
    /// Client-side delivery preferences, ignored by this agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Value>,
    /// Request extensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Terminal state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    /// Work finished and the status message carries the answer
    Completed,
    /// Work could not be done and the status message explains why
    Failed,
}

/// Status of a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    /// Terminal state
    pub state: TaskState,
    /// Agent message describing the outcome
    pub message: A2AMessage,
    /// When the status was produced
    pub timestamp: DateTime<Utc>,
}

/// Named output attachment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Unique artifact identifier
    pub artifact_id: String,
    /// Artifact name (e.g. `daily_tip`)
    pub name: String,
    /// Artifact content
    pub parts: Vec<MessagePart>,
}

impl Artifact {
    /// Artifact holding a single text part
    pub fn text(name: &str, text: impl Into<String>) -> Self {
        Self {
            artifact_id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            parts: vec![MessagePart::text(text)],
        }
    }

    /// Artifact holding a single data part
    #[must_use]
    pub fn data(name: &str, data: Map<String, Value>) -> Self {
        Self {
            artifact_id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            parts: vec![MessagePart::data(data)],
        }
    }
}

/// Final result of one `message/send` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResult {
    /// Always `task`
    #[serde(default)]
    pub kind: TaskKind,
    /// Task identifier
    pub id: String,
    /// Conversation identifier; equal to `id`
    pub context_id: String,
    /// Terminal status
    pub status: TaskStatus,
    /// Output attachments
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    /// Messages exchanged for this task, oldest first
    #[serde(default)]
    pub history: Vec<A2AMessage>,
}

impl TaskResult {
    /// Whether the task completed
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.state == TaskState::Completed
    }

    /// Text of the status message
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.status.message.first_text()
    }

    /// First artifact with the given name
    #[must_use]
    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|artifact| artifact.name == name)
    }
}
