// ABOUTME: Task result builder producing completed or failed A2A task envelopes
// ABOUTME: Owns the history trail and the `Error:` prefix applied to failure messages
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Task Result Builder
//!
//! Every dispatch ends here. The builder stamps the inbound message with the
//! task id, creates the agent reply and assembles an immutable [`TaskResult`]
//! whose `contextId` equals its `id`.

use chrono::Utc;

use super::protocol::{A2AMessage, Artifact, TaskKind, TaskResult, TaskState, TaskStatus};

/// Builds the terminal result of a single task
#[derive(Debug, Clone)]
pub struct TaskResultBuilder {
    task_id: String,
    request: Option<A2AMessage>,
}

impl TaskResultBuilder {
    /// Start a result for the given task id
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            request: None,
        }
    }

    /// Record the inbound message so it appears first in the history
    #[must_use]
    pub fn with_request(mut self, request: A2AMessage) -> Self {
        self.request = Some(request);
        self
    }

    /// Task id this builder produces results for
    #[must_use]
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Completed task with a reply and optional artifacts
    pub fn completed(self, response_text: impl Into<String>, artifacts: Vec<Artifact>) -> TaskResult {
        self.build(TaskState::Completed, response_text.into(), artifacts)
    }

    /// Failed task; the reply reads `Error: <message>` and carries no artifacts
    pub fn failed(self, error_message: impl AsRef<str>) -> TaskResult {
        let text = format!("Error: {}", error_message.as_ref());
        self.build(TaskState::Failed, text, Vec::new())
    }

    fn build(self, state: TaskState, text: String, artifacts: Vec<Artifact>) -> TaskResult {
        let response = A2AMessage::agent_text(&self.task_id, text);

        let mut history = Vec::with_capacity(2);
        if let Some(request) = self.request {
            history.push(request.in_task(&self.task_id));
        }
        history.push(response.clone());

        TaskResult {
            kind: TaskKind::Task,
            id: self.task_id.clone(),
            context_id: self.task_id,
            status: TaskStatus {
                state,
                message: response,
                timestamp: Utc::now(),
            },
            artifacts,
            history,
        }
    }
}
