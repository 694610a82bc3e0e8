//! # Command Layer
//!
//! Each command lives in its own submodule as a plain `run` function over a
//! [`TodoStore`](crate::store::TodoStore).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Implement the logic of each user-facing operation
//! - Return a structured [`CmdResult`] with affected/listed todos and messages
//! - Are completely UI-agnostic
//!
//! Commands never print, parse arguments, or decide exit codes. The UI layer
//! renders the [`CmdResult`] however it likes.
//!
//! ## Testing Strategy
//!
//! Command tests build a store with [`StoreFixture`](crate::store::fixtures::StoreFixture)
//! and check the returned `CmdResult`.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a todo
//! - [`get`]: List todos through a [`get::TodoFilter`]
//! - [`toggle`]: Flip the completed flag of todos
//! - [`delete`]: Remove todos
//! - [`stats`]: Statistics and progress

use crate::model::Todo;
use crate::stats::{Progress, Statistics};
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod get;
pub mod stats;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_todos: Vec<Todo>,
    pub listed_todos: Vec<Todo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<Todo>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<Todo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = Some(progress);
        self
    }
}
