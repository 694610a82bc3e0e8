//! # Domain Model
//!
//! A [`Todo`] is created only by the store, from a validated [`NewTodo`]
//! draft. After creation its `id`, `title` and `priority` never change; the
//! `completed` flag changes only through [`Todo::toggle`].
//!
//! ## Validation
//!
//! - **Title**: must contain at least one non-whitespace character. It is
//!   stored exactly as given.
//! - **Priority**: `low`, `medium` or `high` in any letter case, stored in
//!   lowercase. Omitted or null means `medium`.
//! - **Completed**: `false` unless a draft built from dynamic values says
//!   otherwise; such a value must be a boolean.
//!
//! Drafts come from two paths: typed input ([`NewTodo::new`]) and dynamic
//! values as found in deserialized JSON ([`NewTodo::from_values`]).

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TodozError};
use crate::query::FieldValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = TodozError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(TodozError::validation(format!(
                "Priority must be one of: low, medium, high (got '{}')",
                s
            ))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated todo that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub(crate) title: String,
    pub priority: Priority,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(title: &str, priority: Option<&str>) -> Result<Self> {
        let title = validate_title(title)?;
        let priority = match priority {
            Some(p) => p.parse()?,
            None => Priority::default(),
        };
        Ok(Self {
            title,
            priority,
            completed: false,
        })
    }

    /// Build a draft from dynamic values, rejecting values of the wrong kind.
    pub fn from_values(
        title: &FieldValue,
        completed: &FieldValue,
        priority: &FieldValue,
    ) -> Result<Self> {
        let Some(title) = title.as_text() else {
            return Err(TodozError::validation(format!(
                "Title is required and must be a non-empty string (got {})",
                title.kind()
            )));
        };

        let completed = match completed {
            FieldValue::Null => false,
            FieldValue::Bool(v) => *v,
            other => {
                return Err(TodozError::validation(format!(
                    "Completed must be a boolean value (got {})",
                    other.kind()
                )))
            }
        };

        let priority = match priority {
            FieldValue::Null => None,
            FieldValue::Text(p) => Some(p.as_str()),
            other => {
                return Err(TodozError::validation(format!(
                    "Priority must be a string (got {})",
                    other.kind()
                )))
            }
        };

        let mut draft = Self::new(title, priority)?;
        draft.completed = completed;
        Ok(draft)
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

fn validate_title(title: &str) -> Result<String> {
    if title.trim().is_empty() {
        return Err(TodozError::validation(
            "Title is required and must be a non-empty string",
        ));
    }
    Ok(title.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    id: u64,
    title: String,
    completed: bool,
    priority: Priority,
    created_at: DateTime<Utc>,
}

impl Todo {
    pub(crate) fn from_draft(id: u64, draft: NewTodo) -> Self {
        Self {
            id,
            title: draft.title,
            completed: draft.completed,
            priority: draft.priority,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Flip the completed flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Read a field by name for filtering.
    ///
    /// Returns `None` for names that are not fields of a todo.
    ///
    /// | Name | Value |
    /// |------|-------|
    /// | `"id"` | `Number` |
    /// | `"title"` | `Text` |
    /// | `"completed"` | `Bool` |
    /// | `"priority"` | `Text` (lowercase) |
    /// | `"created_at"` | `Text` (RFC 3339) |
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::from(self.id)),
            "title" => Some(FieldValue::from(self.title.as_str())),
            "completed" => Some(FieldValue::Bool(self.completed)),
            "priority" => Some(FieldValue::from(self.priority.as_str())),
            "created_at" => Some(FieldValue::Text(self.created_at.to_rfc3339())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("Low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
    }

    #[test]
    fn priority_rejects_unknown_values() {
        assert!(matches!(
            "URGENT".parse::<Priority>(),
            Err(TodozError::Validation(_))
        ));
        assert!("".parse::<Priority>().is_err());
    }

    #[test]
    fn new_defaults_to_medium_and_pending() {
        let draft = NewTodo::new("Write paper", None).unwrap();
        assert_eq!(draft.priority, Priority::Medium);
        assert!(!draft.completed);
        assert_eq!(draft.title(), "Write paper");
    }

    #[test]
    fn new_rejects_blank_titles() {
        assert!(NewTodo::new("", None).is_err());
        assert!(NewTodo::new("   ", None).is_err());
        assert!(NewTodo::new("\t\n", Some("high")).is_err());
    }

    #[test]
    fn title_is_stored_verbatim() {
        let draft = NewTodo::new("  padded  ", None).unwrap();
        assert_eq!(draft.title(), "  padded  ");
    }

    #[test]
    fn from_values_rejects_non_text_title() {
        for title in [FieldValue::Null, FieldValue::from(1), FieldValue::from(true)] {
            assert!(NewTodo::from_values(&title, &FieldValue::Null, &FieldValue::Null).is_err());
        }
    }

    #[test]
    fn from_values_rejects_non_boolean_completed() {
        let result = NewTodo::from_values(
            &FieldValue::from("A"),
            &FieldValue::from("yes"),
            &FieldValue::Null,
        );
        assert!(matches!(result, Err(TodozError::Validation(_))));
    }

    #[test]
    fn from_values_rejects_non_string_priority() {
        let result = NewTodo::from_values(
            &FieldValue::from("A"),
            &FieldValue::Null,
            &FieldValue::from(3),
        );
        assert!(matches!(result, Err(TodozError::Validation(_))));
    }

    #[test]
    fn from_values_accepts_complete_input() {
        let draft = NewTodo::from_values(
            &FieldValue::from("A"),
            &FieldValue::from(true),
            &FieldValue::from("HIGH"),
        )
        .unwrap();
        assert!(draft.completed);
        assert_eq!(draft.priority, Priority::High);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut todo = Todo::from_draft(1, NewTodo::new("A", None).unwrap());
        todo.toggle();
        assert!(todo.completed());
        todo.toggle();
        assert!(!todo.completed());
    }

    #[test]
    fn field_reads_known_fields() {
        let todo = Todo::from_draft(7, NewTodo::new("Review code", Some("Low")).unwrap());
        assert_eq!(todo.field("id"), Some(FieldValue::Number(7.0)));
        assert_eq!(todo.field("title"), Some(FieldValue::from("Review code")));
        assert_eq!(todo.field("completed"), Some(FieldValue::Bool(false)));
        assert_eq!(todo.field("priority"), Some(FieldValue::from("low")));
        assert!(todo.field("created_at").is_some());
        assert_eq!(todo.field("owner"), None);
    }
}
