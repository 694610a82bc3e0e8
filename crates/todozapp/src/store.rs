//! # Todo Store
//!
//! [`TodoStore`] is the authoritative in-memory collection of todos. Each
//! store owns its own id counter: ids start at 1, increase by one per
//! successful [`TodoStore::add`], and are never reused after deletion.
//!
//! ## Snapshots
//!
//! Every listing ([`TodoStore::get_all`], [`TodoStore::filter`], ...) returns
//! owned clones in ascending id order, which is also insertion order. Later
//! mutations never reach a list already handed out. The only in-place
//! mutation is toggling `completed` through [`TodoStore::get_mut`] or
//! [`TodoStore::toggle`].
//!
//! ## Malformed Criteria
//!
//! Criteria that cannot be interpreted (a JSON criteria value that is not an
//! object, an empty field name, an object used as an operand) are handled by
//! the store's [`MalformedCriteria`] policy: `Reject` returns a validation
//! error, `MatchAll` logs a warning and returns every todo.
//!
//! ## Active Filters
//!
//! Besides one-shot filtering, a store keeps a set of active filters, at most
//! one per field, applied by [`TodoStore::filtered`].

use std::collections::BTreeMap;

use crate::config::{MalformedCriteria, TodozConfig};
use crate::error::{Result, TodozError};
use crate::model::{NewTodo, Todo};
use crate::query::{Criteria, FieldCriteria, FieldValue, Operator};
use crate::stats::Statistics;

#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: BTreeMap<u64, Todo>,
    next_id: u64,
    policy: MalformedCriteria,
    active_filters: BTreeMap<String, (Operator, FieldValue)>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::with_policy(MalformedCriteria::default())
    }

    pub fn with_policy(policy: MalformedCriteria) -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: 1,
            policy,
            active_filters: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &TodozConfig) -> Self {
        Self::with_policy(config.malformed_criteria)
    }

    /// Validate and insert a new todo, returning a snapshot of it.
    pub fn add(&mut self, title: &str, priority: Option<&str>) -> Result<Todo> {
        let draft = NewTodo::new(title, priority)?;
        Ok(self.add_draft(draft))
    }

    /// Insert an already validated draft.
    pub fn add_draft(&mut self, draft: NewTodo) -> Todo {
        let id = self.next_id;
        self.next_id += 1;
        let todo = Todo::from_draft(id, draft);
        tracing::debug!(id, title = todo.title(), "todo added");
        self.todos.insert(id, todo.clone());
        todo
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Todo> {
        self.todos.get_mut(&id)
    }

    /// Toggle a todo in place, returning its new `completed` value.
    pub fn toggle(&mut self, id: u64) -> Option<bool> {
        let todo = self.todos.get_mut(&id)?;
        todo.toggle();
        tracing::debug!(id, completed = todo.completed(), "todo toggled");
        Some(todo.completed())
    }

    pub fn get_all(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Remove a todo. Returns `false` when no todo had that id.
    pub fn delete(&mut self, id: u64) -> bool {
        let removed = self.todos.remove(&id).is_some();
        if removed {
            tracing::debug!(id, "todo deleted");
        }
        removed
    }

    pub fn filter(&self, criteria: &Criteria) -> Result<Vec<Todo>> {
        if let Err(err) = criteria.validate() {
            return self.malformed(err);
        }
        Ok(self.scan(|todo| criteria.matches(todo)))
    }

    /// Filter with criteria given as a JSON object.
    pub fn filter_json(&self, json: &serde_json::Value) -> Result<Vec<Todo>> {
        match self.criteria_from_json(json)? {
            Some(criteria) => Ok(self.scan(|todo| criteria.matches(todo))),
            None => Ok(self.get_all()),
        }
    }

    /// Parse JSON criteria under this store's policy.
    ///
    /// `Ok(None)` means the criteria were malformed and the policy says to
    /// apply no filtering.
    pub fn criteria_from_json(&self, json: &serde_json::Value) -> Result<Option<FieldCriteria>> {
        match FieldCriteria::from_json(json) {
            Ok(criteria) => Ok(Some(criteria)),
            Err(err) => self.malformed(err).map(|_| None),
        }
    }

    /// AND several field criteria together.
    pub fn filter_by(&self, criteria: &[FieldCriteria]) -> Result<Vec<Todo>> {
        let merged = criteria
            .iter()
            .cloned()
            .fold(FieldCriteria::new(), FieldCriteria::merge);
        self.filter(&Criteria::FieldMap(merged))
    }

    pub fn by_status(&self, completed: bool) -> Vec<Todo> {
        let criteria = FieldCriteria::new().equals("completed", completed);
        self.scan(|todo| criteria.matches(todo))
    }

    pub fn search_title(&self, term: &str) -> Vec<Todo> {
        let criteria = FieldCriteria::new().with("title", Operator::Contains, term);
        self.scan(|todo| criteria.matches(todo))
    }

    /// Set the active filter for `field`, replacing any previous one.
    ///
    /// Unlike condition objects, an active filter must name a known operator.
    pub fn set_filter(
        &mut self,
        field: &str,
        op: impl Into<Operator>,
        value: impl Into<FieldValue>,
    ) -> Result<()> {
        if field.is_empty() {
            return Err(TodozError::validation("Field must be a non-empty string"));
        }
        let op = op.into();
        if let Operator::Unknown(name) = &op {
            return Err(TodozError::validation(format!(
                "Invalid operation '{}' for field '{}'",
                name, field
            )));
        }
        let value = value.into();
        if value.is_null() {
            return Err(TodozError::validation("Filter value cannot be null"));
        }
        self.active_filters.insert(field.to_string(), (op, value));
        Ok(())
    }

    /// Remove the active filter for `field`. Returns whether one existed.
    pub fn remove_filter(&mut self, field: &str) -> Result<bool> {
        if field.is_empty() {
            return Err(TodozError::validation("Field must be a non-empty string"));
        }
        Ok(self.active_filters.remove(field).is_some())
    }

    pub fn clear_filters(&mut self) {
        self.active_filters.clear();
    }

    /// The active filters as field criteria.
    pub fn active_filters(&self) -> FieldCriteria {
        self.active_filters
            .iter()
            .fold(FieldCriteria::new(), |criteria, (field, (op, value))| {
                criteria.with(field.as_str(), op.clone(), value.clone())
            })
    }

    /// Todos matching every active filter (all todos when none is set).
    pub fn filtered(&self) -> Vec<Todo> {
        let criteria = self.active_filters();
        self.scan(|todo| criteria.matches(todo))
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_todos(&self.get_all())
    }

    fn scan(&self, keep: impl Fn(&Todo) -> bool) -> Vec<Todo> {
        self.todos
            .values()
            .filter(|todo| keep(todo))
            .cloned()
            .collect()
    }

    fn malformed(&self, err: TodozError) -> Result<Vec<Todo>> {
        match self.policy {
            MalformedCriteria::Reject => Err(err),
            MalformedCriteria::MatchAll => {
                tracing::warn!(error = %err, "malformed filter criteria, returning all todos");
                Ok(self.get_all())
            }
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: TodoStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: TodoStore::new(),
            }
        }

        pub fn with_policy(policy: MalformedCriteria) -> Self {
            Self {
                store: TodoStore::with_policy(policy),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.add(&format!("Test Todo {}", i + 1), None).unwrap();
            }
            self
        }

        pub fn with_todo(mut self, title: &str, priority: &str) -> Self {
            self.store.add(title, Some(priority)).unwrap();
            self
        }

        pub fn with_completed_todo(mut self, title: &str) -> Self {
            let id = self.store.add(title, None).unwrap().id();
            self.store.toggle(id);
            self
        }

        /// The five todos used by the demo, with 1 and 3 completed.
        pub fn with_sample_todos(self) -> Self {
            self.with_completed_todo("Write paper")
                .with_todo("Run experiments", "high")
                .with_completed_todo("Review code")
                .with_todo("Write unit tests", "low")
                .with_todo("Update documentation", "medium")
        }
    }
}
