//! # API Facade
//!
//! [`TodozApi`] is the single entry point for UI clients. It owns a
//! [`TodoStore`] and dispatches to the command layer.
//!
//! The API does not hold business logic, perform I/O or format output. Store
//! level operations without a command of their own (criteria lists, active
//! filters) are wrapped here into a [`CmdResult`] so that every client call
//! returns the same shape.
//!
//! API tests check dispatch only; command logic is tested in `commands/`.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::TodozConfig;
use crate::error::Result;
use crate::model::NewTodo;
use crate::query::{FieldValue, Operator};
use crate::store::TodoStore;

pub struct TodozApi {
    store: TodoStore,
}

impl Default for TodozApi {
    fn default() -> Self {
        Self::new(TodoStore::new())
    }
}

impl TodozApi {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    pub fn from_config(config: &TodozConfig) -> Self {
        Self::new(TodoStore::from_config(config))
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn create_todo(&mut self, title: &str, priority: Option<&str>) -> Result<CmdResult> {
        commands::create::run(&mut self.store, title, priority)
    }

    pub fn create_from_values(
        &mut self,
        title: &FieldValue,
        completed: &FieldValue,
        priority: &FieldValue,
    ) -> Result<CmdResult> {
        let draft = NewTodo::from_values(title, completed, priority)?;
        Ok(commands::create::run_draft(&mut self.store, draft))
    }

    pub fn get_todos(&self, filter: commands::get::TodoFilter) -> Result<CmdResult> {
        commands::get::run(&self.store, filter)
    }

    pub fn toggle_todos(&mut self, ids: &[u64]) -> Result<CmdResult> {
        commands::toggle::run(&mut self.store, ids)
    }

    pub fn delete_todos(&mut self, ids: &[u64]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    /// AND together several JSON criteria objects.
    pub fn filter_by(&self, criteria: &[serde_json::Value]) -> Result<CmdResult> {
        let mut parsed = Vec::with_capacity(criteria.len());
        for json in criteria {
            if let Some(c) = self.store.criteria_from_json(json)? {
                parsed.push(c);
            }
        }
        let todos = self.store.filter_by(&parsed)?;
        Ok(CmdResult::default().with_listed_todos(todos))
    }

    pub fn set_filter(
        &mut self,
        field: &str,
        op: &str,
        value: impl Into<FieldValue>,
    ) -> Result<CmdResult> {
        let op = Operator::parse(op);
        let value = value.into();
        let content = format!("Filter set: {} {} {}", field, op, value);
        self.store.set_filter(field, op, value)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(content));
        Ok(result)
    }

    pub fn remove_filter(&mut self, field: &str) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        if self.store.remove_filter(field)? {
            result.add_message(CmdMessage::success(format!("Filter removed: {}", field)));
        } else {
            result.add_message(CmdMessage::warning(format!("No filter on {}", field)));
        }
        Ok(result)
    }

    pub fn clear_filters(&mut self) -> Result<CmdResult> {
        self.store.clear_filters();
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success("Filters cleared"));
        Ok(result)
    }

    pub fn filtered(&self) -> Result<CmdResult> {
        Ok(CmdResult::default().with_listed_todos(self.store.filtered()))
    }
}
