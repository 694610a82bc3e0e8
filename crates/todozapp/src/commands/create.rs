use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewTodo;
use crate::store::TodoStore;

pub fn run(store: &mut TodoStore, title: &str, priority: Option<&str>) -> Result<CmdResult> {
    let draft = NewTodo::new(title, priority)?;
    Ok(insert(store, draft))
}

/// Insert a draft that was validated elsewhere (e.g. from dynamic values).
pub fn run_draft(store: &mut TodoStore, draft: NewTodo) -> CmdResult {
    insert(store, draft)
}

fn insert(store: &mut TodoStore, draft: NewTodo) -> CmdResult {
    let todo = store.add_draft(draft);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Todo created ({}): {}",
        todo.id(),
        todo.title()
    )));
    result.with_affected_todos(vec![todo])
}
