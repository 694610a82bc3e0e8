use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::store::TodoStore;

/// Toggle every todo in `ids`. Fails without toggling anything when an id is unknown.
pub fn run(store: &mut TodoStore, ids: &[u64]) -> Result<CmdResult> {
    if let Some(&missing) = ids.iter().find(|&&id| store.get(id).is_none()) {
        return Err(TodozError::NotFound(missing));
    }

    let mut result = CmdResult::default();
    for &id in ids {
        let Some(todo) = store.get_mut(id) else {
            continue;
        };
        todo.toggle();
        let state = if todo.completed() { "completed" } else { "reopened" };
        result.add_message(CmdMessage::success(format!(
            "Todo {} ({}): {}",
            state,
            id,
            todo.title()
        )));
        result.affected_todos.push(todo.clone());
    }

    Ok(result)
}
