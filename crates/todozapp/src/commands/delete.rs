use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TodoStore;

pub fn run(store: &mut TodoStore, ids: &[u64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let Some(todo) = store.get(id).cloned() else {
            result.add_message(CmdMessage::warning(format!("Todo {} not found", id)));
            continue;
        };
        store.delete(id);
        result.add_message(CmdMessage::success(format!(
            "Todo deleted ({}): {}",
            id,
            todo.title()
        )));
        result.affected_todos.push(todo);
    }

    Ok(result)
}
