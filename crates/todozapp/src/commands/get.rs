use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Priority;
use crate::query::{Criteria, FieldCriteria, Operator};
use crate::store::TodoStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoStatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

/// Listing options. Every field that is set narrows the result (AND).
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    pub status: TodoStatusFilter,
    pub priority: Option<Priority>,
    /// Case-insensitive substring of the title.
    pub search_term: Option<String>,
    /// Criteria object in the JSON operator syntax, e.g. `{"id": {"gt": 2}}`.
    pub criteria: Option<serde_json::Value>,
}

pub fn run(store: &TodoStore, filter: TodoFilter) -> Result<CmdResult> {
    let mut criteria = FieldCriteria::new();

    match filter.status {
        TodoStatusFilter::All => {}
        TodoStatusFilter::Completed => criteria = criteria.equals("completed", true),
        TodoStatusFilter::Pending => criteria = criteria.equals("completed", false),
    }
    if let Some(priority) = filter.priority {
        criteria = criteria.equals("priority", priority.as_str());
    }
    if let Some(term) = filter.search_term.as_deref() {
        criteria = criteria.with("title", Operator::Contains, term);
    }
    if let Some(json) = &filter.criteria {
        if let Some(parsed) = store.criteria_from_json(json)? {
            criteria = criteria.merge(parsed);
        }
    }

    let todos = store.filter(&Criteria::FieldMap(criteria))?;

    let mut result = CmdResult::default();
    if todos.is_empty() {
        result.add_message(CmdMessage::info("No todos found"));
    }
    Ok(result.with_listed_todos(todos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MalformedCriteria;
    use crate::error::TodozError;
    use crate::model::Todo;
    use crate::store::fixtures::StoreFixture;
    use serde_json::json;

    fn ids(result: &CmdResult) -> Vec<u64> {
        result.listed_todos.iter().map(Todo::id).collect()
    }

    #[test]
    fn default_filter_lists_everything() {
        let store = StoreFixture::new().with_sample_todos().store;
        let result = run(&store, TodoFilter::default()).unwrap();
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn status_filters() {
        let store = StoreFixture::new().with_sample_todos().store;
        let done = TodoFilter {
            status: TodoStatusFilter::Completed,
            ..Default::default()
        };
        let open = TodoFilter {
            status: TodoStatusFilter::Pending,
            ..Default::default()
        };
        assert_eq!(ids(&run(&store, done).unwrap()), vec![1, 3]);
        assert_eq!(ids(&run(&store, open).unwrap()), vec![2, 4, 5]);
    }

    #[test]
    fn options_combine_with_and() {
        let store = StoreFixture::new().with_sample_todos().store;
        let filter = TodoFilter {
            status: TodoStatusFilter::Pending,
            search_term: Some("WRITE".to_string()),
            priority: Some(Priority::Low),
            criteria: None,
        };
        assert_eq!(ids(&run(&store, filter).unwrap()), vec![4]);
    }

    #[test]
    fn json_criteria_are_applied() {
        let store = StoreFixture::new().with_sample_todos().store;
        let filter = TodoFilter {
            criteria: Some(json!({"id": {"gt": 2}, "title": {"startsWith": "u"}})),
            ..Default::default()
        };
        assert_eq!(ids(&run(&store, filter).unwrap()), vec![5]);
    }

    #[test]
    fn empty_result_has_info_message() {
        let store = StoreFixture::new().with_todos(2).store;
        let filter = TodoFilter {
            search_term: Some("nothing like this".to_string()),
            ..Default::default()
        };
        let result = run(&store, filter).unwrap();
        assert!(result.listed_todos.is_empty());
        assert_eq!(result.messages[0].content, "No todos found");
    }

    #[test]
    fn malformed_json_follows_store_policy() {
        let filter = TodoFilter {
            status: TodoStatusFilter::Completed,
            criteria: Some(json!(["completed"])),
            ..Default::default()
        };

        let strict = StoreFixture::new().with_sample_todos().store;
        assert!(matches!(
            run(&strict, filter.clone()),
            Err(TodozError::Validation(_))
        ));

        let lenient = StoreFixture::with_policy(MalformedCriteria::MatchAll)
            .with_sample_todos()
            .store;
        assert_eq!(ids(&run(&lenient, filter).unwrap()), vec![1, 3]);
    }
}
