use serde_json::json;
use todozapp::config::MalformedCriteria;
use todozapp::error::TodozError;
use todozapp::model::{NewTodo, Priority, Todo};
use todozapp::query::{Criteria, FieldCriteria, FieldValue, MatchMode};
use todozapp::stats::Statistics;
use todozapp::store::TodoStore;

fn ids(todos: &[Todo]) -> Vec<u64> {
    todos.iter().map(Todo::id).collect()
}

fn add_null_title(store: &mut TodoStore) -> todozapp::error::Result<Todo> {
    let draft = NewTodo::from_values(&FieldValue::Null, &FieldValue::Null, &FieldValue::Null)?;
    Ok(store.add_draft(draft))
}

#[test]
fn end_to_end_scenario() {
    let mut store = TodoStore::new();

    let paper = store.add("Write paper", None).unwrap();
    assert_eq!(paper.id(), 1);
    assert_eq!(paper.priority(), Priority::Medium);
    assert!(!paper.completed());

    let experiments = store.add("Run experiments", Some("high")).unwrap();
    assert_eq!(experiments.id(), 2);
    assert_eq!(experiments.priority(), Priority::High);

    store.get_mut(1).unwrap().toggle();

    let all = store.get_all();
    assert_eq!(ids(&all), vec![1, 2]);
    assert!(all[0].completed());
    assert!(!all[1].completed());

    let done = store
        .filter(&FieldCriteria::new().equals("completed", true).into())
        .unwrap();
    assert_eq!(done, vec![all[0].clone()]);

    assert_eq!(
        store.statistics(),
        Statistics {
            total: 2,
            completed: 1,
            pending: 1,
            completion_rate: 50,
        }
    );
}

#[test]
fn ids_are_monotonic_across_deletes() {
    let mut store = TodoStore::new();
    let mut issued = Vec::new();
    for i in 0..10 {
        issued.push(store.add(&format!("todo {}", i), None).unwrap().id());
        if i % 3 == 0 {
            store.delete(*issued.last().unwrap());
        }
    }
    assert_eq!(issued, (1..=10).collect::<Vec<_>>());
}

#[test]
fn invalid_titles_leave_store_unchanged() {
    let mut store = TodoStore::new();
    store.add("keep", None).unwrap();
    let before = store.get_all();

    assert!(matches!(store.add("", None), Err(TodozError::Validation(_))));
    assert!(matches!(store.add("   ", None), Err(TodozError::Validation(_))));
    assert!(matches!(
        add_null_title(&mut store),
        Err(TodozError::Validation(_))
    ));

    assert_eq!(store.get_all(), before);
}

#[test]
fn priority_is_validated_and_normalized() {
    let mut store = TodoStore::new();
    assert!(store.add("x", Some("URGENT")).is_err());
    assert!(store.add("x", Some("")).is_err());
    assert_eq!(store.add("x", Some("HIGH")).unwrap().priority(), Priority::High);
    assert_eq!(store.add("x", None).unwrap().priority(), Priority::Medium);
}

#[test]
fn delete_removes_exactly_one_record() {
    let mut store = TodoStore::new();
    for title in ["a", "b", "c"] {
        store.add(title, None).unwrap();
    }
    let before = store.get_all();

    assert!(!store.delete(42));
    assert_eq!(store.get_all(), before);

    assert!(store.delete(2));
    assert!(!store.delete(2));
    assert_eq!(store.get_all(), vec![before[0].clone(), before[2].clone()]);
}

#[test]
fn contains_ignores_case_on_both_sides() {
    let mut store = TodoStore::new();
    store.add("xabcx", None).unwrap();
    store.add("XABCX", None).unwrap();
    store.add("AbC", None).unwrap();
    store.add("none", None).unwrap();

    for operand in ["ABC", "abc", "aBc"] {
        let found = store
            .filter_json(&json!({"title": {"contains": operand}}))
            .unwrap();
        assert_eq!(ids(&found), vec![1, 2, 3]);
    }
}

#[test]
fn greater_than_and_intersection() {
    let mut store = TodoStore::new();
    for i in 1..=5 {
        store.add(&format!("t{}", i), None).unwrap();
    }
    store.toggle(4);

    let above = store.filter_json(&json!({"id": {"gt": 2}})).unwrap();
    assert_eq!(ids(&above), vec![3, 4, 5]);

    let open_above = store
        .filter_json(&json!({"id": {"gt": 2}, "completed": false}))
        .unwrap();
    assert_eq!(ids(&open_above), vec![3, 5]);
}

#[test]
fn empty_store_statistics() {
    let store = TodoStore::new();
    assert_eq!(store.statistics().completion_rate, 0);
    assert_eq!(store.statistics().total, 0);
}

#[test]
fn unknown_operator_matches_everything() {
    let mut store = TodoStore::new();
    store.add("a", None).unwrap();
    store.add("b", None).unwrap();
    let found = store
        .filter_json(&json!({"title": {"sounds_like": "zzz"}}))
        .unwrap();
    assert_eq!(found.len(), 2);
}

#[test]
fn missing_field_excludes_records() {
    let mut store = TodoStore::new();
    store.add("a", None).unwrap();
    assert!(store.filter_json(&json!({"owner": "me"})).unwrap().is_empty());
    assert!(store
        .filter(&Criteria::field_match("owner", "me", MatchMode::Substring))
        .unwrap()
        .is_empty());
}

#[test]
fn malformed_policy_is_selectable() {
    let mut strict = TodoStore::with_policy(MalformedCriteria::Reject);
    let mut lenient = TodoStore::with_policy(MalformedCriteria::MatchAll);
    for store in [&mut strict, &mut lenient] {
        store.add("a", None).unwrap();
        store.add("b", None).unwrap();
    }

    let bad = json!("not an object");
    assert!(strict.filter_json(&bad).is_err());
    assert_eq!(lenient.filter_json(&bad).unwrap().len(), 2);
}

#[test]
fn snapshots_do_not_follow_mutations() {
    let mut store = TodoStore::new();
    store.add("a", None).unwrap();
    let snapshot = store.filter_json(&json!({"completed": false})).unwrap();
    store.toggle(1);
    assert!(!snapshot[0].completed());
}
