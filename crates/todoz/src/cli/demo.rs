//! The demo scenario run by a naked `todoz`.

use serde::Serialize;
use serde_json::json;
use todozapp::api::TodozApi;
use todozapp::error::Result;
use todozapp::model::Todo;
use todozapp::query::{Criteria, FieldCriteria, Operator};
use todozapp::stats::Progress;

const SAMPLE_TODOS: [(&str, Option<&str>); 5] = [
    ("Write paper", None),
    ("Run experiments", Some("high")),
    ("Review code", None),
    ("Write unit tests", Some("low")),
    ("Update documentation", Some("medium")),
];

#[derive(Debug, Serialize)]
pub struct DemoSection {
    pub heading: String,
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub sections: Vec<DemoSection>,
    pub progress: Progress,
}

fn section(heading: &str, todos: Vec<Todo>) -> DemoSection {
    DemoSection {
        heading: heading.to_string(),
        todos,
    }
}

pub fn run(api: &mut TodozApi) -> Result<DemoReport> {
    let mut ids = Vec::with_capacity(SAMPLE_TODOS.len());
    for (title, priority) in SAMPLE_TODOS {
        let created = api.create_todo(title, priority)?;
        ids.extend(created.affected_todos.iter().map(Todo::id));
    }
    // "Write paper" and "Review code"
    api.toggle_todos(&[ids[0], ids[2]])?;

    let store = api.store();
    let sections = vec![
        section("All todos", store.get_all()),
        section("Completed todos", store.by_status(true)),
        section("Incomplete todos", store.by_status(false)),
        section("Todos containing \"write\"", store.search_title("write")),
        section(
            "Todos with id > 2",
            store.filter_json(&json!({"id": {"gt": 2}}))?,
        ),
        section(
            "Todos with title starting with \"Run\"",
            store.filter(
                &FieldCriteria::new()
                    .with("title", Operator::StartsWith, "Run")
                    .into(),
            )?,
        ),
        section(
            "Incomplete todos with id <= 3",
            store.filter_by(&[
                FieldCriteria::new().equals("completed", false),
                FieldCriteria::new().with("id", Operator::LessThanOrEqual, 3),
            ])?,
        ),
        section(
            "Todos with even ids",
            store.filter(&Criteria::predicate(|todo| todo.id() % 2 == 0))?,
        ),
        section(
            "Todos with title containing \"e\" and not completed",
            store.filter_json(&json!({"title": {"contains": "e"}, "completed": false}))?,
        ),
    ];

    Ok(DemoReport {
        sections,
        progress: Progress::analyze(&store.get_all()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use todozapp::stats::ProgressStatus;

    fn section_ids(report: &DemoReport, heading: &str) -> Vec<u64> {
        report
            .sections
            .iter()
            .find(|s| s.heading == heading)
            .map(|s| s.todos.iter().map(Todo::id).collect())
            .unwrap_or_default()
    }

    #[test]
    fn demo_sections() {
        let mut api = TodozApi::default();
        let report = run(&mut api).unwrap();

        assert_eq!(report.sections.len(), 9);
        assert_eq!(section_ids(&report, "All todos"), vec![1, 2, 3, 4, 5]);
        assert_eq!(section_ids(&report, "Completed todos"), vec![1, 3]);
        assert_eq!(section_ids(&report, "Incomplete todos"), vec![2, 4, 5]);
        assert_eq!(section_ids(&report, "Todos containing \"write\""), vec![1, 4]);
        assert_eq!(section_ids(&report, "Todos with id > 2"), vec![3, 4, 5]);
        assert_eq!(
            section_ids(&report, "Todos with title starting with \"Run\""),
            vec![2]
        );
        assert_eq!(section_ids(&report, "Incomplete todos with id <= 3"), vec![2]);
        assert_eq!(section_ids(&report, "Todos with even ids"), vec![2, 4]);
        assert_eq!(
            section_ids(
                &report,
                "Todos with title containing \"e\" and not completed"
            ),
            vec![2, 4, 5]
        );
    }

    #[test]
    fn demo_progress() {
        let mut api = TodozApi::default();
        let report = run(&mut api).unwrap();
        assert_eq!(report.progress.statistics.completion_rate, 40);
        assert_eq!(report.progress.status, ProgressStatus::NeedsAttention);
    }
}
