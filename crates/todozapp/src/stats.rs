//! Aggregate statistics over a list of todos.
//!
//! Everything here is a pure function of the slice it is given; the store
//! hands in a snapshot from [`crate::store::TodoStore::get_all`].

use serde::Serialize;

use crate::model::Todo;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percentage of completed todos, rounded half up. 0 for an empty list.
    pub completion_rate: u32,
}

impl Statistics {
    pub fn from_todos(todos: &[Todo]) -> Self {
        let total = todos.len();
        let completed = todos.iter().filter(|t| t.completed()).count();
        Self {
            total,
            completed,
            pending: total - completed,
            completion_rate: completion_rate(completed, total),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{}/{} todos completed ({}%)",
            self.completed, self.total, self.completion_rate
        )
    }
}

fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // floor(completed * 100 / total + 1/2) without leaving integers
    let rate = (completed * 200 + total) / (total * 2);
    u32::try_from(rate).unwrap_or(100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    None,
    Starting,
    NeedsAttention,
    Moderate,
    Good,
    Excellent,
}

impl ProgressStatus {
    pub fn insight(&self) -> &'static str {
        match self {
            ProgressStatus::None => "No todos available",
            ProgressStatus::Starting => "Ready to begin! Start tackling those todos.",
            ProgressStatus::NeedsAttention => "Many todos still pending. Time to focus!",
            ProgressStatus::Moderate => "Making progress. Consider focusing on remaining tasks.",
            ProgressStatus::Good => "Most todos completed. Keep up the good work!",
            ProgressStatus::Excellent => "All todos completed! Great job!",
        }
    }
}

/// Completion rate bucketed into a status with a human-readable insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub status: ProgressStatus,
    pub insight: &'static str,
    pub statistics: Statistics,
}

impl Progress {
    pub fn analyze(todos: &[Todo]) -> Self {
        Self::from_statistics(Statistics::from_todos(todos))
    }

    pub fn from_statistics(statistics: Statistics) -> Self {
        let status = match (statistics.total, statistics.completion_rate) {
            (0, _) => ProgressStatus::None,
            (_, 100) => ProgressStatus::Excellent,
            (_, rate) if rate >= 75 => ProgressStatus::Good,
            (_, rate) if rate >= 50 => ProgressStatus::Moderate,
            (_, rate) if rate > 0 => ProgressStatus::NeedsAttention,
            _ => ProgressStatus::Starting,
        };
        Self {
            status,
            insight: status.insight(),
            statistics,
        }
    }
}

/// Split todos into `(completed, pending)`, each in the original order.
pub fn status_breakdown(todos: &[Todo]) -> (Vec<&Todo>, Vec<&Todo>) {
    todos.iter().partition(|t| t.completed())
}
