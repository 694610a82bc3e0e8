//! # Rendering
//!
//! Terminal output built with `colored`. Every function returns a `String`
//! so output can be checked in tests; the caller prints it. Colors are turned
//! off by the caller when stdout is not a terminal.

use super::demo::DemoReport;
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use todozapp::commands::{CmdMessage, CmdResult, MessageLevel};
use todozapp::config::TodozConfig;
use todozapp::model::{Priority, Todo};
use todozapp::stats::{Progress, Statistics};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 14;
const DONE_MARKER: &str = "[✓]";
const OPEN_MARKER: &str = "[ ]";
const EMPTY_LIST: &str = "No todos found.";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

fn priority_marker(priority: Priority) -> colored::ColoredString {
    match priority {
        Priority::High => "↑".red(),
        Priority::Medium => "•".yellow(),
        Priority::Low => "↓".green(),
    }
}

pub fn render_todo(todo: &Todo) -> String {
    let status = if todo.completed() {
        DONE_MARKER
    } else {
        OPEN_MARKER
    };
    // "[✓] ↑ "
    let prefix_width = status.width() + 3;

    let label = format!("{}: {}", todo.id(), todo.title());
    let available = LINE_WIDTH.saturating_sub(prefix_width + TIME_WIDTH);
    let label = truncate_to_width(&label, available);
    let padding = available.saturating_sub(label.width());

    let label = if todo.completed() {
        label.dimmed()
    } else {
        label.normal()
    };

    format!(
        "{} {} {}{}{}",
        status,
        priority_marker(todo.priority()),
        label,
        " ".repeat(padding),
        format_time_ago(todo.created_at()).dimmed()
    )
}

pub fn render_todo_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return format!("{}\n", EMPTY_LIST.dimmed());
    }
    todos
        .iter()
        .map(|todo| format!("{}\n", render_todo(todo)))
        .collect()
}

pub fn render_statistics(statistics: &Statistics, progress: Option<&Progress>) -> String {
    let mut out = format!("{}\n", statistics.summary().bold());
    if let Some(progress) = progress {
        out.push_str(&format!("{}\n", progress.insight.dimmed()));
    }
    out
}

pub fn render_result(result: &CmdResult) -> String {
    let mut out = render_messages(&result.messages);

    // the summary line already arrives as a message
    if let Some(progress) = &result.progress {
        out.push_str(&format!("{}\n", progress.insight.dimmed()));
    }
    if !result.listed_todos.is_empty() {
        out.push_str(&render_todo_list(&result.listed_todos));
    } else if result.messages.is_empty() && result.statistics.is_none() {
        out.push_str(&render_todo_list(&[]));
    }
    out
}

pub fn render_demo(report: &DemoReport) -> String {
    let mut out = String::new();
    for section in &report.sections {
        out.push_str(&format!("\n{}\n", format!("--- {} ---", section.heading).bold()));
        out.push_str(&render_todo_list(&section.todos));
    }
    out.push_str(&format!("\n{}\n", "--- Statistics ---".bold()));
    out.push_str(&render_statistics(
        &report.progress.statistics,
        Some(&report.progress),
    ));
    out
}

pub fn render_config(config: &TodozConfig) -> String {
    format!(
        "malformed_criteria = \"{}\"\nlog_level = \"{}\"\n",
        config.malformed_criteria, config.log_level
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use todozapp::api::TodozApi;
    use todozapp::config::MalformedCriteria;

    fn sample() -> Vec<Todo> {
        let mut api = TodozApi::default();
        api.create_todo("Write paper", None).unwrap();
        api.create_todo("Run experiments", Some("high")).unwrap();
        api.toggle_todos(&[1]).unwrap();
        api.store().get_all()
    }

    #[test]
    fn todo_line_shows_status_and_label() {
        colored::control::set_override(false);
        let todos = sample();

        let done = render_todo(&todos[0]);
        assert!(done.starts_with("[✓] • 1: Write paper"));

        let open = render_todo(&todos[1]);
        assert!(open.starts_with("[ ] ↑ 2: Run experiments"));
        assert_eq!(open.width(), LINE_WIDTH);
    }

    #[test]
    fn long_titles_are_truncated() {
        colored::control::set_override(false);
        let mut api = TodozApi::default();
        api.create_todo(&"x".repeat(200), None).unwrap();
        let line = render_todo(&api.store().get_all()[0]);
        assert!(line.contains('…'));
        assert_eq!(line.width(), LINE_WIDTH);
    }

    #[test]
    fn empty_list() {
        colored::control::set_override(false);
        assert_eq!(render_todo_list(&[]), "No todos found.\n");
    }

    #[test]
    fn result_with_messages_only() {
        colored::control::set_override(false);
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success("Filters cleared"));
        assert_eq!(render_result(&result), "Filters cleared\n");
    }

    #[test]
    fn result_with_statistics() {
        colored::control::set_override(false);
        let mut api = TodozApi::new(Default::default());
        api.create_todo("A", None).unwrap();
        let out = render_result(&api.stats().unwrap());
        assert_eq!(
            out,
            "0/1 todos completed (0%)\nReady to begin! Start tackling those todos.\n"
        );
        assert!(!out.contains(EMPTY_LIST));
    }

    #[test]
    fn config_listing() {
        let config = TodozConfig {
            malformed_criteria: MalformedCriteria::MatchAll,
            log_level: "debug".to_string(),
        };
        assert_eq!(
            render_config(&config),
            "malformed_criteria = \"match-all\"\nlog_level = \"debug\"\n"
        );
    }

    #[test]
    fn truncation_respects_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }
}
