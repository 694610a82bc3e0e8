//! JSON-lines scripts: one operation per line, all against the same store.

use serde::Deserialize;
use std::io::BufRead;
use todozapp::api::TodozApi;
use todozapp::commands::get::{TodoFilter, TodoStatusFilter};
use todozapp::commands::CmdResult;
use todozapp::error::{Result, TodozError};
use todozapp::model::Priority;
use todozapp::query::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusArg {
    All,
    Completed,
    Pending,
}

impl From<StatusArg> for TodoStatusFilter {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::All => TodoStatusFilter::All,
            StatusArg::Completed => TodoStatusFilter::Completed,
            StatusArg::Pending => TodoStatusFilter::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    Add {
        #[serde(default)]
        title: FieldValue,
        #[serde(default)]
        completed: FieldValue,
        #[serde(default)]
        priority: FieldValue,
    },
    Get {
        id: u64,
    },
    List {
        #[serde(default)]
        status: Option<StatusArg>,
        #[serde(default)]
        priority: Option<String>,
        #[serde(default)]
        search: Option<String>,
        #[serde(default)]
        criteria: Option<serde_json::Value>,
    },
    FilterBy {
        criteria: Vec<serde_json::Value>,
    },
    Toggle {
        ids: Vec<u64>,
    },
    Delete {
        ids: Vec<u64>,
    },
    Stats,
    SetFilter {
        field: String,
        operator: String,
        value: FieldValue,
    },
    RemoveFilter {
        field: String,
    },
    ClearFilters,
    Filtered,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ScriptOp>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(line)?))
}

fn decode_line(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes)
        .map_err(|e| TodozError::validation(format!("line is not valid UTF-8: {}", e)))
}

pub fn execute(api: &mut TodozApi, op: ScriptOp) -> Result<CmdResult> {
    match op {
        ScriptOp::Add {
            title,
            completed,
            priority,
        } => api.create_from_values(&title, &completed, &priority),
        ScriptOp::Get { id } => {
            let todo = api.store().get(id).cloned().ok_or(TodozError::NotFound(id))?;
            Ok(CmdResult::default().with_listed_todos(vec![todo]))
        }
        ScriptOp::List {
            status,
            priority,
            search,
            criteria,
        } => {
            let priority = priority.as_deref().map(str::parse::<Priority>).transpose()?;
            let filter = TodoFilter {
                status: status.map(Into::into).unwrap_or_default(),
                priority,
                search_term: search,
                criteria,
            };
            api.get_todos(filter)
        }
        ScriptOp::FilterBy { criteria } => api.filter_by(&criteria),
        ScriptOp::Toggle { ids } => api.toggle_todos(&ids),
        ScriptOp::Delete { ids } => api.delete_todos(&ids),
        ScriptOp::Stats => api.stats(),
        ScriptOp::SetFilter {
            field,
            operator,
            value,
        } => api.set_filter(&field, &operator, value),
        ScriptOp::RemoveFilter { field } => api.remove_filter(&field),
        ScriptOp::ClearFilters => api.clear_filters(),
        ScriptOp::Filtered => api.filtered(),
    }
}

/// Run every line of `reader`, handing each outcome to `report` with its
/// 1-based line number. Failing lines do not stop the script.
pub fn run<R, F>(api: &mut TodozApi, mut reader: R, mut report: F) -> Result<ScriptSummary>
where
    R: BufRead,
    F: FnMut(usize, Result<CmdResult>) -> Result<()>,
{
    let mut summary = ScriptSummary::default();
    let mut buf = Vec::new();
    let mut number = 0;

    // Lines are read as bytes so that one undecodable line fails on its own.
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;

        let outcome = match decode_line(&buf).and_then(parse_line) {
            Ok(None) => continue,
            Ok(Some(op)) => execute(api, op),
            Err(e) => Err(e),
        };

        summary.executed += 1;
        if let Err(e) = &outcome {
            summary.failed += 1;
            tracing::debug!(line = number, error = %e, "script line failed");
        }
        report(number, outcome)?;
    }

    Ok(summary)
}
