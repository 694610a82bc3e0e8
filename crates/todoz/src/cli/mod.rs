//! # CLI Behavior
//!
//! This is **one possible UI client** for todozapp. The CLI is the only place
//! that knows about terminal I/O, exit codes and output formatting.
//!
//! ### Naked Execution (`todoz`)
//!
//! Running `todoz` with no arguments runs the demo scenario.
//!
//! ### Scripts (`todoz run`)
//!
//! Reads one JSON object per line, each tagged by `"op"`:
//!
//! ```text
//! {"op": "add", "title": "Write paper"}
//! {"op": "add", "title": "Run experiments", "priority": "high"}
//! {"op": "toggle", "ids": [1]}
//! {"op": "list", "criteria": {"id": {"gt": 1}}}
//! {"op": "stats"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A failing line is
//! reported on stderr as `line N: <error>` and the script keeps going; the
//! exit status is non-zero when any line failed.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and dispatch
//! - `demo`: the scripted demo scenario
//! - `render`: terminal output
//! - `script`: JSON-lines script parsing and execution
//! - `setup`: argument parsing via clap

mod commands;
mod demo;
mod render;
mod script;
pub mod setup;

pub use commands::run;
