//! # Todoz CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/todozapp/`: the UI-agnostic library (store, query engine, commands)
//! - `crates/todoz/`: this CLI, depending on `todozapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/todoz/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - JSON-lines scripts (script.rs), demo (demo.rs)           │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/todozapp/src/api.rs)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is persisted between runs, so every invocation starts from an
//! empty store. `todoz run` is the way to drive a sequence of operations.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to the commands and store.
//! - **CLI**: unit tests for parsing, scripts and rendering inside `src/cli/`,
//!   plus `assert_cmd` end-to-end tests in `tests/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
