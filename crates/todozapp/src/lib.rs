//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic todo library** with a small in-memory store and a
//! flexible query engine. The `todoz` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (todoz crate)                                          │
//! │  - Parses arguments and scripts, renders output             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store.rs) + Query engine (query/)                   │
//! │  - Records, ids, filtering, active filters                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is persisted. A store lives as long as its owner.
//!
//! ## Querying
//!
//! Todos can be selected with a predicate closure, a single field match, or
//! a map of field conditions using operators such as `contains`, `gt` and
//! `in`. See [`query`] for the full operator table.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: The todo collection and its fixtures
//! - [`query`]: Field values, operators and criteria
//! - [`model`]: `Todo`, `NewTodo`, `Priority`
//! - [`stats`]: Statistics and progress analysis
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod stats;
pub mod store;
