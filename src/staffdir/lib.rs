//! # Staffdir Architecture
//!
//! Staffdir is a **UI-agnostic employee directory library**. All records live
//! in memory for the lifetime of one session; there is no persistence and no
//! network. The interactive terminal front end is one client of the library,
//! not the library itself.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                        │
//! │  - Parses typed commands, renders the table, prints        │
//! │    status messages; the ONLY place that knows about        │
//! │    stdout/stderr                                           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - DirectoryApi facade owning the store and edit session   │
//! │  - Thin dispatch, returns structured Result types          │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Pure business logic, returns CmdResult                  │
//! │  - No I/O assumptions whatsoever                           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Core state (model.rs, store.rs, session.rs)               │
//! │  - Employee records, ordered RecordStore, EditSession      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Submit Dispatch
//!
//! The one piece of real branching logic: a submit acts as a create when no
//! edit is active and as an update when one is. While editing, the session's
//! id is authoritative — the form's id field is never trusted.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, and never assumes a terminal.
//! Mutating commands hand back the full listing and a set of leveled
//! messages; what the "view" and "notifier" do with them is their business.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: Core data types (`Employee`, `EmployeeFields`)
//! - [`store`]: The ordered in-memory record store
//! - [`session`]: The edit-session state machine
//! - [`error`]: Error types
//! - `cli`: Command parsing and rendering for the binary (not part of the
//!   lib API)

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
