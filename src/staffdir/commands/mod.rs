//! # Command Layer
//!
//! The business logic of staffdir. Each operation lives in its own submodule
//! as a pure function over the store and session; all of them return a
//! structured [`CmdResult`] and never touch stdout, stderr, or the terminal.
//!
//! A `CmdResult` carries everything a front end needs to react:
//! - `affected`: records the command created, replaced, or removed
//! - `listed` + `count`: the full ordered listing, attached after every
//!   mutation so the view can do a complete re-render
//! - `messages`: leveled status messages for the notifier to display
//!
//! The UI layer decides how (and whether) to render any of it.
//!
//! This is where the lion's share of testing lives: each command module unit
//! tests its own branches against a plain in-memory store.

use crate::model::Employee;
use crate::store::RecordStore;

pub mod cancel;
pub mod delete;
pub mod edit;
pub mod list;
pub mod submit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Raw field values exactly as submitted; nothing is trimmed or validated
/// yet. During an edit the `id` is presentational only and never trusted —
/// the session's id is the source of truth.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub id: String,
    pub name: String,
    pub address: String,
}

impl EmployeeForm {
    pub fn new(id: impl Into<String>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Employee>,
    pub listed: Vec<Employee>,
    pub count: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub(crate) fn attach_listing(&mut self, store: &RecordStore) {
        self.listed = store.records().to_vec();
        self.count = store.count();
    }
}
