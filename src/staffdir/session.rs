//! # Edit Session
//!
//! Tracks which record, if any, is currently being edited. This is the one
//! piece of state that decides whether a submit creates a new record or
//! updates an existing one.

use crate::error::{DirectoryError, Result};

/// Two-state machine: `Idle` or `Editing(id)`.
///
/// While an edit is active, the stored id is authoritative; whatever id the
/// form carries at submit time is ignored. Starting a second edit without
/// ending the first is rejected so an active edit is never silently
/// discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(String),
}

impl EditSession {
    pub fn new() -> Self {
        Self::Idle
    }

    /// `Idle -> Editing(id)`. Callers are responsible for checking that the
    /// id exists before beginning; the session itself does not consult the
    /// store.
    pub fn begin(&mut self, id: impl Into<String>) -> Result<()> {
        match self {
            Self::Idle => {
                *self = Self::Editing(id.into());
                Ok(())
            }
            Self::Editing(current) => Err(DirectoryError::EditInProgress(current.clone())),
        }
    }

    pub fn current(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(id),
        }
    }

    /// Clears unconditionally: used for cancel, after a successful update,
    /// and when the record under edit disappears.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}
