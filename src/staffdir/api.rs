//! # API Facade
//!
//! [`DirectoryApi`] owns the record store and the edit session and is the
//! single entry point for every operation a front end can perform. It is a
//! thin dispatch layer: inputs go straight to the matching command, results
//! come back as structured `CmdResult`s, and no I/O happens anywhere inside.
//!
//! The same facade could sit behind a terminal loop, a web handler, or a
//! test harness without change.

use crate::commands::{self, CmdResult, EmployeeForm};
use crate::error::Result;
use crate::model::Employee;
use crate::session::EditSession;
use crate::store::RecordStore;

pub struct DirectoryApi {
    store: RecordStore,
    session: EditSession,
}

impl DirectoryApi {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            session: EditSession::new(),
        }
    }

    /// Create-or-update dispatch: creates when no edit is active, otherwise
    /// updates the record the session points at.
    pub fn submit(&mut self, form: &EmployeeForm) -> Result<CmdResult> {
        commands::submit::run(&mut self.store, &mut self.session, form)
    }

    pub fn begin_edit(&mut self, id: &str) -> Result<CmdResult> {
        commands::edit::run(&self.store, &mut self.session, id)
    }

    pub fn cancel_edit(&mut self) -> Result<CmdResult> {
        commands::cancel::run(&mut self.session)
    }

    pub fn delete(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &mut self.session, id)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.store.find(id)
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// The id under edit, if any.
    pub fn editing(&self) -> Option<&str> {
        self.session.current()
    }
}

impl Default for DirectoryApi {
    fn default() -> Self {
        Self::new()
    }
}
