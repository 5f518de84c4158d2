use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::EditSession;
use crate::store::RecordStore;

/// Remove a record. If it was the one under edit, the session is ended as
/// well so it never references a record that no longer exists.
pub fn run(store: &mut RecordStore, session: &mut EditSession, id: &str) -> Result<CmdResult> {
    let removed = store.delete(id)?;
    if session.current() == Some(id) {
        session.end();
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee deleted: {} ({})",
        removed.name, removed.id
    )));
    result.affected.push(removed);
    result.attach_listing(store);
    Ok(result)
}
