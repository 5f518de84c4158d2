use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DirectoryError, Result};
use crate::session::EditSession;
use crate::store::RecordStore;

/// Begin editing a record. The id must exist; the session itself does not
/// check, so this command consults the store first. The current record is
/// returned in `affected` so the view can pre-fill its form.
pub fn run(store: &RecordStore, session: &mut EditSession, id: &str) -> Result<CmdResult> {
    let employee = store
        .find(id)
        .cloned()
        .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;
    session.begin(employee.id.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Editing employee {}: {}",
        employee.id, employee.name
    )));
    result.affected.push(employee);
    Ok(result)
}
