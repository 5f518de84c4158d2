use crate::commands::{CmdMessage, CmdResult, EmployeeForm};
use crate::error::Result;
use crate::model::{Employee, EmployeeFields};
use crate::session::EditSession;
use crate::store::RecordStore;

/// The create-or-update dispatch.
///
/// An idle session means the form describes a new record. An active session
/// means the fields replace the record the session points at, keyed by the
/// session's id — never the form's, whatever it says. A successful update
/// ends the session; a failure leaves both store and session untouched so
/// the user can correct the input and retry.
pub fn run(
    store: &mut RecordStore,
    session: &mut EditSession,
    form: &EmployeeForm,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match session.current().map(str::to_string) {
        None => {
            let employee = Employee::new(&form.id, &form.name, &form.address)?;
            let created = store.create(employee)?;
            result.add_message(CmdMessage::success(format!(
                "Employee added: {} ({})",
                created.name, created.id
            )));
            result.affected.push(created);
        }
        Some(id) => {
            let fields = EmployeeFields::new(&form.name, &form.address)?;
            let updated = match store.update(&id, fields) {
                Ok(updated) => updated,
                Err(err) => {
                    // The record under edit no longer exists; the session
                    // is stale and must not keep pointing at it.
                    session.end();
                    return Err(err);
                }
            };
            session.end();
            result.add_message(CmdMessage::success(format!(
                "Employee updated: {} ({})",
                updated.name, updated.id
            )));
            result.affected.push(updated);
        }
    }

    result.attach_listing(store);
    Ok(result)
}
