use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::EditSession;

/// Abandon the edit in progress. Clearing an idle session is harmless and
/// only draws a warning.
pub fn run(session: &mut EditSession) -> Result<CmdResult> {
    let current = session.current().map(str::to_string);
    session.end();

    let mut result = CmdResult::default();
    match current {
        Some(id) => result.add_message(CmdMessage::info(format!("Edit of {} cancelled", id))),
        None => result.add_message(CmdMessage::warning("No edit in progress")),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn cancel_clears_active_edit() {
        let mut session = EditSession::new();
        session.begin("E1").unwrap();

        let result = run(&mut session).unwrap();

        assert_eq!(session.current(), None);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.messages[0].content.contains("E1"));
    }

    #[test]
    fn cancel_when_idle_warns() {
        let mut session = EditSession::new();
        let result = run(&mut session).unwrap();

        assert_eq!(session.current(), None);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
