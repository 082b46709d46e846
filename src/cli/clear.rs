//! `ohara clear` command implementation.

use crate::config::load_config;
use crate::error::Result;
use crate::navigation::{NavigationKit, RequestContext};
use crate::session::FileSession;

/// Run the clear command.
///
/// Drops the session's page history, or every key of the session with
/// `all`.
///
/// # Errors
///
/// Returns an error if the session cannot be opened or cleared.
pub fn run(session_id: &str, all: bool) -> Result<()> {
    let config = load_config()?;
    let session = FileSession::open(&config.storage.path, session_id)?;
    let request = RequestContext::parse("http://localhost/")?;
    let mut nav = NavigationKit::with_config(&session, request, config.navigation);

    if all {
        nav.clear_session()?;
        println!("Cleared session {session_id}.");
    } else {
        nav.clear_all()?;
        println!("Cleared page history for session {session_id}.");
    }

    Ok(())
}
