//! `ohara sessions` command implementation.

use crate::config::load_config;
use crate::error::Result;
use crate::session::FileSession;

/// Run the sessions command.
///
/// Lists the file-backed sessions under the storage path.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be read.
pub fn run() -> Result<()> {
    let config = load_config()?;
    let sessions = FileSession::list_sessions(&config.storage.path)?;

    if sessions.is_empty() {
        println!("No sessions found.");
        println!(
            "\nSessions are stored in: {}",
            config.storage.path.display()
        );
        return Ok(());
    }

    for session in &sessions {
        println!("{session}");
    }
    println!("Showing {} session(s)", sessions.len());

    Ok(())
}
