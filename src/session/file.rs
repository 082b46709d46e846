//! File-based session backend.
//!
//! Layout: `<base>/sessions/<session id>/<hex(key)>.bin`.

use crate::error::{Error, Result};
use crate::session::traits::SessionStore;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Longest key whose hex file name (plus extension) fits a 255-byte name.
const MAX_KEY_LEN: usize = 125;

/// One session persisted as a directory of key files, with atomic writes.
#[derive(Debug)]
pub struct FileSession {
    session_id: String,
    dir: PathBuf,
}

impl FileSession {
    /// Open (creating if needed) the session `session_id` under `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session id is not a plain name or the
    /// session directory cannot be created.
    pub fn open(base_dir: &Path, session_id: &str) -> Result<Self> {
        validate_session_id(session_id)?;
        let dir = sessions_dir(base_dir).join(session_id);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            session_id: session_id.to_string(),
            dir,
        })
    }

    /// Session identifier.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// List the session ids stored under `base_dir`, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the sessions directory cannot be read.
    pub fn list_sessions(base_dir: &Path) -> Result<Vec<String>> {
        let dir = sessions_dir(base_dir);
        let mut sessions = Vec::new();

        if !dir.exists() {
            return Ok(sessions);
        }

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    sessions.push(name.to_string());
                }
            }
        }

        sessions.sort();
        Ok(sessions)
    }

    /// Delete the whole session directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be removed.
    pub fn destroy(self) -> Result<()> {
        match fs::remove_dir_all(&self.dir) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// Get the path to a key file.
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.len() > MAX_KEY_LEN {
            return Err(Error::InvalidState(format!(
                "Session key is {} bytes; the file store allows at most {MAX_KEY_LEN}",
                key.len()
            )));
        }
        Ok(self.dir.join(format!("{}.bin", hex::encode(key))))
    }
}

fn sessions_dir(base_dir: &Path) -> PathBuf {
    base_dir.join("sessions")
}

fn validate_session_id(session_id: &str) -> Result<()> {
    let valid = !session_id.is_empty()
        && session_id != "."
        && session_id != ".."
        && !session_id.contains(['/', '\\']);
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidState(format!(
            "Invalid session id: {session_id:?}"
        )))
    }
}

impl SessionStore for FileSession {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.key_path(key)?) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.key_path(key)?;
        let temp = path.with_extension("tmp");

        fs::create_dir_all(&self.dir)?;
        fs::write(&temp, value)?;

        // Readers see either the old or the new blob
        fs::rename(&temp, &path)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)?) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    fn clear(&self) -> Result<()> {
        if !self.dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() {
                fs::remove_file(&path)?;
            }
        }

        Ok(())
    }
}
