//! In-memory session backend.

use crate::error::{Error, Result};
use crate::session::traits::SessionStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory session, used for tests and for embedding in a host that keeps
/// sessions in process.
#[derive(Debug, Default)]
pub struct MemorySession {
    values: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemorySession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.len())
    }

    /// Whether the session holds no keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::InvalidState("session lock poisoned".to_string())
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key() {
        let session = MemorySession::new();
        assert!(session.get("nonexistent").unwrap().is_none());
    }

    #[test]
    fn set_and_get() {
        let session = MemorySession::new();
        session.set("key", b"value").unwrap();
        assert_eq!(session.get("key").unwrap().unwrap(), b"value");
    }

    #[test]
    fn set_overwrites() {
        let session = MemorySession::new();
        session.set("key", b"first").unwrap();
        session.set("key", b"second").unwrap();
        assert_eq!(session.get("key").unwrap().unwrap(), b"second");
        assert_eq!(session.len().unwrap(), 1);
    }

    #[test]
    fn remove_key() {
        let session = MemorySession::new();
        session.set("key", b"value").unwrap();
        session.remove("key").unwrap();
        assert!(session.get("key").unwrap().is_none());
    }

    #[test]
    fn remove_missing_key_succeeds() {
        let session = MemorySession::new();
        session.remove("nonexistent").unwrap();
    }

    #[test]
    fn clear_drops_every_key() {
        let session = MemorySession::new();
        session.set("a", b"1").unwrap();
        session.set("b", b"2").unwrap();

        session.clear().unwrap();
        assert!(session.is_empty().unwrap());
    }

    #[test]
    fn concurrent_writes() {
        use std::sync::Arc;
        use std::thread;

        let session = Arc::new(MemorySession::new());

        let mut handles = vec![];
        for i in 0..10 {
            let session = Arc::clone(&session);
            handles.push(thread::spawn(move || {
                for j in 0..10 {
                    session.set(&format!("key-{i}-{j}"), b"x").unwrap();
                }
            }));
        }

        for handle in handles {
            handle.join().expect("Thread panicked");
        }

        assert_eq!(session.len().unwrap(), 100);
    }
}
