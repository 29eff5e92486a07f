//! Durable local session storage.
//!
//! The active identity is the full user record, serialized into a single
//! JSON file under the application data directory — read at startup,
//! rewritten on login/profile change, removed on logout.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::domain::User;
use crate::errors::Result;
use crate::utils::paths::{ensure_dir, session_file_in};
use crate::utils::persistence::write_json_atomic;

pub struct SessionStore {
    file: PathBuf,
}

impl SessionStore {
    pub fn new(base: impl Into<PathBuf>) -> Result<Self> {
        let base = base.into();
        ensure_dir(&base)?;
        Ok(Self {
            file: session_file_in(&base),
        })
    }

    /// Reads the persisted session, if any.
    ///
    /// A missing or undecodable file reads as logged-out rather than an error.
    pub fn load(&self) -> Result<Option<User>> {
        if !self.file.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.file)?;
        match serde_json::from_str(&data) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                warn!("discarding undecodable session record: {err}");
                Ok(None)
            }
        }
    }

    /// Persists the user as the active session, atomically.
    pub fn save(&self, user: &User) -> Result<()> {
        write_json_atomic(&self.file, user)
    }

    /// Forgets the active session.
    pub fn clear(&self) -> Result<()> {
        if self.file.exists() {
            fs::remove_file(&self.file)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.file
    }
}
