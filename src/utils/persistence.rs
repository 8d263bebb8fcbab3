//! Session-marker persistence. The marker is an opaque token string written
//! on successful login or register, removed on logout, and consulted once at
//! startup to decide whether to restore the demo session.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::StoreError;

pub const SESSION_TOKEN_VALUE: &str = "mock_token";

const SESSION_FILE_NAME: &str = "session_token";
const APP_DIR_NAME: &str = "fintrack";

/// Abstracts where the session marker lives.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&self, token: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// File-backed token store under the platform data directory.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new() -> Result<Self, StoreError> {
        let base = dirs::data_dir().ok_or(StoreError::NoSessionDir)?;
        Ok(Self::with_base_dir(base.join(APP_DIR_NAME)))
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(SESSION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let token = fs::read_to_string(&self.path)?;
        let token = token.trim();
        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(token.to_string()))
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Stage to a temporary file so readers never see a partial write.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, token)?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: std::sync::Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: std::sync::Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.token.lock().expect("token lock").clone())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.token.lock().expect("token lock") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.token.lock().expect("token lock") = None;
        Ok(())
    }
}
