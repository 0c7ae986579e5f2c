//! Session state and its on-disk persistence.
//!
//! A successful `POST /users/authenticate` returns:
//!
//! ```json
//! { "data": { "username": "alice", "userId": 906345798374325453, "key": "906345798374325453-1a2b..." } }
//! ```
//!
//! `key` is the session credential sent back in the `vine-session-id` header.
//! The same shape is what [`Settings::save`] writes to
//! `~/.config/vine-api/session.json`, so a saved session can seed a new client
//! without logging in again.

use crate::error::{Result, VineError};
use crate::types::id_string;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The three pieces of authorization state, as returned by the authenticate
/// endpoint or supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Opaque session credential.
    #[serde(rename = "key", alias = "credential")]
    pub credential: String,
    /// Authenticated user ID. Always a string; large IDs do not fit an `f64`.
    #[serde(rename = "userId", alias = "user_id", with = "id_string")]
    pub user_id: String,
    /// Authenticated username.
    pub username: String,
}

impl Settings {
    /// Build settings from a credential, user ID and username.
    pub fn new(
        credential: impl Into<String>,
        user_id: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            credential: credential.into(),
            user_id: user_id.into(),
            username: username.into(),
        }
    }

    /// Whether all three fields are non-empty.
    pub(crate) fn is_complete(&self) -> bool {
        !self.credential.is_empty() && !self.user_id.is_empty() && !self.username.is_empty()
    }

    /// Load settings from `~/.config/vine-api/session.json`.
    ///
    /// Returns `None` if the file does not exist.
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&Self::path()?)
    }

    /// Save settings to `~/.config/vine-api/session.json`.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Delete the saved session file.
    pub fn clear() -> Result<()> {
        let path = Self::path()?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Load settings from `path`. Returns `None` if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    /// Write settings to `path`, creating parent directories if needed.
    ///
    /// The file holds the session credential in plain text and is created
    /// with the process's default permissions; restrict them if other users
    /// share the machine.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    fn path() -> Result<PathBuf> {
        let config = dirs::config_dir()
            .ok_or_else(|| VineError::Other("cannot determine config directory".into()))?;
        Ok(config.join("vine-api").join("session.json"))
    }
}

/// Authorization state held by a client.
///
/// Either all three fields are present (authenticated) or none are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    settings: Option<Settings>,
}

impl Session {
    /// Create a session, authenticated if `settings` is complete.
    pub fn new(settings: Option<Settings>) -> Self {
        let mut session = Self::default();
        session.authorize(settings);
        session
    }

    /// Replace the authorization state.
    ///
    /// `None`, or settings with any empty field, leave the session
    /// unauthenticated.
    pub fn authorize(&mut self, settings: Option<Settings>) {
        self.settings = settings.filter(Settings::is_complete);
    }

    /// Session credential sent as `vine-session-id`.
    pub fn credential(&self) -> Option<&str> {
        self.settings.as_ref().map(|s| s.credential.as_str())
    }

    /// Authenticated user ID.
    pub fn user_id(&self) -> Option<&str> {
        self.settings.as_ref().map(|s| s.user_id.as_str())
    }

    /// Authenticated username.
    pub fn username(&self) -> Option<&str> {
        self.settings.as_ref().map(|s| s.username.as_str())
    }

    /// All three fields, if authenticated.
    pub fn settings(&self) -> Option<&Settings> {
        self.settings.as_ref()
    }

    /// Whether a credential is held (does not validate it).
    pub fn is_authenticated(&self) -> bool {
        self.settings.is_some()
    }
}
