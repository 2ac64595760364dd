//! File-backed session store
//!
//! Persists the session as one JSON document so token and profile
//! survive a restart together or not at all. The port is infallible
//! by contract: storage faults are logged and surface as an absent
//! session, never as an error the gate would have to handle.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use sp_core::ports::SessionStorePort;
use sp_core::session::Session;

pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory, scoped to this
    /// client profile.
    pub fn in_data_dir() -> Result<Self> {
        let dir = dirs::data_dir().context("platform data directory unavailable")?;
        Ok(Self::new(dir.join("sproutly").join("session.json")))
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create session dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write-then-rename so a crash mid-write leaves either the old
    /// session or the new one, never a torn file.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp session failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp session to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl SessionStorePort for FileSessionStore {
    async fn get(&self) -> Option<Session> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return None,
            Err(error) => {
                warn!(%error, path = %self.path.display(), "session file unreadable, treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(error) => {
                warn!(%error, path = %self.path.display(), "persisted session corrupt, treating as absent");
                None
            }
        }
    }

    async fn set(&self, session: Session) {
        let content = match serde_json::to_string_pretty(&session) {
            Ok(content) => content,
            Err(error) => {
                warn!(%error, "session serialization failed, nothing persisted");
                return;
            }
        };
        if let Err(error) = self.atomic_write(&content).await {
            warn!(%error, "session write failed, nothing persisted");
        }
    }

    async fn clear(&self) {
        match fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(error) => {
                warn!(%error, path = %self.path.display(), "session file removal failed");
            }
        }
    }
}
