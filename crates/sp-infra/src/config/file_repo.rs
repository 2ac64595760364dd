//! File-backed client configuration
//!
//! Unlike the session file, a corrupt config file is an operator
//! problem and fails loudly instead of being silently replaced.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use sp_core::config::AppConfig;

pub struct FileConfigRepository {
    path: PathBuf,
}

impl FileConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    /// Config from disk, or the defaults when no file exists yet.
    pub async fn load(&self) -> Result<AppConfig> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Ok(AppConfig::default())
            }
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("read config failed: {}", self.path.display()))
            }
        };
        serde_json::from_str(&raw)
            .with_context(|| format!("parse config failed: {}", self.path.display()))
    }

    pub async fn store(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create config dir failed: {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config).context("serialize config failed")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp config failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp config to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}
