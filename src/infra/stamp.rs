//! `FileStampStore` — the persisted package-index refresh instant.
//!
//! One epoch-seconds value in a fixed file, written atomically (temp file +
//! rename). An unreadable or unparseable stamp loads as `None`: the stamp is
//! a throttle, not data, so self-healing beats aborting.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::application::ports::RefreshStampStore;

pub struct FileStampStore {
    path: PathBuf,
}

impl FileStampStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RefreshStampStore for FileStampStore {
    fn load(&self) -> Result<Option<DateTime<Utc>>> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Ok(None);
        };
        Ok(content
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0)))
    }

    fn save(&self, at: DateTime<Utc>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }

        // Atomic write via temp file then rename.
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, format!("{}\n", at.timestamp()))
            .with_context(|| format!("writing temp file {}", temp_path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&temp_path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("setting permissions on {}", temp_path.display()))?;
        }

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("finalizing stamp file {}", self.path.display()))?;
        Ok(())
    }
}
