//! `SystemFs` — production implementation of the `LocalFs` port.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::LocalFs;

pub struct SystemFs;

impl LocalFs for SystemFs {
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, contents)
            .with_context(|| format!("writing temp file {}", temp_path.display()))?;
        std::fs::rename(&temp_path, path)
            .with_context(|| format!("finalizing {}", path.display()))?;
        Ok(())
    }

    fn remove_dir_all_if_exists(&self, path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_dir_all(path)
            .with_context(|| format!("removing directory {}", path.display()))?;
        Ok(true)
    }
}
