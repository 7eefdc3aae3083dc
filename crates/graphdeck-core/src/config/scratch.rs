use crate::error::Result;
use crate::models::DataSource;
use std::path::PathBuf;
use tracing::debug;

/// Per-data-source scratch query files, where the editor keeps unsaved query
/// text. Files are created lazily by the editor; this type only locates and
/// discards them.
#[derive(Debug, Clone)]
pub struct ScratchFiles {
    dir: PathBuf,
}

impl ScratchFiles {
    /// Scratch files under the default config directory.
    pub fn new() -> Self {
        Self {
            dir: super::config_dir().join("scratch"),
        }
    }

    /// Scratch files rooted at a specific directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Scratch file path for a data source.
    pub fn path_for(&self, data_source: &DataSource) -> PathBuf {
        self.dir.join(format!("{}.cypher", data_source.id))
    }

    /// Remove a data source's scratch file. Missing files are fine.
    pub fn discard(&self, data_source: &DataSource) -> Result<()> {
        let path = self.path_for(data_source);
        if path.exists() {
            std::fs::remove_file(&path)?;
            debug!(
                "Discarded scratch file for data source '{}'",
                data_source.name
            );
        }
        Ok(())
    }
}
