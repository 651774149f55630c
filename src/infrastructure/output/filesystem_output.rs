//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::generation::{FileContent, OutputService};
use crate::infrastructure::output::OutputError;

/// Writes generated files below a destination root
pub struct FileSystemOutputService {
    root: PathBuf,
}

impl FileSystemOutputService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn clear_root(&self) -> Result<(), OutputError> {
        let clear_err = |path: &Path, source| OutputError::ClearDirectory {
            path: path.to_path_buf(),
            source,
        };

        // Entries are removed one by one so the root keeps its permissions
        let mut entries = fs::read_dir(&self.root)
            .await
            .map_err(|e| clear_err(self.root.as_path(), e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| clear_err(self.root.as_path(), e))?
        {
            let path = entry.path();
            let file_type = entry.file_type().await.map_err(|e| clear_err(path.as_path(), e))?;
            let removed = if file_type.is_dir() {
                fs::remove_dir_all(&path).await
            } else {
                fs::remove_file(&path).await
            };
            removed.map_err(|e| clear_err(path.as_path(), e))?;
            debug!(path = %path.display(), "Removed");
        }
        Ok(())
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn prepare(&self, clear: bool) -> Result<(), OutputError> {
        debug!(path = %self.root.display(), "Output directory");
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| OutputError::CreateDirectory {
                path: self.root.clone(),
                source: e,
            })?;

        if clear {
            debug!("Deleting contents of the output directory");
            self.clear_root().await?;
        }
        Ok(())
    }

    async fn write(
        &self,
        relative: &Path,
        content: &FileContent,
    ) -> Result<PathBuf, OutputError> {
        let path = self.root.join(relative);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| OutputError::CreateDirectory {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let write_err = |source| OutputError::WriteFile {
            path: path.clone(),
            source,
        };
        let mut file = fs::File::create(&path).await.map_err(write_err)?;
        file.write_all(content.render().as_bytes())
            .await
            .map_err(write_err)?;
        file.flush().await.map_err(write_err)?;

        debug!(path = %path.display(), "Wrote file");
        Ok(path)
    }
}
