use crate::ports::outbound::GraphWriter;
use crate::shared::error::GraphError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemGraphWriter adapter for writing graph text to files
///
/// This adapter implements the GraphWriter port. Parent directories are
/// created on demand and existing files are overwritten.
pub struct FileSystemGraphWriter;

impl FileSystemGraphWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_error(path: &Path, details: String) -> anyhow::Error {
        GraphError::FileWrite {
            path: path.to_path_buf(),
            details,
        }
        .into()
    }

    /// Creates the parent directory chain of `path` if it is missing
    fn ensure_parent_directory(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if parent != Path::new("") => fs::create_dir_all(parent).map_err(|e| {
                Self::write_error(
                    path,
                    format!("Failed to create directory {}: {}", parent.display(), e),
                )
            }),
            _ => Ok(()),
        }
    }
}

impl Default for FileSystemGraphWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphWriter for FileSystemGraphWriter {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        Self::ensure_parent_directory(path)?;

        // Refuse to write through a symlink at the target path
        validate_not_symlink(path, "write").map_err(|e| Self::write_error(path, e.to_string()))?;

        fs::write(path, content).map_err(|e| Self::write_error(path, e.to_string()))?;

        Ok(())
    }
}
