use crate::shared::Result;
use std::path::Path;

/// GraphWriter port for persisting graph text
pub trait GraphWriter {
    /// Writes `content` as the entire content of the file at `path`
    ///
    /// Missing parent directories are created and an existing file is
    /// overwritten.
    ///
    /// # Errors
    /// Returns `GraphError::FileWrite` if:
    /// - A parent directory cannot be created
    /// - The file cannot be written (permissions, disk full, invalid path)
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}
