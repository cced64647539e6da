use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for dependency graph generation.
///
/// Every stage of the pipeline fails with its own variant so callers can
/// branch on the kind of failure (network, archive/manifest, file system,
/// renderer) even though the CLI reports them all the same way.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Failed to download package archive: {url}\nDetails: {details}\n\n💡 Hint: Please verify the URL and your network connection")]
    Transport { url: String, details: String },

    #[error("Failed to read package archive\nDetails: {details}\n\n💡 Hint: Please verify that the URL points to a valid .nupkg file")]
    Format { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the target directory")]
    FileWrite { path: PathBuf, details: String },

    #[error("Renderer '{command}' failed\nDetails: {details}\n\n💡 Hint: Please verify that Mermaid CLI (mmdc) is installed and on your PATH")]
    Render { command: String, details: String },

    #[error("Invalid output path: {path}\nReason: {reason}\n\n💡 Hint: Please specify an image path such as ./output/graph.png")]
    InvalidOutputPath { path: PathBuf, reason: String },

    /// Validation error for user-supplied values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl GraphError {
    pub fn format(details: impl Into<String>) -> Self {
        GraphError::Format {
            details: details.into(),
        }
    }
}
