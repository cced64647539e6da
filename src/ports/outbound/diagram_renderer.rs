use crate::shared::Result;
use std::path::Path;

/// DiagramRenderer port for turning diagram text into an image
///
/// Implementations usually delegate to an external program.
pub trait DiagramRenderer {
    /// Renders the diagram file at `input` into the image at `output`
    ///
    /// # Errors
    /// Returns `GraphError::Render` if the renderer cannot be started or
    /// exits unsuccessfully
    fn render(&self, input: &Path, output: &Path) -> Result<()>;

    /// Human-readable name of the renderer, used in progress messages
    fn name(&self) -> &str;
}
