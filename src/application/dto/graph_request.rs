use crate::shared::error::GraphError;
use crate::shared::Result;
use std::path::PathBuf;

/// GraphRequest - Internal request DTO for the graph generation use case
///
/// Carries every value the pipeline needs; nothing is read from global state.
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Root node label for the graph
    pub package_name: String,
    /// Direct download URL of the .nupkg archive
    pub url: String,
    /// Path of the rasterized image to produce
    pub output_path: PathBuf,
    /// Visualizer executable path given on the command line
    pub visualizer_path: PathBuf,
    /// Whether the external renderer should be invoked after writing the graph
    pub render: bool,
}

impl GraphRequest {
    pub fn new(
        package_name: String,
        url: String,
        output_path: PathBuf,
        visualizer_path: PathBuf,
    ) -> Self {
        Self {
            package_name,
            url,
            output_path,
            visualizer_path,
            render: true,
        }
    }

    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    /// Derives the sibling graph file path by swapping the image extension
    ///
    /// `./output/graph.png` becomes `./output/graph.mmd` for `extension = "mmd"`.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidOutputPath` if the output path has no file
    /// name, or if it already carries the graph extension (the image would
    /// overwrite the graph file)
    pub fn graph_path(&self, extension: &str) -> Result<PathBuf> {
        if self.output_path.file_name().is_none() {
            return Err(GraphError::InvalidOutputPath {
                path: self.output_path.clone(),
                reason: "Output path has no file name".to_string(),
            }
            .into());
        }

        let graph_path = self.output_path.with_extension(extension);
        if graph_path == self.output_path {
            return Err(GraphError::InvalidOutputPath {
                path: self.output_path.clone(),
                reason: format!(
                    "Output path uses the .{} extension reserved for the graph file",
                    extension
                ),
            }
            .into());
        }

        Ok(graph_path)
    }
}
