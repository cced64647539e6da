use clap::Parser;
use std::path::PathBuf;

/// Visualize .NET package dependencies as a Mermaid graph
///
/// Flags keep their historical underscore spelling; kebab-case aliases are
/// accepted as well.
#[derive(Parser, Debug)]
#[command(name = "nupkg-graph")]
#[command(version)]
#[command(
    about = "Visualize .NET package dependencies with a custom visualizer.",
    long_about = None
)]
pub struct Args {
    /// Path to the visualizer executable
    #[arg(
        long = "visualizer_path",
        visible_alias = "visualizer-path",
        value_name = "PATH"
    )]
    pub visualizer_path: PathBuf,

    /// Name of the .NET package to analyze (graph root label)
    #[arg(long = "package_name", visible_alias = "package-name", value_name = "NAME")]
    pub package_name: String,

    /// Path to save the PNG file; the Mermaid graph is written next to it as .mmd
    #[arg(
        long = "output_png_path",
        visible_alias = "output-png-path",
        value_name = "PATH"
    )]
    pub output_png_path: PathBuf,

    /// URL to download the .nupkg file
    #[arg(long, value_name = "URL")]
    pub url: String,

    /// Path to a config file (defaults to ./nupkg-graph.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only write the Mermaid graph; do not invoke the renderer
    #[arg(long)]
    pub skip_render: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
