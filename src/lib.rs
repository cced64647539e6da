//! nupkg-graph - dependency graph visualizer for .NET packages
//!
//! Downloads a `.nupkg` archive, reads the dependency ids declared in its
//! `.nuspec` manifest, and writes a Mermaid graph that an external renderer
//! (Mermaid CLI) can turn into an image.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_generation`): Manifest extraction and the graph model
//! - **Application Layer** (`application`): The graph generation use case and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nupkg_graph::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateGraphUseCase::new(
//!     HttpPackageFetcher::new()?,
//!     MermaidFormatter::new(),
//!     FileSystemGraphWriter::new(),
//!     MermaidCliRenderer::default(),
//!     ConsoleProgressReporter::new(),
//! );
//!
//! let request = GraphRequest::new(
//!     "Newtonsoft.Json".to_string(),
//!     "https://www.nuget.org/api/v2/package/Newtonsoft.Json/13.0.3".to_string(),
//!     PathBuf::from("output/newtonsoft.png"),
//!     PathBuf::from("./visualizer"),
//! );
//! let response = use_case.execute(request)?;
//! println!("{}", response.graph_text);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod graph_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemGraphWriter;
    pub use crate::adapters::outbound::formatters::MermaidFormatter;
    pub use crate::adapters::outbound::network::HttpPackageFetcher;
    pub use crate::adapters::outbound::renderer::{MermaidCliRenderer, RenderSettings};
    pub use crate::application::dto::{GraphRequest, GraphResponse, RenderOutcome};
    pub use crate::application::use_cases::GenerateGraphUseCase;
    pub use crate::graph_generation::domain::{DependencyGraph, PackageName};
    pub use crate::graph_generation::services::DependencyExtractor;
    pub use crate::ports::outbound::{
        DiagramRenderer, GraphFormatter, GraphWriter, PackageFetcher, ProgressReporter,
    };
    pub use crate::shared::error::GraphError;
    pub use crate::shared::Result;
}
