/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, renderer, console).
pub mod diagram_renderer;
pub mod formatter;
pub mod graph_writer;
pub mod package_fetcher;
pub mod progress_reporter;

pub use diagram_renderer::DiagramRenderer;
pub use formatter::GraphFormatter;
pub use graph_writer::GraphWriter;
pub use package_fetcher::PackageFetcher;
pub use progress_reporter::ProgressReporter;
