/// Mock implementations for testing
mod mock_diagram_renderer;
mod mock_graph_writer;
mod mock_package_fetcher;
mod mock_progress_reporter;

pub use mock_diagram_renderer::MockDiagramRenderer;
pub use mock_graph_writer::MockGraphWriter;
pub use mock_package_fetcher::MockPackageFetcher;
pub use mock_progress_reporter::MockProgressReporter;
