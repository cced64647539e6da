use crate::application::dto::{GraphRequest, GraphResponse, RenderOutcome};
use crate::graph_generation::domain::{DependencyGraph, PackageName};
use crate::graph_generation::services::DependencyExtractor;
use crate::ports::outbound::{
    DiagramRenderer, GraphFormatter, GraphWriter, PackageFetcher, ProgressReporter,
};
use crate::shared::Result;
use std::path::Path;


/// GenerateGraphUseCase - Core use case for dependency graph generation
///
/// Runs the pipeline strictly in order: fetch → extract → build → write →
/// render. Every infrastructure dependency is injected generically.
///
/// # Type Parameters
/// * `F` - PackageFetcher implementation
/// * `GF` - GraphFormatter implementation
/// * `W` - GraphWriter implementation
/// * `R` - DiagramRenderer implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateGraphUseCase<F, GF, W, R, PR> {
    fetcher: F,
    formatter: GF,
    writer: W,
    renderer: R,
    progress_reporter: PR,
}

impl<F, GF, W, R, PR> GenerateGraphUseCase<F, GF, W, R, PR>
where
    F: PackageFetcher,
    GF: GraphFormatter,
    W: GraphWriter,
    R: DiagramRenderer,
    PR: ProgressReporter,
{
    /// Creates a new GenerateGraphUseCase with injected dependencies
    pub fn new(fetcher: F, formatter: GF, writer: W, renderer: R, progress_reporter: PR) -> Self {
        Self {
            fetcher,
            formatter,
            writer,
            renderer,
            progress_reporter,
        }
    }

    /// Executes the graph generation use case
    ///
    /// Fetch, extract, build and write failures abort the pipeline and are
    /// returned as errors. A renderer failure does not: it is reported and
    /// returned as `RenderOutcome::Failed` in the response.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        let root = PackageName::new(request.package_name.clone())?;
        let graph_path = request.graph_path(self.formatter.file_extension())?;

        self.progress_reporter.report(&format!(
            "🔧 Visualizer: {}",
            request.visualizer_path.display()
        ));

        // Step 1: Download the package archive
        self.progress_reporter
            .start_task(&format!("📦 Downloading package archive from: {}", request.url));
        let archive = self.fetcher.fetch(&request.url);
        self.progress_reporter.finish_task();
        let archive = archive?;

        self.progress_reporter
            .report(&format!("✅ Downloaded {} byte(s)", archive.len()));

        // Step 2: Extract dependency ids from the manifest
        self.progress_reporter
            .report("🔍 Reading dependencies from package manifest...");
        let dependencies = DependencyExtractor::extract(&archive)?;
        drop(archive);

        self.progress_reporter.report(&format!(
            "✅ Found {} dependency declaration(s)",
            dependencies.len()
        ));

        // Step 3: Build and serialize the graph
        let graph = DependencyGraph::new(root, &dependencies);
        let graph_text = self.formatter.format(&graph);

        self.progress_reporter.report(&format!(
            "📊 Graph for {} has {} edge(s)",
            graph.root(),
            graph.edge_count()
        ));

        // Step 4: Persist the graph text
        self.writer.write(&graph_path, &graph_text)?;
        self.progress_reporter.report_completion(&format!(
            "Mermaid graph successfully saved to {}",
            graph_path.display()
        ));

        // Step 5: Rasterize via the external renderer
        let render = if request.render {
            self.render(&graph_path, &request.output_path)
        } else {
            self.progress_reporter.report("⏭️  Skipping image rendering");
            RenderOutcome::Skipped
        };

        Ok(GraphResponse {
            dependencies,
            graph,
            graph_text,
            graph_path,
            output_path: request.output_path,
            render,
        })
    }

    fn render(&self, graph_path: &Path, output_path: &Path) -> RenderOutcome {
        self.progress_reporter
            .start_task(&format!("🖼️  Rendering image with {}...", self.renderer.name()));
        let result = self.renderer.render(graph_path, output_path);
        self.progress_reporter.finish_task();

        match result {
            Ok(()) => {
                self.progress_reporter.report_completion(&format!(
                    "Graph successfully saved as PNG to {}",
                    output_path.display()
                ));
                RenderOutcome::Rendered
            }
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: Image rendering failed: {}", e));
                RenderOutcome::Failed(e)
            }
        }
    }
}
