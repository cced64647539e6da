mod cli;

use cli::Args;
use nupkg_graph::adapters::outbound::console::ConsoleProgressReporter;
use nupkg_graph::adapters::outbound::filesystem::FileSystemGraphWriter;
use nupkg_graph::adapters::outbound::formatters::MermaidFormatter;
use nupkg_graph::adapters::outbound::network::HttpPackageFetcher;
use nupkg_graph::adapters::outbound::renderer::MermaidCliRenderer;
use nupkg_graph::application::dto::GraphRequest;
use nupkg_graph::application::use_cases::GenerateGraphUseCase;
use nupkg_graph::config::{self, ConfigFile};
use nupkg_graph::shared::Result;
use owo_colors::{OwoColorize, Stream};
use std::path::Path;

fn main() {
    let args = Args::parse_args();

    // Every pipeline failure is reported the same way and the process still
    // exits normally; the error kind stays available on the error value.
    if let Err(e) = run(args) {
        println!(
            "{} {}",
            "An error occurred:".if_supports_color(Stream::Stdout, |text| text.red()),
            e
        );

        for cause in e.chain().skip(1) {
            println!("\nCaused by: {}", cause);
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    // Create adapters (Dependency Injection)
    let fetcher = HttpPackageFetcher::with_timeout(config.fetch_timeout())?;
    let formatter = MermaidFormatter::new();
    let writer = FileSystemGraphWriter::new();
    let renderer = MermaidCliRenderer::new(config.render_settings());
    let progress_reporter = ConsoleProgressReporter::new();

    let use_case = GenerateGraphUseCase::new(fetcher, formatter, writer, renderer, progress_reporter);

    let request = GraphRequest::new(
        args.package_name,
        args.url,
        args.output_png_path,
        args.visualizer_path,
    )
    .with_render(!args.skip_render);

    use_case.execute(request)?;

    Ok(())
}

/// Loads the explicit config file, or auto-discovers one in the working directory
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return config::load_config_from_path(path);
    }

    let cwd = std::env::current_dir()?;
    Ok(config::discover_config(&cwd)?.unwrap_or_default())
}
