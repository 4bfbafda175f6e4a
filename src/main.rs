use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};
use vulngraph::adapters::outbound::console::StderrProgressReporter;
use vulngraph::adapters::outbound::filesystem::FileReportReader;
use vulngraph::adapters::outbound::network::InsightsClient;
use vulngraph::application::dto::GraphRequest;
use vulngraph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use vulngraph::application::read_models::GraphOutcome;
use vulngraph::application::use_cases::RenderGraphUseCase;
use vulngraph::cli::Args;
use vulngraph::config::{discover_config, load_config_from_path, ConfigFile, Settings};
use vulngraph::graph::domain::SeverityTier;
use vulngraph::graph::services::GraphSummary;
use vulngraph::ports::outbound::ReportRepository;
use vulngraph::shared::error::ExitCode;
use vulngraph::shared::Result;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_ref())?;
    let settings = Settings::resolve(&args, config)?;
    debug!(?settings, "Resolved settings");

    let outcome = match settings.report_path.clone() {
        Some(path) => render(FileReportReader::new(path), settings.request.clone()).await?,
        None => {
            let client = InsightsClient::new(&settings.server_url, settings.timeout)?;
            render(client, settings.request.clone()).await?
        }
    };

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format, &settings.vis_network_src);
    let content = formatter.format(&outcome)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&content)?;

    match outcome {
        GraphOutcome::Rendered(view) => {
            print_vulnerabilities(&view.summary);
            Ok(ExitCode::Success)
        }
        GraphOutcome::Redirect { .. } => Ok(ExitCode::ReportNotFound),
    }
}

fn load_config(explicit: Option<&PathBuf>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }
    let cwd = std::env::current_dir()?;
    Ok(discover_config(&cwd)?.unwrap_or_default())
}

async fn render<R: ReportRepository>(repository: R, request: GraphRequest) -> Result<GraphOutcome> {
    let use_case = RenderGraphUseCase::new(repository, StderrProgressReporter::new());
    use_case.execute(request).await
}

/// One stderr line per CVE, coloured by severity tier
fn print_vulnerabilities(summary: &GraphSummary) {
    for cve in &summary.vulnerabilities {
        let tier = cve.tier.as_str();
        match cve.tier {
            SeverityTier::Low => eprintln!("   {} ({})", cve.id.yellow(), tier),
            SeverityTier::High => eprintln!("   {} ({})", cve.id.bright_red(), tier),
            SeverityTier::Critical => eprintln!("   {} ({})", cve.id.red().bold(), tier),
        }
    }
}
