//! year-in-review - Travel Year-in-Review Generator
//!
//! Queries the GraphQL activity API for one user's year and prints the
//! summary as text cards and JSON.

use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use year_in_review::domain::RunContext;
use year_in_review::{render, Config, GraphQlClient, OutputFormat, YearInReviewGenerator};

#[derive(Parser, Debug)]
#[command(
    name = "year-in-review",
    version,
    about = "Generate a travel year-in-review for one user",
    long_about = None
)]
struct Cli {
    /// User id, sent as-is in request headers
    user_id: String,

    /// GraphQL endpoint [default: YIR_GRAPHQL_URL or the staging endpoint]
    endpoint: Option<String>,

    /// Year to review [default: YIR_YEAR or 2024]
    year: Option<i32>,

    /// Which renderings to print
    #[arg(long, value_enum, default_value_t = OutputFormat::All)]
    format: OutputFormat,
}

/// Initialize tracing/logging on stderr, keeping stdout for the report
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "year_in_review=info".into());

    let json = matches!(
        std::env::var("YIR_LOG_FORMAT").as_deref(),
        Ok("json") | Ok("JSON")
    );

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ Error generating year-in-review: {err:#}");
            eprintln!("{err:?}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?.with_overrides(cli.endpoint, cli.year)?;

    if cli.format != OutputFormat::Json {
        println!("{}", "=".repeat(70));
        println!("  🎉 AIRBNB YEAR IN REVIEW {} 🎉", config.year);
        println!("{}", "=".repeat(70));
        println!();
    }

    tracing::debug!(endpoint = %config.endpoint, year = config.year, "Loaded configuration");

    let client = GraphQlClient::new(&config.endpoint, &cli.user_id, config.request_timeout)
        .context("failed to build HTTP client")?;
    let generator = YearInReviewGenerator::new(client, RunContext::new(cli.user_id, config.year));

    let summary = generator
        .generate()
        .await
        .with_context(|| format!("run {} failed", generator.context().run_id))?;

    print!("{}", render(&summary, cli.format)?);

    Ok(())
}
