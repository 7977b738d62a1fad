//! CLI for the release readiness audit.
//!
//! This tool lists pull requests of the configured repositories, looks up the
//! Jira tickets referenced in their titles and reports whether each pull
//! request is planned into an active sprint and a release.

use clap::Parser;
use release_audit::{
    AuditConfig, ConfigFile, ConfigOverrides, DowngradePolicy, ReportRenderer, RunSummary, Runner,
    RunnerError, DEFAULT_CONFIG_FILE,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Release Audit - Check pull requests against Jira sprints and fix versions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file (defaults to ./release-audit.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// GitHub organization owning the repositories.
    #[arg(long)]
    organization: Option<String>,

    /// Repository to audit; repeat to audit several. Replaces the configured list.
    #[arg(long = "repo")]
    repos: Vec<String>,

    /// Jira instance URL.
    #[arg(long, env = "JIRA_URL")]
    jira_url: Option<String>,

    /// Jira user name.
    #[arg(long, env = "JIRA_USERNAME")]
    jira_username: Option<String>,

    /// Jira password or API token.
    #[arg(long, env = "JIRA_PASSWORD", hide_env_values = true)]
    jira_password: Option<String>,

    /// Custom field holding sprint memberships.
    #[arg(long)]
    sprint_field: Option<String>,

    /// Number of recently closed pull requests to audit per repository.
    #[arg(long)]
    closed_limit: Option<u8>,

    /// How sprint downgrades combine across tickets.
    #[arg(long, value_parser = DowngradePolicy::from_str)]
    sprint_policy: Option<DowngradePolicy>,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Pick the process-wide rustls provider before any client is built
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();
    let color = !args.no_color && std::io::stdout().is_terminal();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print!("{}", ReportRenderer::new(color).render(&summary.outcomes));
            print_summary(&summary);

            if summary.all_success() {
                ExitCode::from(0)
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so they never interleave with the report on stdout.
/// The level defaults to "warn" and can be raised with `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_or_default(DEFAULT_CONFIG_FILE.as_ref())?,
    };
    let overrides = ConfigOverrides {
        organization: args.organization,
        repos: args.repos,
        closed_limit: args.closed_limit,
        sprint_policy: args.sprint_policy,
        github_token: args.github_token,
        jira_base_url: args.jira_url,
        jira_username: args.jira_username,
        jira_password: args.jira_password,
        jira_sprint_field: args.sprint_field,
    };
    let config = AuditConfig::resolve(file.with_overrides(overrides))?;

    let runner = Runner::new(config)?;
    Ok(runner.run().await)
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Repositories audited: {}", summary.repositories_audited);
    println!("  Repositories failed: {}", summary.repositories_failed);
    println!("  Pull requests checked: {}", summary.change_requests_checked);
    println!("  Pull requests ready: {}", summary.change_requests_ready);
    println!(
        "  Pull requests without tickets: {}",
        summary.change_requests_without_tickets
    );
}
