//! Intake CLI - validates repository intake submissions.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod issue_form;
mod output;

/// Repository intake validation
#[derive(Parser, Debug)]
#[command(name = "intake")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a submitted intake form against the directory service
    Validate {
        /// Path to the issue-form payload (defaults to the ISSUE_FORM_JSON
        /// environment variable)
        #[arg(short, long)]
        input: Option<String>,

        /// Directory service API base URL
        #[arg(long, default_value = intake_github::DEFAULT_API_URL)]
        api_url: String,

        /// API token (defaults to the GITHUB_TOKEN environment variable)
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("intake={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match cli.command {
        Commands::Validate {
            input,
            api_url,
            token,
        } => commands::validate(input.as_deref(), &api_url, token).await,
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
