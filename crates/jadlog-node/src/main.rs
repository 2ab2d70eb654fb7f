//! Jadlog node — entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use jadlog_node::config::resolve_fetcher_config;
use jadlog_node::node::{JadlogNode, TRACK_NUMBER_PARAM};
use jadlog_node::transport::StdioTransport;
use jadlog_node::types::InvocationContext;
use jadlog_tracking::{TrackingFetcher, TrackingSource};

#[derive(Parser)]
#[command(
    name = "jadlog-node",
    about = "Workflow node that looks up Jadlog shipment tracking events",
    version
)]
struct Cli {
    /// Tracking endpoint URL (also reads JADLOG_TRACKING_URL).
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in milliseconds (also reads JADLOG_TIMEOUT_MS).
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read invocations from stdin, one JSON object per line (default).
    Serve,

    /// Look up one tracking number and print the node output.
    Track {
        /// Shipment tracking number.
        track_number: String,
    },

    /// Print the node description as JSON.
    Describe,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   jadlog-node completions bash > ~/.local/share/bash-completion/completions/jadlog-node
    ///   jadlog-node completions zsh > ~/.zfunc/_jadlog-node
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

fn build_node(cli: &Cli) -> JadlogNode<TrackingFetcher> {
    let config = resolve_fetcher_config(cli.url.as_deref(), cli.timeout_ms);
    tracing::debug!("Tracking endpoint: {}", config.base_url);
    JadlogNode::new(TrackingFetcher::new(config))
}

async fn track_once<S: TrackingSource>(node: &JadlogNode<S>, track_number: String) -> anyhow::Result<()> {
    let ctx = InvocationContext::default().with_parameter(TRACK_NUMBER_PARAM, track_number);
    let output = node.execute(&ctx).await;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.as_ref().unwrap_or(&Commands::Serve) {
        Commands::Serve => {
            let transport = StdioTransport::new(build_node(&cli));
            transport.run().await?;
        }

        Commands::Track { track_number } => {
            track_once(&build_node(&cli), track_number.clone()).await?;
        }

        Commands::Describe => {
            let description = JadlogNode::<TrackingFetcher>::description();
            println!("{}", serde_json::to_string_pretty(&description)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "jadlog-node", &mut std::io::stdout());
        }
    }

    Ok(())
}
