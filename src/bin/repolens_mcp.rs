use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing_subscriber::{self, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version = "0.1.0", about, long_about = None)]
#[command(propagate_version = true)]
#[command(disable_version_flag = true)]
struct Cli {
    /// With no subcommand, the transport is chosen by the REPOLENS_ENV
    /// environment variable: "production" selects the HTTP/SSE server on
    /// 0.0.0.0:$PORT (default 8080), anything else selects stdio.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server in stdin/stdout mode
    Stdio {
        /// Enable debug logging
        #[arg(short, long)]
        debug: bool,

        /// GitHub API token for authentication (overrides the GITHUB_TOKEN environment variable)
        #[arg(short = 't', long)]
        github_token: Option<String>,
    },
    /// Run the server with the HTTP/SSE interface
    Http {
        /// Address to bind the HTTP server to
        #[arg(short, long, default_value = "0.0.0.0:8080")]
        address: String,

        /// Enable debug logging
        #[arg(short, long)]
        debug: bool,

        /// GitHub API token for authentication (overrides the GITHUB_TOKEN environment variable)
        #[arg(short = 't', long)]
        github_token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Stdio {
            debug,
            github_token,
        }) => run_stdio_server(debug, github_token).await,
        Some(Commands::Http {
            address,
            debug,
            github_token,
        }) => run_http_server(address, debug, github_token).await,
        None => {
            if std::env::var("REPOLENS_ENV").as_deref() == Ok("production") {
                let port = std::env::var("PORT")
                    .ok()
                    .and_then(|value| value.parse::<u16>().ok())
                    .unwrap_or(8080);
                run_http_server(format!("0.0.0.0:{}", port), false, None).await
            } else {
                run_stdio_server(false, None).await
            }
        }
    }
}

/// Resolves the GitHub credential from the CLI flag or the environment.
///
/// Exits silently with a non-zero status when no credential is available:
/// the stdio transport frames its protocol on stdout, so nothing may be
/// written before serving starts.
fn resolve_github_token(cli_token: Option<String>) -> String {
    cli_token
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .filter(|token| !token.is_empty())
        .unwrap_or_else(|| std::process::exit(1))
}

async fn run_stdio_server(debug: bool, github_token: Option<String>) -> Result<()> {
    let token_from_cli = github_token.is_some();
    let github_token = resolve_github_token(github_token);

    // Initialize the global GitHub client at startup so every tool
    // invocation authenticates with the same credential
    repolens::github::instance::init_github_client(github_token.clone());

    // Initialize the tracing subscriber with stderr logging
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr) // Explicitly use stderr for logging
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false) // Disable ANSI color codes
        .init();

    tracing::info!("Starting GitHub repository MCP server in STDIN/STDOUT mode");
    if token_from_cli {
        tracing::info!("Using GitHub token from command line arguments");
    }

    repolens::transport::stdio::run_stdio_server(github_token)
        .await
        .map_err(|e| anyhow::anyhow!("Error running STDIO server: {}", e))
}

async fn run_http_server(address: String, debug: bool, github_token: Option<String>) -> Result<()> {
    let token_from_cli = github_token.is_some();
    let github_token = resolve_github_token(github_token);

    // Initialize the global GitHub client at startup
    repolens::github::instance::init_github_client(github_token);

    // Setup tracing
    let level = if debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},{}", level, env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false)) // Disable ANSI color codes
        .init();

    // Parse socket address
    let addr: SocketAddr = address.parse()?;

    tracing::info!(
        "Access the GitHub repository MCP server at http://{}/sse",
        addr
    );
    if token_from_cli {
        tracing::info!("Using GitHub token from command line arguments");
    }

    let app = repolens::transport::sse_server::SseServerApp::new(addr);
    app.serve().await?;

    Ok(())
}
