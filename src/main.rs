use anyhow::Result;
use clap::{Parser, Subcommand};
use monkeymadness::mail::Mailer;

/// monkeymadness - brand activation studio site
#[derive(Parser)]
#[command(name = "monkeymadness")]
#[command(about = "Monkey Madness marketing site and contact relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate configuration and probe the SMTP transport
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration; a missing mail account or recipient aborts here,
    // not on the first submission.
    let config = monkeymadness::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    monkeymadness::observability::init_observability(&config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Check => check_command(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: monkeymadness::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting monkeymadness server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let mailer = Mailer::new(&config)?;
    let app = monkeymadness::create_app(config, mailer);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn check_command(config: monkeymadness::config::Config) -> Result<()> {
    tracing::info!("Checking SMTP transport...");

    let mailer = Mailer::new(&config)?;
    mailer.verify()?;

    tracing::info!(
        smtp_host = %config.smtp.host,
        "SMTP transport verified and ready to accept mail"
    );

    Ok(())
}
