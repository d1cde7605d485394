use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use nms_server::{AppConfig, TenantStoreKind, build_router, build_store, logging, serve, signals};
use tokio::net::TcpListener;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// NMS Server - resolves the organization behind every request host
#[derive(Parser)]
#[command(name = "nms-server")]
#[command(about = "NMS Server - multi-tenant organization resolution")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and the organization store, then exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.verbose);

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    logging::init_logging(&config.logging)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config).await,
    }
}

async fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    build_store(config).await?;
    println!("Configuration is valid");
    if config.tenant_store == TenantStoreKind::Static {
        println!(
            "{} static organization(s) configured",
            config.static_tr_plugin.organizations.len()
        );
    }
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!(store = config.tenant_store.as_str(), "NMS Server starting");

    let store = build_store(&config).await?;
    let router = build_router(store, &config.tenant_resolver);

    let listener = TcpListener::bind(config.server.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    serve(listener, router, async {
        if let Err(e) = signals::wait_for_shutdown().await {
            tracing::error!(error = %e, "signal handling failed, shutting down");
        }
    })
    .await?;

    tracing::info!("NMS Server stopped");
    Ok(())
}
