mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mediasort_core::{
    collect_video_files, load_config, validate_config, FileReport, MetadataResolver,
    OperationExecutor, Pipeline, PipelineOptions, ProviderSet, TmdbClient, TvdbClient,
};

use cli::Cli;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over --debug
    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    info!("Loading configuration from {:?}", cli.config);
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;
    info!("Configuration loaded successfully");
    tracing::debug!("Configuration: {:?}", config.sanitized());

    // Create metadata providers
    let tmdb = match config.tmdb() {
        Some(tmdb_config) => {
            info!("Initializing TMDB client");
            Some(TmdbClient::new(tmdb_config).context("Failed to create TMDB client")?)
        }
        None => {
            warn!("No TMDB API key configured, movie metadata lookups disabled");
            None
        }
    };

    let tvdb = match config.tvdb() {
        Some(tvdb_config) => {
            info!("Authenticating with TVDB");
            Some(
                TvdbClient::login(tvdb_config)
                    .await
                    .context("TVDB authentication failed")?,
            )
        }
        None => {
            warn!("No TVDB API key configured, series metadata lookups disabled");
            None
        }
    };

    let resolver = if tmdb.is_none() && tvdb.is_none() {
        MetadataResolver::disabled()
    } else {
        MetadataResolver::new(Arc::new(ProviderSet::new(tmdb, tvdb)))
    };

    // Collect input files
    let files = collect_video_files(&cli.source)
        .with_context(|| format!("Failed to scan source directory {:?}", cli.source))?;

    if cli.dry_run {
        info!("Dry run: no files will be touched");
    }

    let pipeline = Pipeline::new(
        resolver,
        OperationExecutor::with_defaults(),
        PipelineOptions {
            destination: cli.dest.clone(),
            mode: cli.op,
            dry_run: cli.dry_run,
        },
    )
    .with_report_callback(Arc::new(|report: &FileReport| {
        if let Some(operation) = report.planned() {
            println!("{}", operation);
        }
    }));

    pipeline.run(&files).await;
    Ok(())
}
