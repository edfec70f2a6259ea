//! Entrypoint for derma-service
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use derma_application::{CachePolicy, Classifier, NoResponseCache, ResponseCache, ServiceState};
use derma_infrastructure::{
    ArtifactClassifier, ConfigLoader, FileCacheBackend, FileConfig, ImagePipeline,
    InMemoryResponseCache, RedisResponseCache,
};
use derma_presentation::{ApiState, Cli, router};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&cli, &mut config);
    config.validate().context("Invalid configuration")?;

    let _log_guard = init_logging(cli.verbose, &config)?;

    info!("Starting derma-service");

    // === Dependency Injection ===
    let pipeline = ImagePipeline::default();
    let classifier = ArtifactClassifier::load(&config.model.artifact_path)
        .context("Failed to load classifier artifact")?;
    if classifier.expected_features() != Some(pipeline.feature_len()) {
        warn!(
            expected = pipeline.feature_len(),
            artifact = ?classifier.expected_features(),
            "Artifact feature count does not match the image pipeline; predictions will fail"
        );
    }

    let cache = build_cache(&config)?;
    let policy: CachePolicy = config.cache.to_policy();

    let state = Arc::new(ServiceState::new());
    {
        let catalog = state.catalog.read().await;
        let unmapped: Vec<_> = classifier
            .classes()
            .iter()
            .filter(|id| catalog.get(**id).is_err())
            .map(|id| id.to_string())
            .collect();
        if !unmapped.is_empty() {
            warn!(
                classes = %unmapped.join(", "),
                "Artifact predicts classes with no disease name"
            );
        }
    }

    let api = ApiState::new(
        state,
        Arc::new(pipeline),
        Arc::new(classifier),
        cache,
        policy,
    );
    let app = router(api, config.server.body_limit_bytes);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shut down");
    Ok(())
}

fn build_cache(config: &FileConfig) -> Result<Arc<dyn ResponseCache>> {
    let cache: Arc<dyn ResponseCache> = match config.cache.backend {
        FileCacheBackend::Memory => Arc::new(InMemoryResponseCache::new()),
        FileCacheBackend::None => Arc::new(NoResponseCache),
        FileCacheBackend::Redis => {
            let url = config.cache.url.as_deref().unwrap_or_default();
            let cache = RedisResponseCache::open(url).context("Invalid cache.url")?;
            info!("Using Redis response cache");
            Arc::new(cache)
        }
    };
    Ok(cache)
}

fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(model) = &cli.model {
        config.model.artifact_path = model.clone();
    }
}

/// Install the global subscriber. The returned guard flushes the log file on drop.
fn init_logging(verbose: u8, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match &config.logging.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory).with_context(|| {
                format!("Failed to create log directory {}", directory.display())
            })?;
            let appender = tracing_appender::rolling::daily(directory, "derma-service.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            Ok(None)
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
