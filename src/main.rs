use std::sync::Arc;
use std::time::Duration;

use textscreen::{
    arguments,
    cache::{CacheConfig, MemoryCache},
    config,
    engine::LexiconEngine,
    logger::{self, LogTag},
    metrics::MetricsTracker,
    orchestrator::RequestOrchestrator,
    store::SqliteStore,
    webserver,
};

/// Main entry point for textscreen
///
/// Startup order matters: logger first (everything logs), then config,
/// then the storage-backed components, then the webserver. The process
/// serves until Ctrl-C, then drains in-flight requests and exits.
#[tokio::main]
async fn main() {
    logger::init();

    if arguments::is_help_requested() {
        arguments::print_help();
        std::process::exit(0);
    }

    logger::info(LogTag::System, "🚀 textscreen starting up...");

    // Load configuration (missing file means defaults)
    let mut config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            logger::error(LogTag::Config, &format!("{}", e));
            std::process::exit(1);
        }
    };

    // Command-line bind overrides
    if let Some(host) = arguments::get_host_override() {
        config.server.host = host;
    }
    if let Some(port) = arguments::get_port_override() {
        config.server.port = port;
    }

    // Data directory must exist before the store opens its database
    if let Some(parent) = std::path::Path::new(&config.store.database_path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                logger::error(
                    LogTag::System,
                    &format!("Failed to create data directory {:?}: {}", parent, e),
                );
                std::process::exit(1);
            }
        }
    }

    // Wire up the orchestration core; all collaborators are injected
    let store = match SqliteStore::new(&config.store.database_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            logger::error(LogTag::Store, &format!("Failed to open result store: {}", e));
            std::process::exit(1);
        }
    };
    match store.count() {
        Ok(count) => logger::info(
            LogTag::Store,
            &format!(
                "Result store ready at {} ({} records)",
                config.store.database_path, count
            ),
        ),
        Err(e) => logger::warning(LogTag::Store, &format!("Could not read record count: {}", e)),
    }

    let cache_config = CacheConfig::from_settings(&config.cache);
    let cache = Arc::new(MemoryCache::new(cache_config.clone()));
    let engine = Arc::new(LexiconEngine::new());
    let metrics = Arc::new(MetricsTracker::new());

    let orchestrator = Arc::new(RequestOrchestrator::new(
        engine,
        cache.clone(),
        store,
        metrics.clone(),
        cache_config.ttl,
        Duration::from_millis(config.engine.timeout_ms),
    ));

    // Periodic cache expiry sweep
    let sweep_cache = Arc::clone(&cache);
    let sweep_interval = cache_config.sweep_interval;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        ticker.tick().await; // first tick fires immediately, skip it
        loop {
            ticker.tick().await;
            sweep_cache.purge_expired();
        }
    });

    // Ctrl-C triggers graceful shutdown
    let shutdown_metrics = Arc::clone(&metrics);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let snap = shutdown_metrics.snapshot();
            logger::info(
                LogTag::System,
                &format!(
                    "Shutting down ({} requests served, {} hits / {} misses)",
                    snap.requests, snap.cache_hits, snap.cache_misses
                ),
            );
            webserver::shutdown();
        }
    });

    let state = Arc::new(webserver::state::AppState::new(orchestrator));
    if let Err(e) = webserver::start_server(state, &config.server).await {
        logger::error(LogTag::Webserver, &e);
        std::process::exit(1);
    }

    logger::info(LogTag::System, "✅ textscreen stopped");
}
