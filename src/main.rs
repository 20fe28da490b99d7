//! TTL Cache demo
//!
//! Walks a cache through its lifecycle: a few inserts spaced out in time,
//! lookups, a wait past expiry so the sweeper can empty it, and shutdown.

use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_cache::{Config, TtlCache};

/// Entries added by the walkthrough, two seconds apart.
const SAMPLES: [(&str, &str); 3] = [
    ("pikachu", r#"{"name": "Pikachu"}"#),
    ("doraemon", r#"{"name": "Doraemon"}"#),
    ("bulbasaur", r#"{"name": "Bulbasaur"}"#),
];

const STEP: Duration = Duration::from_secs(2);

/// Main entry point for the TTL cache demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache, which starts its sweep task
/// 4. Add and read back sample entries
/// 5. Wait two TTL periods and show the cache was swept
/// 6. Close the cache
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!("Configuration loaded: ttl={}s", config.ttl_secs);

    let cache = TtlCache::from_config(&config).context("failed to create cache")?;
    info!("Cache created");

    for (key, payload) in SAMPLES {
        cache.add(key, payload.as_bytes());
        tokio::time::sleep(STEP).await;
        log_snapshot(&cache)?;
    }

    for (key, _) in SAMPLES {
        match cache.get(key) {
            Some(bytes) => info!(key, payload = %String::from_utf8_lossy(&bytes), "hit"),
            None => info!(key, "miss (already swept)"),
        }
    }

    let wait = config.ttl().saturating_mul(2);
    info!(?wait, "Waiting for the sweeper");
    tokio::time::sleep(wait).await;
    log_snapshot(&cache)?;

    cache.close();
    info!("Demo complete");
    Ok(())
}

fn log_snapshot(cache: &TtlCache) -> anyhow::Result<()> {
    let stats = serde_json::to_string(&cache.stats())?;
    info!(len = cache.len(), %stats, "cache snapshot");
    Ok(())
}
