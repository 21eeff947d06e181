//! Default seed script - fills every retail table with synthetic data
//!
//! Run with:
//! ```
//! cargo run -p retail-seed --bin seed
//! ```
//!
//! Configuration comes from `SEED_CONFIG` (a JSON file) and the `DATABASE_URL`
//! / `SEED_*` environment variables.

use anyhow::{Context, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use retail_seed::builders::Pipeline;
use retail_seed::config::{FailurePolicy, SeedConfig};
use retail_seed::db::Seeder;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::load().context("Invalid seed configuration")?;

    let mut seeder = Seeder::connect(&config.database)
        .await
        .context("Error connecting to database")?
        .with_batch_size(config.batch_size);

    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = Pipeline::from_config(&config)
        .run(&mut seeder, &mut rng)
        .await;

    seeder.close().await.context("Error closing connection")?;

    // Summary output
    tracing::info!("Seed finished: {} rows inserted", report.total_inserted());
    for step in &report.steps {
        match &step.error {
            None => tracing::info!(
                "  {}: {}/{} ({} ms)",
                step.table.label(),
                step.inserted,
                step.requested,
                step.elapsed_ms
            ),
            Some(e) => tracing::warn!("  {}: failed ({})", step.table.label(), e),
        }
    }

    if let Some(table) = report.aborted_at {
        bail!("Seeding aborted at {}", table.label());
    }
    if config.on_failure == FailurePolicy::Continue && !report.is_complete() {
        tracing::warn!("{} step(s) failed", report.failures().count());
    }

    Ok(())
}
