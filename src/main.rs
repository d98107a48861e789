use anyhow::{bail, Result};
use sheetsync::{config::Config, pipeline};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when running in CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sheetsync=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let command = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());
    match command.as_str() {
        "sync" => {
            info!("Starting language synchronization");
            pipeline::synchronize_languages(&config).await?;
        }
        "chars" => {
            info!("Updating character sets");
            pipeline::update_character_sets(&config)?;
        }
        "all" => {
            info!("Starting language synchronization");
            pipeline::synchronize_languages(&config).await?;
            info!("Updating character sets");
            pipeline::update_character_sets(&config)?;
        }
        other => bail!("Unknown command '{other}' (expected sync, chars, or all)"),
    }

    info!("Done");
    Ok(())
}
