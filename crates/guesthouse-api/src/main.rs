//! Guest house server binary
//!
//! Reads configuration from the environment (a `.env` file is honored when
//! present), connects to PostgreSQL, seeds the bootstrap admin if one is
//! configured, and serves the check-in ledger API.

use guesthouse_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("tracing init failed: {e}");
    }

    if let Err(e) = serve().await {
        error!(error = %e, "server exited");
        std::process::exit(1);
    }
}

async fn serve() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "configuration loaded"
    );

    guesthouse_api::run(config).await?;
    Ok(())
}
