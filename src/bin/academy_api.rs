use anyhow::{Context, Result};

use academy_catalog::api::server;
use academy_catalog::config::AcademyConfig;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut config = AcademyConfig::load_or_default().context("loading settings")?;
    // First argument overrides the spreadsheet path.
    if let Some(path) = std::env::args().nth(1) {
        config.spreadsheet_path = path.into();
    }
    log::info!("Serving courses from {}", config.spreadsheet_path.display());

    let addr = config.api_addr.clone();
    server::serve(config)
        .await
        .with_context(|| format!("running academy API on {addr}"))
}
