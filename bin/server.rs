// Menu Roulette - Web Server

use anyhow::Result;
use menu_roulette::{server::start_server, Config, VERSION};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    info!("🎰 Menu Roulette v{VERSION} - Web Server");

    let config = Config::load()?;
    start_server(config).await
}
