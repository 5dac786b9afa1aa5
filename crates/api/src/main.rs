//! Keyword Chatbot - Main Entry Point

use chat_api::settings::Settings;
use chat_api::{init_logging, run_server};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    init_logging(&settings.logging)?;

    info!("=== Keyword Chatbot v{} ===", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server(settings).await {
        error!("Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
