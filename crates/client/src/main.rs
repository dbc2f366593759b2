//! Terminal quiz client entry point.
use anyhow::Result;

use quiz_client::app::QuizApp;
use quiz_client::config::ClientConfig;
use quiz_client::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();

    // The TUI owns the terminal, so all tracing output goes to a file.
    logging::setup(config.log_dir.as_deref())?;

    QuizApp::builder(config).build()?.run().await
}
