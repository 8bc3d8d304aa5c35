use ohack_availability::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting ohack-availability");

    // Load configuration
    let config = startup::load_config()?;

    startup::run(config).await
}
