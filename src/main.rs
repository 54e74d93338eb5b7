use gitlab_cloner::common::logging::init_logging;
use gitlab_cloner::presentation::cli::CliApp;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let app = CliApp::new();

    // Initialize logging
    init_logging(&app.logging_config())?;

    // Run the CLI application
    app.run().await
}
