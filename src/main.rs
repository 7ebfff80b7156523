use anyhow::Context;

use lifeline_assist::app;
use lifeline_assist::config::{AppConfig, Mode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the CLI conversation owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    eprintln!("🤖 Lifeline Assist v{}", env!("CARGO_PKG_VERSION"));
    match config.mode {
        Mode::Cli => eprintln!("   Type /help for commands, /quit to exit.\n"),
        Mode::Http => eprintln!("   API: http://0.0.0.0:{}/api/session\n", config.http_port),
    }
    if let Some(ref path) = config.records_path {
        eprintln!("   Records: {}", path.display());
    }

    app::run(config).await.context("lifeline assist stopped")?;
    Ok(())
}
