//! Wiring: build the record store and controller, then serve the chosen
//! front end.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::channels::{CliChannel, dialogue_routes, run_channel};
use crate::config::{AppConfig, Mode};
use crate::dialogue::{DialogueController, RecordStore, StaticRecordStore};
use crate::error::{ChannelError, Result};

/// Load the configured records, or the built-in sample set.
pub fn load_records(config: &AppConfig) -> Result<Arc<dyn RecordStore>> {
    let store = match config.records_path {
        Some(ref path) => StaticRecordStore::from_json_file(path)?,
        None => StaticRecordStore::sample(),
    };
    Ok(Arc::new(store))
}

/// Run until the front end stops.
pub async fn run(config: AppConfig) -> Result<()> {
    let records = load_records(&config)?;
    info!(records = records.records().len(), mode = ?config.mode, "Starting Lifeline Assist");

    let mut controller = DialogueController::new(records);

    match config.mode {
        Mode::Cli => {
            let channel = CliChannel::new();
            run_channel(&channel, &mut controller).await?;
        }
        Mode::Http => {
            let app = dialogue_routes(Arc::new(Mutex::new(controller)), config.max_photo_bytes);
            let addr = format!("0.0.0.0:{}", config.http_port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .map_err(|e| ChannelError::StartupFailed {
                    name: "http".to_string(),
                    reason: format!("bind {addr}: {e}"),
                })?;
            info!(port = config.http_port, "HTTP server started");
            axum::serve(listener, app).await.map_err(ChannelError::Io)?;
        }
    }

    Ok(())
}
