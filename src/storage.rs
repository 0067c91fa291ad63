use crate::errors::AppError;
use crate::models::TrackerData;
use chrono::Utc;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/tracker.json"))
}

/// Reads the persisted document, creating and writing a fresh one on first
/// run. Never fails: an unreadable or unparsable file is logged and a fresh
/// in-memory document is used without overwriting what is on disk.
pub async fn load_or_init(path: &Path) -> TrackerData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                TrackerData::new(Utc::now())
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let data = TrackerData::new(Utc::now());
            if let Err(err) = persist_data(path, &data).await {
                error!("failed to write initial data file: {}", err.message);
            }
            data
        }
        Err(err) => {
            error!("failed to read data file: {err}");
            TrackerData::new(Utc::now())
        }
    }
}

pub async fn persist_data(path: &Path, data: &TrackerData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
