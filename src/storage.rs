use crate::errors::AppError;
use crate::models::AppData;
use std::io;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// Loads the completion list. A missing file is an empty store; a read
/// or parse failure is an error the caller must handle — it is never
/// coerced to "no records", which would silently zero the streak.
pub async fn load_data(path: &Path) -> Result<AppData, io::Error> {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
            error!("failed to parse data file {}: {err}", path.display());
            io::Error::new(io::ErrorKind::InvalidData, err)
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(AppData::default()),
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            Err(err)
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
