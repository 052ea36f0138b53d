use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerrainError {
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
