use thiserror::Error;

/// Errors raised while writing a table.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to write table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize table: {0}")]
    Json(#[from] serde_json::Error),
}
