use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success status. Displays as the server's detail text alone.
    #[error("{detail}")]
    Server { status: u16, detail: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Single line shown in the status line or the results area.
    pub fn display_message(&self) -> String {
        format!("Error: {}", self)
    }
}
