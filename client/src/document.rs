use crate::error::ClientError;
use std::path::Path;

/// File contents staged for the multipart upload.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    pub async fn read(file_path: &Path) -> Result<Self, ClientError> {
        let filename = file_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "document".to_string());

        let bytes = tokio::fs::read(file_path).await.map_err(|source| ClientError::Io {
            path: file_path.to_path_buf(),
            source,
        })?;

        log::info!("Read {} ({} bytes)", filename, bytes.len());

        Ok(Self {
            mime_type: mime_for(file_path),
            filename,
            bytes,
        })
    }
}

/// Content type for the formats the backend parses; anything else goes up
/// as raw bytes and the server decides.
fn mime_for(file_path: &Path) -> &'static str {
    let extension = file_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
