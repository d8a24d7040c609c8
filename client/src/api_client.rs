use crate::config::ClientConfig;
use crate::document::DocumentFile;
use crate::error::ClientError;
use crate::models::*;
use crate::session::SessionId;
use anyhow::Result;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::future::Future;

pub const UPLOAD_PATH: &str = "/upload_document/";
pub const QUERY_PATH: &str = "/query/";
pub const HEALTH_PATH: &str = "/";

/// The two calls the flows depend on. `ApiClient` is the network
/// implementation; tests substitute recording fakes.
pub trait DocumentService {
    fn upload_document(
        &self,
        session_id: &SessionId,
        document: DocumentFile,
    ) -> impl Future<Output = Result<UploadResponse, ClientError>> + Send;

    fn query(
        &self,
        request: &QueryRequest,
    ) -> impl Future<Output = Result<Answer, ClientError>> + Send;
}

/// HTTP client for the document decision backend. Cheap to clone; clones
/// share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {}", e))?;

        log::info!("API client targeting {}", config.base_url);
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn health(&self) -> Result<String, ClientError> {
        let url = self.config.endpoint(HEALTH_PATH);
        let response = self.client.get(&url).send().await?;
        let health: HealthResponse = read_json(response).await?;
        Ok(health.status)
    }
}

impl DocumentService for ApiClient {
    async fn upload_document(
        &self,
        session_id: &SessionId,
        document: DocumentFile,
    ) -> Result<UploadResponse, ClientError> {
        let url = self.config.endpoint(UPLOAD_PATH);
        log::info!(
            "Uploading {} for session {} to {}",
            document.filename,
            session_id,
            url
        );

        let file_part = Part::bytes(document.bytes)
            .file_name(document.filename)
            .mime_str(document.mime_type)?;
        let form = Form::new()
            .text("session_id", session_id.to_string())
            .part("file", file_part);

        let response = self.client.post(&url).multipart(form).send().await?;
        read_json(response).await
    }

    async fn query(&self, request: &QueryRequest) -> Result<Answer, ClientError> {
        let url = self.config.endpoint(QUERY_PATH);
        log::info!("Querying session {} at {}", request.session_id, url);

        let response = self.client.post(&url).json(request).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.detail_text())
            .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
            .unwrap_or_else(|| format!("HTTP {}", status));
        log::warn!("Backend returned {}: {}", status, detail);
        return Err(ClientError::Server {
            status: status.as_u16(),
            detail,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
