//! Recording fake of [`DocumentService`] for flow tests.

use crate::api_client::DocumentService;
use crate::document::DocumentFile;
use crate::error::ClientError;
use crate::models::{Answer, QueryRequest, UploadResponse};
use crate::session::SessionId;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Reply<T> {
    Ok(T),
    Err(u16, String),
}

impl<T: Clone> Reply<T> {
    fn produce(&self) -> Result<T, ClientError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Err(status, detail) => Err(ClientError::Server {
                status: *status,
                detail: detail.clone(),
            }),
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeService {
    upload_reply: Option<Reply<UploadResponse>>,
    query_reply: Option<Reply<Answer>>,
    uploads: Mutex<Vec<(SessionId, String)>>,
    queries: Mutex<Vec<QueryRequest>>,
}

impl FakeService {
    pub fn upload_ok(mut self, message: &str) -> Self {
        self.upload_reply = Some(Reply::Ok(UploadResponse {
            message: message.to_string(),
            session_id: None,
            filename: None,
        }));
        self
    }

    pub fn upload_err(mut self, status: u16, detail: &str) -> Self {
        self.upload_reply = Some(Reply::Err(status, detail.to_string()));
        self
    }

    pub fn query_ok(mut self, answer: Answer) -> Self {
        self.query_reply = Some(Reply::Ok(answer));
        self
    }

    pub fn query_err(mut self, status: u16, detail: &str) -> Self {
        self.query_reply = Some(Reply::Err(status, detail.to_string()));
        self
    }

    pub fn upload_calls(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn uploaded_sessions(&self) -> Vec<SessionId> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|(session, _)| session.clone())
            .collect()
    }

    pub fn query_calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<QueryRequest> {
        self.queries.lock().unwrap().clone()
    }
}

impl DocumentService for FakeService {
    async fn upload_document(
        &self,
        session_id: &SessionId,
        document: DocumentFile,
    ) -> Result<UploadResponse, ClientError> {
        self.uploads
            .lock()
            .unwrap()
            .push((session_id.clone(), document.filename));
        self.upload_reply
            .as_ref()
            .expect("no upload reply configured")
            .produce()
    }

    async fn query(&self, request: &QueryRequest) -> Result<Answer, ClientError> {
        self.queries.lock().unwrap().push(request.clone());
        self.query_reply
            .as_ref()
            .expect("no query reply configured")
            .produce()
    }
}
