use crate::error::ClientError;
use crate::models::{Answer, UploadResponse};
use crate::render::{render, DecisionView};
use crate::session::SessionId;
use crate::validation::{validate_query, Precondition};

pub const UPLOADING_STATUS: &str = "Uploading and processing document...";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultsPanel {
    #[default]
    Empty,
    Decision(DecisionView),
    Error(String),
}

/// Handle for one issued query. Only the most recently issued ticket may
/// change the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    id: u64,
    pub session_id: SessionId,
    pub question: String,
}

impl QueryTicket {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Everything a front-end displays for one session: status line, query
/// section visibility, loading indicator and results area.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    session: Option<SessionId>,
    pub status: String,
    pub query_visible: bool,
    pub query_focused: bool,
    pub loading: bool,
    pub results: ResultsPanel,
    last_ticket: u64,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a session established elsewhere, e.g. by an earlier run.
    pub fn with_session(session_id: SessionId) -> Self {
        Self {
            session: Some(session_id),
            query_visible: true,
            query_focused: true,
            ..Self::default()
        }
    }

    pub fn session(&self) -> Option<&SessionId> {
        self.session.as_ref()
    }

    pub(crate) fn begin_upload(&mut self) {
        self.status = UPLOADING_STATUS.to_string();
    }

    pub(crate) fn finish_upload(
        &mut self,
        session_id: SessionId,
        outcome: Result<UploadResponse, ClientError>,
    ) {
        match outcome {
            Ok(response) => {
                log::info!("Session {} ready: {}", session_id, response.message);
                self.session = Some(session_id);
                self.status = response.message;
                self.query_visible = true;
                self.query_focused = true;
            }
            Err(err) => {
                log::warn!("Upload failed: {}", err);
                self.status = err.display_message();
            }
        }
    }

    /// Validates the question, shows the loading indicator and clears the
    /// previous results. Any earlier ticket is superseded.
    pub fn begin_query(&mut self, question: &str) -> Result<QueryTicket, Precondition> {
        let (question, session_id) = validate_query(question, self.session.as_ref())?;
        let ticket = QueryTicket {
            id: self.last_ticket + 1,
            session_id: session_id.clone(),
            question: question.to_string(),
        };
        self.last_ticket = ticket.id;
        self.loading = true;
        self.results = ResultsPanel::Empty;
        Ok(ticket)
    }

    /// Applies a query outcome. Returns `false`, leaving the state as is,
    /// when the ticket was superseded by a later `begin_query`.
    pub fn settle_query(
        &mut self,
        ticket: &QueryTicket,
        outcome: Result<Answer, ClientError>,
    ) -> bool {
        if ticket.id != self.last_ticket {
            log::info!(
                "Discarding result of superseded query #{} (latest #{})",
                ticket.id,
                self.last_ticket
            );
            return false;
        }

        self.loading = false;
        self.results = match outcome {
            Ok(answer) => ResultsPanel::Decision(render(&answer)),
            Err(err) => {
                log::warn!("Query #{} failed: {}", ticket.id, err);
                ResultsPanel::Error(err.display_message())
            }
        };
        true
    }
}
