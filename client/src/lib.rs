pub mod api_client;
pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod query_flow;
pub mod render;
pub mod session;
pub mod state;
pub mod upload_flow;
pub mod validation;

#[cfg(test)]
mod testing;

pub use api_client::{ApiClient, DocumentService};
pub use config::{ClientConfig, ConfigOverrides};
pub use document::DocumentFile;
pub use error::ClientError;
pub use models::*;
pub use query_flow::submit_query;
pub use render::{classify, render, ClauseView, DecisionCategory, DecisionView, ViewNode};
pub use session::SessionId;
pub use state::{ClientState, QueryTicket, ResultsPanel};
pub use upload_flow::upload_document;
pub use validation::Precondition;
